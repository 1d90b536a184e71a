//! Prompt flow for the wrap command.

use warpwrap_config::{defaults, Config};
use warpwrap_core::{EditorHost, InputPrompt, NoticeLevel, PickPrompt};
use warpwrap_session::LastUsed;
use warpwrap_wrap::{is_valid_tag_name, scrape_attributes, AttributeSet};

use crate::notices;

/// Tag list entry that asks for a free-form tag name
pub(crate) const CUSTOM_TAG: &str = "custom";

/// Tags in chooser order
pub(crate) fn tag_choices(config: &Config, last: &LastUsed) -> Vec<String> {
    let mut tags = if config.default_tags.is_empty() {
        defaults::TAGS.iter().map(|tag| tag.to_string()).collect()
    } else {
        config.default_tags.clone()
    };

    if config.use_last_tag && !last.tag.is_empty() {
        tags.retain(|tag| *tag != last.tag);
        tags.insert(0, last.tag.clone());
    }
    tags
}

/// Ask for the tag. `None` means the user backed out.
pub(crate) fn choose_tag<H: EditorHost + ?Sized>(
    host: &mut H,
    config: &Config,
    last: &LastUsed,
) -> Option<String> {
    let prompt = PickPrompt {
        placeholder: "Select a tag to wrap your selection".to_string(),
        items: tag_choices(config, last),
    };
    let picked = host.pick(&prompt)?;
    let tag = if picked == CUSTOM_TAG {
        host.input(&InputPrompt {
            prompt: "Enter a tag name".to_string(),
            placeholder: "e.g. my-component".to_string(),
            value: String::new(),
        })?
    } else {
        picked
    };

    // Configured tags get the same check as typed ones
    let tag = tag.trim();
    if tag.is_empty() {
        return None;
    }
    if !is_valid_tag_name(tag) {
        host.notify(NoticeLevel::Warning, &notices::invalid_tag(tag));
        return None;
    }
    Some(tag.to_string())
}

/// Prompt defaults: values found near the cursor, else the last used ones.
pub(crate) fn attribute_defaults<H: EditorHost + ?Sized>(
    host: &H,
    cursor_line: usize,
    last: &LastUsed,
) -> AttributeSet {
    let scraped = scrape_attributes(cursor_line, |idx| host.line_text(idx)).unwrap_or_else(|e| {
        warpwrap_logger::warn(format!("Attribute scan failed: {:#}", e));
        AttributeSet::default()
    });

    let or_last = |value: String, fallback: &str| {
        if value.is_empty() {
            fallback.to_string()
        } else {
            value
        }
    };

    AttributeSet {
        class_name: or_last(scraped.class_name, &last.class_name),
        id_name: or_last(scraped.id_name, &last.id_name),
        inline_styles: scraped.inline_styles,
    }
}

/// Ask for class, id and inline styles in that order.
pub(crate) fn ask_attributes<H: EditorHost + ?Sized>(
    host: &mut H,
    defaults: AttributeSet,
) -> Option<AttributeSet> {
    let class_name = host.input(&InputPrompt {
        prompt: "Enter class name (optional)".to_string(),
        placeholder: "e.g. my-class".to_string(),
        value: defaults.class_name,
    })?;
    let id_name = host.input(&InputPrompt {
        prompt: "Enter ID (optional)".to_string(),
        placeholder: "e.g. my-id".to_string(),
        value: defaults.id_name,
    })?;
    let inline_styles = host.input(&InputPrompt {
        prompt: "Enter inline styles (optional)".to_string(),
        placeholder: "e.g. color: red; font-size: 14px;".to_string(),
        value: defaults.inline_styles,
    })?;

    Some(AttributeSet::new(class_name, id_name, inline_styles))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last(tag: &str) -> LastUsed {
        LastUsed {
            tag: tag.to_string(),
            ..LastUsed::default()
        }
    }

    #[test]
    fn test_tag_choices_default_order() {
        let tags = tag_choices(&Config::default(), &last("aside"));
        assert_eq!(tags.first().map(String::as_str), Some("div"));
        assert_eq!(tags.last().map(String::as_str), Some("custom"));
    }

    #[test]
    fn test_tag_choices_last_tag_first() {
        let config = Config {
            use_last_tag: true,
            ..Config::default()
        };
        let tags = tag_choices(&config, &last("aside"));
        assert_eq!(tags[0], "aside");
        assert_eq!(tags.iter().filter(|t| *t == "aside").count(), 1);
        assert_eq!(tags.len(), Config::default().default_tags.len());

        // A tag outside the configured list is still offered first
        let tags = tag_choices(&config, &last("main"));
        assert_eq!(tags[0], "main");
        assert_eq!(tags.len(), Config::default().default_tags.len() + 1);
    }

    #[test]
    fn test_tag_choices_empty_list_falls_back() {
        let config = Config {
            default_tags: Vec::new(),
            ..Config::default()
        };
        assert_eq!(tag_choices(&config, &LastUsed::default()).len(), 9);
    }
}
