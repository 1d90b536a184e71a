use warpwrap_wrap::{escape_attribute_value as escaped, format_attributes, AttributeSet};

/// Identifier hosts use for the panel kind
pub const PANEL_VIEW_TYPE: &str = "warpwrapUI";
pub const PANEL_TITLE: &str = "WarpWrap - HTML Wrapper";
/// Stand-in body shown by the live preview
pub const PREVIEW_PLACEHOLDER: &str = "Your selected text";

const TEMPLATE: &str = include_str!("../assets/panel.html");

/// Render the panel document with one dropdown option per tag.
///
/// The preview starts out showing the first tag with no attributes, so the
/// page reads correctly before its script runs.
pub fn render_panel(tags: &[&str]) -> String {
    let options = tags
        .iter()
        .map(|tag| {
            let tag = escaped(tag);
            format!("            <option value=\"{tag}\">{tag}</option>")
        })
        .collect::<Vec<_>>()
        .join("\n");

    let initial = tags
        .first()
        .map(|tag| escaped(&preview_markup(tag, &AttributeSet::default())))
        .unwrap_or_default();

    TEMPLATE
        .replace("__TITLE__", &escaped(PANEL_TITLE))
        .replace("__INITIAL_PREVIEW__", &initial)
        .replace("__PREVIEW_PLACEHOLDER__", PREVIEW_PLACEHOLDER)
        .replace("__TAG_OPTIONS__", &options)
}

/// What the panel's live preview shows for the given fields.
///
/// Same ordering and escaping as the wrap formatter, always with `class`.
pub fn preview_markup(tag: &str, attributes: &AttributeSet) -> String {
    format!(
        "<{tag}{}>{PREVIEW_PLACEHOLDER}</{tag}>",
        format_attributes(attributes, false)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_panel_fills_placeholders() {
        let html = render_panel(&["div", "span"]);
        assert!(html.contains("<title>WarpWrap - HTML Wrapper</title>"));
        assert!(html.contains(r#"<option value="span">span</option>"#));
        assert!(html.contains("Your selected text"));
        assert!(!html.contains("__TAG_OPTIONS__"));
        assert!(!html.contains("__TITLE__"));
        assert!(html.contains(
            r#"<pre id="preview">&lt;div&gt;Your selected text&lt;/div&gt;</pre>"#
        ));
        assert!(html.contains("command: 'wrapText'"));
    }

    #[test]
    fn test_render_panel_escapes_tag_names() {
        let html = render_panel(&["x\"><script>"]);
        assert!(html.contains("x&quot;&gt;&lt;script&gt;"));
    }

    #[test]
    fn test_render_panel_without_tags() {
        let html = render_panel(&[]);
        assert!(html.contains(r#"<pre id="preview"></pre>"#));
    }

    #[test]
    fn test_preview_matches_wrap_escaping() {
        let attrs = AttributeSet::new("", "", "font-family: 'Open Sans'");
        assert_eq!(
            preview_markup("p", &attrs),
            r#"<p style="font-family: &#39;Open Sans&#39;">Your selected text</p>"#
        );
        // The script's escapeValue covers the same characters
        let html = render_panel(&["p"]);
        assert!(html.contains(".replace(/'/g, '&#39;')"));
    }

    #[test]
    fn test_preview_markup_order() {
        assert_eq!(
            preview_markup("div", &AttributeSet::default()),
            "<div>Your selected text</div>"
        );
        assert_eq!(
            preview_markup("p", &AttributeSet::new("c", "i", "color: red")),
            r#"<p class="c" id="i" style="color: red">Your selected text</p>"#
        );
        assert_eq!(
            preview_markup("p", &AttributeSet::new("", "i", "")),
            r#"<p id="i">Your selected text</p>"#
        );
    }
}
