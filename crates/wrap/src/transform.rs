use crate::WrapRequest;

/// Extra indent of the body line in a fresh wrap
pub const BODY_INDENT: &str = "    ";

/// A tag that spans a whole selection: `<tag attributes>body</tag>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistingWrapper<'a> {
    pub tag: &'a str,
    /// Raw text between the tag name and `>`, leading space included
    pub attributes: &'a str,
    pub body: &'a str,
}

/// Which path a selection took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrapKind {
    /// Selection was wrapped in a new indented block
    Fresh,
    /// Existing outer tag was rewritten
    Rewrap,
}

/// Replacement text for one selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped {
    pub kind: WrapKind,
    pub text: String,
}

fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Whether `name` can be used as a tag name (`[a-zA-Z0-9-]+`)
pub fn is_valid_tag_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_tag_name_byte)
}

/// Match the whole of `text` as `<name attrs>body</name>`.
///
/// `attrs` runs up to the first `>` and may not contain a line break; `body`
/// is everything up to the closing tag, which has to end the text. When the
/// full opening name does not close the text, shorter prefixes of it are
/// tried, longest first. Same-name tags nested in the body are not
/// balanced: the last closing tag wins.
pub fn detect_wrapper(text: &str) -> Option<ExistingWrapper<'_>> {
    let rest = text.strip_prefix('<')?;
    let name_len = rest.bytes().take_while(|b| is_tag_name_byte(*b)).count();

    for len in (1..=name_len).rev() {
        let tag = &rest[..len];
        let closing = format!("</{}>", tag);
        if !text.ends_with(&closing) {
            continue;
        }

        let region_start = 1 + len;
        let Some(region_end) = text.len().checked_sub(closing.len()) else {
            continue;
        };
        if region_start > region_end {
            continue;
        }

        let region = &text[region_start..region_end];
        for (idx, c) in region.char_indices() {
            if is_line_break(c) {
                break;
            }
            if c == '>' {
                return Some(ExistingWrapper {
                    tag,
                    attributes: &region[..idx],
                    body: &region[idx + 1..],
                });
            }
        }
    }

    None
}

/// Leading whitespace of a line
pub fn leading_indent(line: &str) -> &str {
    let end = line
        .char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map(|(idx, _)| idx)
        .unwrap_or(line.len());
    &line[..end]
}

/// Wrap text in a new block:
///
/// ```text
/// {indent}<tag attrs>
/// {indent}    trimmed text
/// {indent}</tag>
/// ```
pub fn wrap_fresh(text: &str, indent: &str, tag: &str, attributes: &str) -> String {
    format!(
        "{indent}<{tag}{attributes}>\n{indent}{BODY_INDENT}{}\n{indent}</{tag}>",
        text.trim()
    )
}

/// Render a user template for a fresh wrap.
///
/// Substitutes `{indent}`, `{tag}`, `{attributes}` and `{content}` (the
/// trimmed text) in one pass, so braces inside the substituted values are
/// left alone. Unknown placeholders are kept verbatim.
pub fn render_template(
    template: &str,
    text: &str,
    indent: &str,
    tag: &str,
    attributes: &str,
) -> String {
    let mut out = String::with_capacity(template.len() + text.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open..];
        let Some(close) = after.find('}') else {
            break;
        };

        match &after[1..close] {
            "indent" => out.push_str(indent),
            "tag" => out.push_str(tag),
            "attributes" => out.push_str(attributes),
            "content" => out.push_str(text.trim()),
            _ => out.push_str(&after[..=close]),
        }
        rest = &after[close + 1..];
    }
    // Either no braces are left or an unclosed one starts the tail
    if let Some(open) = rest.find('{') {
        out.push_str(&rest[open..]);
    } else {
        out.push_str(rest);
    }
    out
}

/// Replace the tag and attributes of an existing wrapper, keeping its body.
pub fn rewrap(wrapper: &ExistingWrapper<'_>, tag: &str, attributes: &str) -> String {
    format!("<{tag}{attributes}>{}</{tag}>", wrapper.body)
}

/// Transform one selection.
///
/// `line` is the full text of the line the selection starts on; its leading
/// whitespace indents a fresh wrap. `template` replaces the built-in fresh
/// layout when given.
pub fn transform(
    text: &str,
    line: &str,
    request: &WrapRequest,
    template: Option<&str>,
) -> Wrapped {
    let attributes = request.attribute_string();

    if let Some(existing) = detect_wrapper(text) {
        return Wrapped {
            kind: WrapKind::Rewrap,
            text: rewrap(&existing, &request.tag, &attributes),
        };
    }

    let indent = leading_indent(line);
    let text = match template {
        Some(template) => render_template(template, text, indent, &request.tag, &attributes),
        None => wrap_fresh(text, indent, &request.tag, &attributes),
    };
    Wrapped {
        kind: WrapKind::Fresh,
        text,
    }
}
