use pulldown_cmark_escape::escape_html;

/// Class, id and inline style values; empty means absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    pub class_name: String,
    pub id_name: String,
    pub inline_styles: String,
}

impl AttributeSet {
    pub fn new(
        class_name: impl Into<String>,
        id_name: impl Into<String>,
        inline_styles: impl Into<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            id_name: id_name.into(),
            inline_styles: inline_styles.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.class_name.is_empty() && self.id_name.is_empty() && self.inline_styles.is_empty()
    }

    /// Whether every value is filled in
    pub fn is_complete(&self) -> bool {
        !self.class_name.is_empty() && !self.id_name.is_empty() && !self.inline_styles.is_empty()
    }
}

/// Format attributes as ` key="value"` pairs.
///
/// Order is always class (or `className` in jsx mode), id, style. Empty
/// values are skipped and an empty set yields an empty string. Values are
/// HTML-escaped so a stray quote cannot end the attribute early.
pub fn format_attributes(attributes: &AttributeSet, jsx_mode: bool) -> String {
    let class_key = if jsx_mode { "className" } else { "class" };
    let pairs = [
        (class_key, attributes.class_name.as_str()),
        ("id", attributes.id_name.as_str()),
        ("style", attributes.inline_styles.as_str()),
    ];

    let mut out = String::new();
    for (key, value) in pairs {
        if value.is_empty() {
            continue;
        }
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute_value(value));
        out.push('"');
    }
    out
}

/// Escape `&`, `<`, `>`, `"` and `'` for use inside an attribute or text
pub fn escape_attribute_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    // Writing into a String cannot fail
    let _ = escape_html(&mut out, value);
    out
}
