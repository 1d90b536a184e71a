//! Text transformations behind the wrap commands.
//!
//! Everything here is pure string work: formatting an attribute string,
//! wrapping a selection in a fresh indented block or rewriting the tag that
//! already wraps it, and scraping attribute defaults from nearby lines.

mod attributes;
mod scraper;
mod transform;

pub use attributes::{escape_attribute_value, format_attributes, AttributeSet};
pub use scraper::{scrape_attributes, SCRAPE_LOOKBACK};
pub use transform::{
    detect_wrapper, is_valid_tag_name, leading_indent, render_template, rewrap, transform,
    wrap_fresh, ExistingWrapper, WrapKind, Wrapped, BODY_INDENT,
};

/// A tag plus attributes to wrap selections with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrapRequest {
    pub tag: String,
    pub attributes: AttributeSet,
    /// Emit `className` instead of `class`
    pub jsx_mode: bool,
}

impl WrapRequest {
    pub fn new(tag: impl Into<String>, attributes: AttributeSet, jsx_mode: bool) -> Self {
        Self {
            tag: tag.into(),
            attributes,
            jsx_mode,
        }
    }

    /// The formatted attribute string, leading space included
    pub fn attribute_string(&self) -> String {
        format_attributes(&self.attributes, self.jsx_mode)
    }
}
