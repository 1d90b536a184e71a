use anyhow::{Context, Result};
use regex::Regex;

use crate::AttributeSet;

/// How many lines above the cursor line are searched
pub const SCRAPE_LOOKBACK: usize = 5;

/// Pick up class, id and style values written near the cursor.
///
/// Looks at the cursor line and up to [`SCRAPE_LOOKBACK`] lines above it,
/// top to bottom. The first value found for each attribute wins and the
/// scan stops once all three are known. `line_at` returns `None` for lines
/// that do not exist, which are skipped.
pub fn scrape_attributes<F>(cursor_line: usize, line_at: F) -> Result<AttributeSet>
where
    F: Fn(usize) -> Option<String>,
{
    let class_regex = Regex::new(r#"class=["']([^"']+)["']"#)
        .context("Failed to compile class attribute regex")?;
    let id_regex =
        Regex::new(r#"id=["']([^"']+)["']"#).context("Failed to compile id attribute regex")?;
    let style_regex = Regex::new(r#"style=["']([^"']+)["']"#)
        .context("Failed to compile style attribute regex")?;

    let mut found = AttributeSet::default();
    for line_idx in cursor_line.saturating_sub(SCRAPE_LOOKBACK)..=cursor_line {
        let Some(line) = line_at(line_idx) else {
            continue;
        };

        for (slot, regex) in [
            (&mut found.class_name, &class_regex),
            (&mut found.id_name, &id_regex),
            (&mut found.inline_styles, &style_regex),
        ] {
            if slot.is_empty() {
                if let Some(captures) = regex.captures(&line) {
                    *slot = captures[1].to_string();
                }
            }
        }

        if found.is_complete() {
            break;
        }
    }

    Ok(found)
}
