use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use warpwrap_wrap::AttributeSet;

/// Message posted by the preview panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command")]
pub enum PanelMessage {
    /// Wrap the active selection with the chosen tag and attributes
    #[serde(rename = "wrapText")]
    WrapText {
        tag: String,
        #[serde(rename = "className", default)]
        class_name: String,
        #[serde(rename = "idName", default)]
        id_name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        styles: Option<String>,
    },
}

impl PanelMessage {
    /// Parse a raw JSON message
    pub fn parse(raw: &str) -> Result<Self> {
        serde_json::from_str(raw.trim()).context("Invalid panel message")
    }

    /// Attributes carried by the message
    pub fn attributes(&self) -> AttributeSet {
        match self {
            PanelMessage::WrapText {
                class_name,
                id_name,
                styles,
                ..
            } => AttributeSet::new(
                class_name.clone(),
                id_name.clone(),
                styles.clone().unwrap_or_default(),
            ),
        }
    }
}
