//! Core types and traits for warpwrap.
//!
//! This crate provides the foundational abstractions shared by the wrap
//! commands and every editor host: positions, selections, text edits and the
//! [`EditorHost`] trait the commands talk to.

pub mod command;
pub mod host;
pub mod position;

pub use command::CommandOutcome;
pub use host::{EditorHost, InputPrompt, NoticeLevel, PanelView, PickPrompt, TextEdit};
pub use position::{Position, Selection};
