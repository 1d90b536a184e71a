mod panel;
mod undo;
mod wrap;

pub use panel::{handle_panel_message, open_preview_panel};
pub use undo::undo_last_wrap;
pub use wrap::wrap_selection;
