//! platefix_engine - Pure text logic for the column A edit trigger.

pub mod edit;
pub mod engine;

pub use edit::EditNotification;
pub use engine::{CellRef, normalize, normalize_text, normalize_value};
