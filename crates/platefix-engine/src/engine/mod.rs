//! Text engine API.
//!
//! - [`TRANSLITERATION`] - Cyrillic homoglyph table
//! - [`normalize_text`] - Transliterate, uppercase and filter a raw cell value
//! - [`normalize`] - Apply the column A trigger rules to an edit notification
//! - [`CellRef`] - Cell reference parsing (A1 notation ↔ 1-based column/row)

mod cell_ref;
mod normalize;
mod transliterate;

pub use cell_ref::CellRef;
pub use normalize::{normalize, normalize_text, normalize_value};
pub use transliterate::{TRANSLITERATION, transliterate_char};
