//! Edit notifications delivered by the spreadsheet host.

use crate::engine::CellRef;

/// Column watched by the trigger (column A).
pub const TARGET_COLUMN: u32 = 1;

/// Rows at the top of the sheet that are never rewritten.
pub const HEADER_ROWS: u32 = 1;

/// One user edit: where it happened and what was typed.
///
/// `value` is `None` (or empty) when the cell was cleared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditNotification {
    pub column: u32,
    pub row: u32,
    pub value: Option<String>,
}

impl EditNotification {
    pub fn new(column: u32, row: u32, value: Option<String>) -> Self {
        EditNotification { column, row, value }
    }

    /// Build a notification for an edit of `cell`.
    pub fn at(cell: CellRef, value: impl Into<String>) -> Self {
        Self::new(cell.col, cell.row, Some(value.into()))
    }

    /// The edited location.
    pub fn cell(&self) -> CellRef {
        CellRef::new(self.column, self.row)
    }

    /// The new value, treating an empty string as cleared.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    /// True when the edit lands in `target_column` below the first `header_rows` rows.
    pub fn is_in_range(&self, target_column: u32, header_rows: u32) -> bool {
        self.column == target_column && self.row > header_rows
    }

    /// True when the edit lands in column A below the header row.
    pub fn is_eligible(&self) -> bool {
        self.is_in_range(TARGET_COLUMN, HEADER_ROWS)
    }
}
