use std::collections::{HashMap, HashSet};

use super::Sheet;
use crate::error::{PlatefixError, Result};
use platefix_engine::CellRef;

/// In-memory sheet keyed by cell reference.
#[derive(Default)]
pub struct MemorySheet {
    cells: HashMap<CellRef, String>,
    /// Cells the host refuses to write back to (protected ranges)
    protected: HashSet<CellRef>,
    /// Number of successful `set_value` calls
    writes: usize,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse future write-backs to `cell`.
    pub fn protect(&mut self, cell: CellRef) {
        self.protected.insert(cell);
    }

    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn store(&mut self, cell: CellRef, value: String) {
        if value.is_empty() {
            self.cells.remove(&cell);
        } else {
            self.cells.insert(cell, value);
        }
    }
}

impl Sheet for MemorySheet {
    fn value(&self, cell: &CellRef) -> Option<String> {
        self.cells.get(cell).cloned()
    }

    fn enter(&mut self, cell: CellRef, value: String) {
        self.store(cell, value);
    }

    fn set_value(&mut self, cell: CellRef, value: String) -> Result<()> {
        if self.protected.contains(&cell) {
            return Err(PlatefixError::Write {
                cell: cell.to_string(),
                message: "cell is protected".to_string(),
            });
        }
        self.store(cell, value);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enter_does_not_count_as_write() {
        let mut sheet = MemorySheet::new();
        sheet.enter(CellRef::new(1, 2), "abc".to_string());
        assert_eq!(sheet.value(&CellRef::new(1, 2)).as_deref(), Some("abc"));
        assert_eq!(sheet.writes(), 0);
    }

    #[test]
    fn test_enter_ignores_protection() {
        let mut sheet = MemorySheet::new();
        sheet.protect(CellRef::new(1, 2));
        sheet.enter(CellRef::new(1, 2), "abc".to_string());
        assert_eq!(sheet.value(&CellRef::new(1, 2)).as_deref(), Some("abc"));
    }

    #[test]
    fn test_set_value_counts_writes() {
        let mut sheet = MemorySheet::new();
        sheet.set_value(CellRef::new(1, 2), "ABC".to_string()).unwrap();
        sheet.set_value(CellRef::new(1, 3), "DEF".to_string()).unwrap();
        assert_eq!(sheet.writes(), 2);
        assert_eq!(sheet.len(), 2);
    }

    #[test]
    fn test_empty_value_clears_cell() {
        let mut sheet = MemorySheet::new();
        sheet.enter(CellRef::new(1, 2), "-".to_string());
        sheet.set_value(CellRef::new(1, 2), String::new()).unwrap();
        assert_eq!(sheet.value(&CellRef::new(1, 2)), None);
        assert!(sheet.is_empty());
    }

    #[test]
    fn test_protected_cell_rejects_write() {
        let mut sheet = MemorySheet::new();
        sheet.protect(CellRef::new(1, 2));
        let err = sheet
            .set_value(CellRef::new(1, 2), "ABC".to_string())
            .unwrap_err();
        assert!(matches!(err, PlatefixError::Write { .. }));
        assert_eq!(err.to_string(), "Cannot write A2: cell is protected");
        assert_eq!(sheet.writes(), 0);
    }
}
