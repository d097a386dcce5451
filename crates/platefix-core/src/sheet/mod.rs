//! Host sheet seam.
//!
//! The trigger only needs to read a cell and write one back. Real hosts
//! implement [`Sheet`] over their own storage; [`MemorySheet`] backs manual
//! runs and tests.

mod memory;

pub use memory::MemorySheet;

use crate::error::Result;
use platefix_engine::CellRef;

pub trait Sheet {
    /// Current text of `cell`, or `None` if it is empty.
    fn value(&self, cell: &CellRef) -> Option<String>;

    /// Commit text the user typed into `cell`. This is the host's own commit
    /// that precedes the edit hook, not a trigger write-back.
    fn enter(&mut self, cell: CellRef, value: String);

    /// Write the trigger's replacement `value` back to `cell`.
    fn set_value(&mut self, cell: CellRef, value: String) -> Result<()>;
}
