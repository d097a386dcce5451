//! platefix-core - Edit trigger wired to a host sheet.

pub mod config;
pub mod error;
pub mod sheet;
pub mod trigger;

pub use config::TriggerConfig;
pub use error::{PlatefixError, Result};
pub use sheet::{MemorySheet, Sheet};
pub use trigger::{EditOutcome, EditTrigger, SkipReason};

pub use platefix_engine::{CellRef, EditNotification};
