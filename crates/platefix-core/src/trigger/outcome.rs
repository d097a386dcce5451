use std::fmt;

use platefix_engine::CellRef;

/// Why an edit was left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Invoked directly, without an edit.
    NoNotification,
    OutsideTargetColumn,
    HeaderRow,
    /// The cell was cleared.
    EmptyValue,
    /// The value is already normalized.
    Unchanged,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::NoNotification => "no edit notification",
            SkipReason::OutsideTargetColumn => "outside target column",
            SkipReason::HeaderRow => "header row",
            SkipReason::EmptyValue => "cell cleared",
            SkipReason::Unchanged => "already normalized",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one trigger invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Written { cell: CellRef, value: String },
    Skipped(SkipReason),
}

impl EditOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, EditOutcome::Written { .. })
    }

    /// The value written back, if any.
    pub fn written_value(&self) -> Option<&str> {
        match self {
            EditOutcome::Written { value, .. } => Some(value),
            EditOutcome::Skipped(_) => None,
        }
    }
}

impl fmt::Display for EditOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditOutcome::Written { value, .. } => f.write_str(value),
            EditOutcome::Skipped(reason) => write!(f, "unchanged ({})", reason),
        }
    }
}
