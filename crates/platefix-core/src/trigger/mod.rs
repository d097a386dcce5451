//! The column A edit trigger.
//!
//! [`EditTrigger::on_edit`] is what a host calls after every user edit. It
//! decides whether the edit is in scope, normalizes the value and writes it
//! back through the [`Sheet`] only when the text actually changed.

mod outcome;

pub use outcome::{EditOutcome, SkipReason};

use crate::config::TriggerConfig;
use crate::error::Result;
use crate::sheet::Sheet;
use platefix_engine::{CellRef, EditNotification, normalize_value};

/// Value used by the manual invocation path.
pub const SAMPLE_VALUE: &str = "АВС 123";

/// Cell used by the manual invocation path (A2).
pub const SAMPLE_CELL: CellRef = CellRef { col: 1, row: 2 };

#[derive(Clone, Debug, Default)]
pub struct EditTrigger {
    config: TriggerConfig,
}

impl EditTrigger {
    pub fn new(config: TriggerConfig) -> Self {
        EditTrigger { config }
    }

    pub fn config(&self) -> &TriggerConfig {
        &self.config
    }

    /// Decide what to do with an edit without touching any sheet.
    pub fn evaluate(
        &self,
        notification: Option<&EditNotification>,
    ) -> std::result::Result<(CellRef, String), SkipReason> {
        let Some(notification) = notification else {
            return Err(SkipReason::NoNotification);
        };
        let TriggerConfig {
            target_column,
            header_rows,
        } = self.config;
        if !notification.is_in_range(target_column, header_rows) {
            return Err(if notification.column != target_column {
                SkipReason::OutsideTargetColumn
            } else {
                SkipReason::HeaderRow
            });
        }
        if notification.value().is_none() {
            return Err(SkipReason::EmptyValue);
        }
        let Some(normalized) = normalize_value(notification.value()) else {
            return Err(SkipReason::Unchanged);
        };
        Ok((notification.cell(), normalized))
    }

    /// Handle one edit, writing the normalized value back if it differs.
    ///
    /// The only error is a failed write reported by the host.
    pub fn on_edit<S: Sheet + ?Sized>(
        &self,
        notification: Option<&EditNotification>,
        sheet: &mut S,
    ) -> Result<EditOutcome> {
        match self.evaluate(notification) {
            Ok((cell, value)) => {
                sheet.set_value(cell, value.clone())?;
                tracing::info!(cell = %cell, value = %value, "normalized edited cell");
                Ok(EditOutcome::Written { cell, value })
            }
            Err(reason) => {
                tracing::debug!(reason = %reason, "edit skipped");
                Ok(EditOutcome::Skipped(reason))
            }
        }
    }

    /// Manual invocation: type `value` into `cell` as a user would and run the trigger.
    ///
    /// The typed text is committed with [`Sheet::enter`], as the host does before
    /// firing its edit hook, so the only `set_value` is the trigger's own.
    pub fn simulate_edit<S: Sheet + ?Sized>(
        &self,
        sheet: &mut S,
        cell: CellRef,
        value: &str,
    ) -> Result<EditOutcome> {
        let notification = EditNotification::at(cell, value);
        sheet.enter(cell, value.to_string());
        self.on_edit(Some(&notification), sheet)
    }

    /// Manual invocation with the fixed sample: `"АВС 123"` typed into A2.
    pub fn simulate<S: Sheet + ?Sized>(&self, sheet: &mut S) -> Result<EditOutcome> {
        self.simulate_edit(sheet, SAMPLE_CELL, SAMPLE_VALUE)
    }
}
