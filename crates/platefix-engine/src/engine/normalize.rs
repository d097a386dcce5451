//! Cell value normalization.
//!
//! A raw value is rewritten in three passes:
//! 1. Cyrillic homoglyphs are replaced by their Latin twins.
//! 2. Everything else is uppercased.
//! 3. Every char outside `[A-Z0-9]` is deleted.

use regex::Regex;
use std::sync::OnceLock;

use super::transliterate::transliterate_char;
use crate::edit::EditNotification;

fn disallowed_re() -> &'static Regex {
    static DISALLOWED_RE: OnceLock<Regex> = OnceLock::new();
    DISALLOWED_RE
        .get_or_init(|| Regex::new(r"[^A-Z0-9]").expect("charset filter regex must compile"))
}

/// Normalize raw cell text. Never fails; the result may be empty.
///
/// The output never has more chars than the input: a char whose uppercase
/// form expands to several chars (`ß`, `ﬀ`) is dropped outright, since none
/// of those expansions is a single `[A-Z0-9]` char.
pub fn normalize_text(value: &str) -> String {
    let mut mapped = String::with_capacity(value.len());
    for c in value.chars() {
        if let Some(latin) = transliterate_char(c) {
            mapped.push(latin);
            continue;
        }
        let mut upper = c.to_uppercase();
        if let (Some(u), None) = (upper.next(), upper.next()) {
            mapped.push(u);
        }
    }
    disallowed_re().replace_all(&mapped, "").into_owned()
}

/// Normalize a cleared-or-not cell value.
///
/// Returns `None` when there is nothing to write: the value is absent or empty,
/// or it is already normalized.
pub fn normalize_value(value: Option<&str>) -> Option<String> {
    let value = value.filter(|v| !v.is_empty())?;
    let normalized = normalize_text(value);
    (normalized != value).then_some(normalized)
}

/// Apply the column A trigger rules to an edit.
///
/// Returns the replacement value to write back, or `None` for no action:
/// no notification, a cell outside column 1, the header row, a cleared cell,
/// or a value that is already normalized.
pub fn normalize(notification: Option<&EditNotification>) -> Option<String> {
    let notification = notification?;
    if !notification.is_eligible() {
        return None;
    }
    normalize_value(notification.value.as_deref())
}
