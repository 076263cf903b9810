//! Rule violations reported by field checks.

use thiserror::Error;

/// A rule that did not pass for a field's current value.
///
/// Violations are data for the presentation layer, not failures of the
/// library.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Field '{field}' failed rule '{rule}'")]
pub struct RuleViolation {
    pub field: String,
    pub rule: String,
}

impl RuleViolation {
    pub fn new(field: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
        }
    }
}
