//! Field validators.
//!
//! A field validator composes rules into one field's validity plus a
//! per-rule pass/fail breakdown. Failing rules can be collected with
//! Stillwater's `Validation` so a caller sees every unmet requirement at
//! once rather than the first one.

mod validator;
mod violations;

pub use validator::FieldValidator;
pub use violations::RuleViolation;
