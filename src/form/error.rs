//! Programmer errors raised by a form.

use thiserror::Error;

/// Misuse of a form's field registry.
///
/// These signal a wiring bug in the caller, never a user input problem. A
/// silently ignored one could let an invalid form become submittable, so
/// every operation returns them immediately.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Field '{field}' is already registered on form '{form}'")]
    DuplicateField { form: String, field: String },

    #[error("Field '{field}' is not registered on form '{form}'")]
    UnknownField { form: String, field: String },
}
