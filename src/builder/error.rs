//! Build errors for field and form builders.

use crate::form::FormError;
use thiserror::Error;

/// Errors that can occur when building fields and forms.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Field name is empty. Pass a name to FieldBuilder::new")]
    EmptyFieldName,

    #[error("Rule '{rule}' appears more than once on field '{field}'")]
    DuplicateRule { field: String, rule: String },

    #[error("Field '{field}' is defined more than once")]
    DuplicateField { field: String },

    #[error("Field '{field}' compares against '{target}', which is not part of the form")]
    UnknownReference { field: String, target: String },

    #[error("Field '{field}' compares against itself")]
    SelfReference { field: String },

    #[error(transparent)]
    Form(#[from] FormError),
}
