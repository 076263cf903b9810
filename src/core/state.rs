//! Two-state status values for fields and forms.
//!
//! Field validity and form readiness are both plain two-state values with
//! no terminal state. Both stay live and re-enterable for the lifetime of
//! the form that owns them.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for the status values derived by validators.
///
/// All methods are pure. A status is a value computed from current input,
/// never a flag mutated independently of it.
///
/// # Example
///
/// ```rust
/// use formcheck::core::{Status, Validity};
///
/// let status = Validity::from(true);
/// assert_eq!(status.name(), "Valid");
/// assert!(status.is_passing());
/// ```
pub trait Status:
    Clone + Copy + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the status name for display/logging.
    fn name(&self) -> &str;

    /// Whether this status permits the user to move on.
    fn is_passing(&self) -> bool;
}

/// Validity of a single field.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Validity {
    #[default]
    Invalid,
    Valid,
}

impl Status for Validity {
    fn name(&self) -> &str {
        match self {
            Self::Invalid => "Invalid",
            Self::Valid => "Valid",
        }
    }

    fn is_passing(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

impl From<bool> for Validity {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

/// Readiness of a whole form for submission.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Readiness {
    #[default]
    NotReady,
    Ready,
}

impl Status for Readiness {
    fn name(&self) -> &str {
        match self {
            Self::NotReady => "NotReady",
            Self::Ready => "Ready",
        }
    }

    fn is_passing(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

impl From<bool> for Readiness {
    fn from(ready: bool) -> Self {
        if ready {
            Self::Ready
        } else {
            Self::NotReady
        }
    }
}
