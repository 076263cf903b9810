//! Core rule types and logic.
//!
//! This module contains the pure core of the validator:
//! - Rule primitives over a candidate string
//! - Named `Rule`s composed from them
//! - The two-state `Validity` and `Readiness` values
//!
//! Nothing in this module has side effects.

pub mod primitives;
mod rule;
mod state;

pub use rule::{Rule, RuleContext, RuleOutcome};
pub use state::{Readiness, Status, Validity};
