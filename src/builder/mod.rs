//! Builder API for ergonomic form construction.
//!
//! Builders validate the shape of a form (names, rule uniqueness, equality
//! references) once, up front, so the running form only has to deal with
//! values.

pub mod error;
pub mod field;
pub mod form;
pub mod macros;

pub use error::BuildError;
pub use field::FieldBuilder;
pub use form::FormBuilder;
