//! Formcheck: a pure rule engine for credential-form validation
//!
//! Formcheck evaluates simple predicate rules against the fields of a login,
//! registration or change-password form and derives whether the form may be
//! submitted. The rule engine is a pure core; everything that touches a
//! page (markup, CSS classes, event wiring) sits behind the
//! [`binding::BindingAdapter`] trait and is implemented by the host.
//!
//! Results are advisory UI feedback. The server must always validate again.
//!
//! # Core Concepts
//!
//! - **Rule**: a named pure predicate over a field's value
//! - **Field Validator**: one field's value, rules and derived validity
//! - **Form State**: the conjunction of every field's validity ("ready")
//! - **Binding Adapter**: the presentation layer the host plugs in
//!
//! # Example
//!
//! ```rust
//! use formcheck::config::{Profile, ProfileOptions};
//!
//! let mut form = Profile::Registration
//!     .form(&ProfileOptions::default())
//!     .unwrap();
//!
//! form.set_value("username", "abc").unwrap();
//! form.set_value("password", "Alllower1!").unwrap();
//! assert!(!form.is_ready());
//!
//! form.set_value("confirm", "Alllower1!").unwrap();
//! assert!(form.is_ready());
//! ```

pub mod binding;
pub mod builder;
pub mod config;
pub mod core;
pub mod field;
pub mod form;
pub mod snapshot;

// Re-export commonly used types
pub use binding::{BindingAdapter, FieldView, FormSession};
pub use builder::{BuildError, FieldBuilder, FormBuilder};
pub use self::core::{Readiness, Rule, RuleContext, RuleOutcome, Status, Validity};
pub use field::{FieldValidator, RuleViolation};
pub use form::{FormError, FormState};
