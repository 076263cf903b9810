//! Form validation state.
//!
//! A `FormState` owns the field validators of one form instance and derives
//! a single readiness flag from them. Forms never share state; a page with
//! several forms keeps one `FormState` per form.

mod error;
mod state;

pub use error::FormError;
pub use state::FormState;
