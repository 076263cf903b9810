//! Binding-adapter contract and the session that drives it.
//!
//! The presentation layer (markup, CSS classes, element lookup, event
//! wiring) lives outside this crate. It implements [`BindingAdapter`] and
//! forwards page events to a [`FormSession`], which updates the form and
//! tells the adapter what to render.

use crate::core::{Readiness, RuleOutcome, Status, Validity};
use crate::field::FieldValidator;
use crate::form::{FormError, FormState};
use serde::{Deserialize, Serialize};

/// Value-free render model of one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldView {
    pub name: String,
    pub validity: Validity,
    pub rule_results: Vec<RuleOutcome>,
}

impl From<&FieldValidator> for FieldView {
    fn from(field: &FieldValidator) -> Self {
        Self {
            name: field.name().to_string(),
            validity: field.validity(),
            rule_results: field.rule_results().to_vec(),
        }
    }
}

/// UI effects requested by a [`FormSession`].
///
/// Implementations translate these into class toggles and attributes; the
/// session never touches presentation directly.
pub trait BindingAdapter {
    /// Render a field's valid/invalid styling and each requirement
    /// indicator's pass/fail state.
    fn render_field(&mut self, view: &FieldView);

    /// Show or hide the field's hint/alert element.
    fn set_alert_visible(&mut self, field: &str, visible: bool);

    /// Style a focused field as invalid while it has not validated yet.
    fn mark_pending(&mut self, field: &str);

    /// Enable or disable the submit control.
    fn set_submit_enabled(&mut self, enabled: bool);
}

/// One form instance bound to one adapter for the lifetime of a page.
///
/// # Example
///
/// ```rust
/// use formcheck::binding::{BindingAdapter, FieldView, FormSession};
/// use formcheck::config::{Profile, ProfileOptions};
///
/// #[derive(Default)]
/// struct SubmitOnly {
///     enabled: bool,
/// }
///
/// impl BindingAdapter for SubmitOnly {
///     fn render_field(&mut self, _view: &FieldView) {}
///     fn set_alert_visible(&mut self, _field: &str, _visible: bool) {}
///     fn mark_pending(&mut self, _field: &str) {}
///     fn set_submit_enabled(&mut self, enabled: bool) {
///         self.enabled = enabled;
///     }
/// }
///
/// let form = Profile::Login.form(&ProfileOptions::default()).unwrap();
/// let mut session = FormSession::new(form, SubmitOnly::default());
/// session.page_ready();
/// session.input("username", "a").unwrap();
/// session.input("password", "x").unwrap();
/// assert!(session.adapter().enabled);
/// ```
pub struct FormSession<A: BindingAdapter> {
    form: FormState,
    adapter: A,
}

impl<A: BindingAdapter> FormSession<A> {
    pub fn new(form: FormState, adapter: A) -> Self {
        Self { form, adapter }
    }

    /// Page ready: reset every field, render all requirements failing and
    /// disable submit.
    pub fn page_ready(&mut self) {
        self.form.reset();
        for field in self.form.fields() {
            self.adapter.render_field(&FieldView::from(field));
        }
        self.adapter.set_submit_enabled(self.form.is_ready());
        tracing::trace!(form = %self.form.name(), "page ready");
    }

    /// Field focused: show its alert and mark it pending unless valid.
    pub fn focus(&mut self, field: &str) -> Result<(), FormError> {
        let valid = self.form.require_field(field)?.is_valid();
        self.adapter.set_alert_visible(field, true);
        if !valid {
            self.adapter.mark_pending(field);
        }
        tracing::trace!(form = %self.form.name(), field, "focus");
        Ok(())
    }

    /// Field edited: update the form and render the field, any re-checked
    /// dependents, and the submit control.
    pub fn input(&mut self, field: &str, text: &str) -> Result<Readiness, FormError> {
        let rechecked = self.form.set_value(field, text)?;

        let edited = self.form.require_field(field)?;
        self.adapter.render_field(&FieldView::from(edited));
        self.adapter.set_alert_visible(field, !edited.is_valid());

        for name in &rechecked {
            let dependent = self.form.require_field(name)?;
            self.adapter.render_field(&FieldView::from(dependent));
        }

        let readiness = self.form.readiness();
        self.adapter.set_submit_enabled(readiness.is_passing());
        tracing::trace!(
            form = %self.form.name(),
            field,
            readiness = readiness.name(),
            "input"
        );
        Ok(readiness)
    }

    /// Field blurred: hide its alert. Validity styling persists.
    pub fn blur(&mut self, field: &str) -> Result<(), FormError> {
        self.form.require_field(field)?;
        self.adapter.set_alert_visible(field, false);
        tracing::trace!(form = %self.form.name(), field, "blur");
        Ok(())
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_parts(self) -> (FormState, A) {
        (self.form, self.adapter)
    }
}
