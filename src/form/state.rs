//! Form validation state aggregating field validity into readiness.

use crate::core::{Readiness, RuleContext, Status};
use crate::field::{FieldValidator, RuleViolation};
use crate::form::error::FormError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Aggregate of one form's field validators.
///
/// `ready` is the conjunction of every registered field's validity and is
/// recomputed after each processed change. Fields keep their registration
/// order.
pub struct FormState {
    name: String,
    fields: Vec<FieldValidator>,
    ready: bool,
}

impl FormState {
    /// Create an empty form. A form with no fields is vacuously ready.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            ready: true,
        }
    }

    /// Add a field validator under its own name.
    pub fn register_field(&mut self, validator: FieldValidator) -> Result<(), FormError> {
        if self.position(validator.name()).is_some() {
            tracing::error!(form = %self.name, field = validator.name(), "duplicate field registration");
            return Err(FormError::DuplicateField {
                form: self.name.clone(),
                field: validator.name().to_string(),
            });
        }

        self.fields.push(validator);
        self.recompute();
        Ok(())
    }

    /// Recompute readiness after `field` changed.
    pub fn on_field_changed(&mut self, field: &str) -> Result<Readiness, FormError> {
        self.index_of(field)?;
        self.recompute();
        Ok(self.readiness())
    }

    /// Set a field's value, re-check the touched fields that read it, and
    /// recompute readiness.
    ///
    /// Returns the names of the dependent fields that were re-checked.
    pub fn set_value(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<Vec<String>, FormError> {
        let index = self.index_of(field)?;

        let context = self.context_excluding(index);
        self.fields[index].set_value_with(value, &context);

        let mut rechecked = Vec::new();
        for dependent in 0..self.fields.len() {
            if dependent == index
                || !self.fields[dependent].is_touched()
                || !self.fields[dependent].depends_on(field)
            {
                continue;
            }
            let context = self.context_excluding(dependent);
            self.fields[dependent].revalidate(&context);
            rechecked.push(self.fields[dependent].name().to_string());
        }

        self.on_field_changed(field)?;
        Ok(rechecked)
    }

    /// Reset every field and recompute readiness.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.recompute();
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn readiness(&self) -> Readiness {
        Readiness::from(self.ready)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self, name: &str) -> Option<&FieldValidator> {
        self.position(name).map(|index| &self.fields[index])
    }

    /// Like [`field`](Self::field), but an unregistered name is an error.
    pub fn require_field(&self, name: &str) -> Result<&FieldValidator, FormError> {
        let index = self.index_of(name)?;
        Ok(&self.fields[index])
    }

    pub fn fields(&self) -> &[FieldValidator] {
        &self.fields
    }

    /// Names of the fields whose rules read `field`.
    pub fn dependents_of(&self, field: &str) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.name() != field && f.depends_on(field))
            .map(FieldValidator::name)
            .collect()
    }

    /// Check every field, accumulating ALL violations across the form.
    pub fn check(&self) -> Validation<(), NonEmptyVec<RuleViolation>> {
        let checks: Vec<_> = self.fields.iter().map(FieldValidator::check).collect();
        Validation::all_vec(checks).map(|_| ())
    }

    fn recompute(&mut self) {
        let ready = self.fields.iter().all(FieldValidator::is_valid);
        if ready != self.ready {
            let readiness = Readiness::from(ready);
            tracing::debug!(
                form = %self.name,
                readiness = readiness.name(),
                "form readiness changed"
            );
        }
        self.ready = ready;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name() == name)
    }

    fn index_of(&self, name: &str) -> Result<usize, FormError> {
        self.position(name).ok_or_else(|| {
            tracing::error!(form = %self.name, field = name, "unknown field");
            FormError::UnknownField {
                form: self.name.clone(),
                field: name.to_string(),
            }
        })
    }

    fn context_excluding(&self, index: usize) -> RuleContext {
        let mut context = RuleContext::empty();
        for (i, field) in self.fields.iter().enumerate() {
            if i != index {
                context.insert(field.name(), field.value());
            }
        }
        context
    }
}

impl std::fmt::Debug for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormState")
            .field("name", &self.name)
            .field("fields", &self.fields.iter().map(FieldValidator::name).collect::<Vec<_>>())
            .field("ready", &self.ready)
            .finish()
    }
}
