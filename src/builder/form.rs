//! Builder for constructing form validation state.

use crate::builder::error::BuildError;
use crate::builder::field::FieldBuilder;
use crate::field::FieldValidator;
use crate::form::FormState;
use std::collections::HashSet;

/// Builder for forms with a fluent API.
///
/// Unlike [`FormState::register_field`], the builder sees every field before
/// the form exists, so it can also reject equality rules that point at a
/// field the form does not have.
pub struct FormBuilder {
    name: String,
    fields: Vec<PendingField>,
}

enum PendingField {
    Builder(FieldBuilder),
    Built(FieldValidator),
}

impl FormBuilder {
    /// Create a new builder.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field using a builder.
    pub fn field(mut self, builder: FieldBuilder) -> Self {
        self.fields.push(PendingField::Builder(builder));
        self
    }

    /// Add a pre-built validator.
    pub fn add_field(mut self, validator: FieldValidator) -> Self {
        self.fields.push(PendingField::Built(validator));
        self
    }

    /// Build the form.
    /// Returns an error if a field fails to build, a field or rule name
    /// repeats, or an equality rule references a missing field.
    pub fn build(self) -> Result<FormState, BuildError> {
        let mut validators = Vec::with_capacity(self.fields.len());
        for pending in self.fields {
            validators.push(match pending {
                PendingField::Builder(builder) => builder.build()?,
                PendingField::Built(validator) => validator,
            });
        }

        let mut names = HashSet::new();
        for validator in &validators {
            if let Some(rule) = validator.duplicate_rule() {
                return Err(BuildError::DuplicateRule {
                    field: validator.name().to_string(),
                    rule: rule.to_string(),
                });
            }
            if !names.insert(validator.name().to_string()) {
                return Err(BuildError::DuplicateField {
                    field: validator.name().to_string(),
                });
            }
        }

        for validator in &validators {
            for rule in validator.rules() {
                let Some(target) = rule.reads() else {
                    continue;
                };
                if target == validator.name() {
                    return Err(BuildError::SelfReference {
                        field: validator.name().to_string(),
                    });
                }
                if !names.contains(target) {
                    return Err(BuildError::UnknownReference {
                        field: validator.name().to_string(),
                        target: target.to_string(),
                    });
                }
            }
        }

        let mut form = FormState::new(self.name);
        for validator in validators {
            form.register_field(validator)?;
        }

        tracing::debug!(form = %form.name(), fields = form.fields().len(), "form built");
        Ok(form)
    }
}
