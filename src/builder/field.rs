//! Builder for constructing field validators.

use crate::builder::error::BuildError;
use crate::core::Rule;
use crate::field::FieldValidator;
use std::collections::HashSet;

/// Builder for field validators with a fluent API.
pub struct FieldBuilder {
    name: String,
    rules: Vec<Rule>,
}

impl FieldBuilder {
    /// Create a new builder for the field `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a rule. Rules are evaluated in the order they are added.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn min_length(self, n: usize) -> Self {
        self.rule(Rule::min_length(n))
    }

    pub fn max_length(self, n: usize) -> Self {
        self.rule(Rule::max_length(n))
    }

    pub fn mixed_case(self) -> Self {
        self.rule(Rule::mixed_case())
    }

    pub fn uppercase(self) -> Self {
        self.rule(Rule::uppercase())
    }

    pub fn digit(self) -> Self {
        self.rule(Rule::digit())
    }

    pub fn special_char(self) -> Self {
        self.rule(Rule::special_char())
    }

    /// Require the value to equal another field of the form.
    pub fn equals_field(self, field: impl Into<String>) -> Self {
        self.rule(Rule::equals_field(field))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the validator.
    /// Returns an error if the name is empty or a rule name repeats.
    pub fn build(self) -> Result<FieldValidator, BuildError> {
        if self.name.is_empty() {
            return Err(BuildError::EmptyFieldName);
        }

        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name()) {
                return Err(BuildError::DuplicateRule {
                    field: self.name.clone(),
                    rule: rule.name().to_string(),
                });
            }
            if rule.reads() == Some(self.name.as_str()) {
                return Err(BuildError::SelfReference {
                    field: self.name.clone(),
                });
            }
        }

        Ok(FieldValidator::new(self.name, self.rules))
    }
}
