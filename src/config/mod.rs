//! Declarative form configuration.
//!
//! A form can be described as data (JSON via serde) and turned into a
//! running [`FormState`]. The built-in page profiles in [`profiles`] are
//! expressed the same way.

pub mod profiles;

pub use profiles::{CaseCheck, ConfirmPolicy, Profile, ProfileOptions};

use crate::builder::{BuildError, FieldBuilder, FormBuilder};
use crate::core::Rule;
use crate::form::FormState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading a form configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse form configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid form configuration: {0}")]
    Build(#[from] BuildError),
}

/// The predicate a configured rule applies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleKind {
    MinLength { min: usize },
    MaxLength { max: usize },
    MixedCase,
    Uppercase,
    Digit,
    SpecialChar,
    EqualsField { field: String },
}

/// One configured rule, optionally renamed for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    #[serde(flatten)]
    pub kind: RuleKind,

    /// Overrides the rule's default name, e.g. `"big-letter"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RuleSpec {
    pub fn new(kind: RuleKind) -> Self {
        Self { kind, name: None }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Turn the spec into an executable rule.
    pub fn to_rule(&self) -> Rule {
        let rule = match &self.kind {
            RuleKind::MinLength { min } => Rule::min_length(*min),
            RuleKind::MaxLength { max } => Rule::max_length(*max),
            RuleKind::MixedCase => Rule::mixed_case(),
            RuleKind::Uppercase => Rule::uppercase(),
            RuleKind::Digit => Rule::digit(),
            RuleKind::SpecialChar => Rule::special_char(),
            RuleKind::EqualsField { field } => Rule::equals_field(field.clone()),
        };
        match &self.name {
            Some(name) => rule.named(name.clone()),
            None => rule,
        }
    }
}

impl From<RuleKind> for RuleSpec {
    fn from(kind: RuleKind) -> Self {
        Self::new(kind)
    }
}

/// Configuration of one field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<RuleSpec>,
}

/// Configuration of one form.
///
/// # Example
///
/// ```rust
/// use formcheck::config::FormConfig;
///
/// let json = r#"{
///     "name": "login",
///     "fields": [
///         { "name": "username", "rules": [{ "kind": "min_length", "min": 1 }] },
///         { "name": "password", "rules": [{ "kind": "min_length", "min": 1 }] }
///     ]
/// }"#;
///
/// let mut form = FormConfig::load(json).unwrap();
/// form.set_value("username", "a").unwrap();
/// form.set_value("password", "x").unwrap();
/// assert!(form.is_ready());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl FormConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse `json` and build the form it describes in one step.
    pub fn load(json: &str) -> Result<FormState, ConfigError> {
        let config = Self::from_json(json)?;
        let form = config.build()?;
        tracing::debug!(form = %form.name(), "form loaded from configuration");
        Ok(form)
    }

    /// Build a fresh form instance from this configuration.
    pub fn build(&self) -> Result<FormState, BuildError> {
        self.fields
            .iter()
            .fold(FormBuilder::new(self.name.clone()), |form, field| {
                let builder = field
                    .rules
                    .iter()
                    .fold(FieldBuilder::new(field.name.clone()), |builder, spec| {
                        builder.rule(spec.to_rule())
                    });
                form.field(builder)
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_spec_parses_tagged_kinds() {
        let spec: RuleSpec =
            serde_json::from_str(r#"{ "kind": "min_length", "min": 8 }"#).unwrap();
        assert_eq!(spec.kind, RuleKind::MinLength { min: 8 });
        assert_eq!(spec.name, None);

        let spec: RuleSpec =
            serde_json::from_str(r#"{ "kind": "mixed_case", "name": "big-letter" }"#).unwrap();
        assert_eq!(spec.kind, RuleKind::MixedCase);
        assert_eq!(spec.to_rule().name(), "big-letter");

        let spec: RuleSpec =
            serde_json::from_str(r#"{ "kind": "equals_field", "field": "password" }"#).unwrap();
        assert_eq!(spec.to_rule().reads(), Some("password"));
    }

    #[test]
    fn unknown_kind_is_a_parse_error() {
        let result = FormConfig::from_json(
            r#"{ "name": "x", "fields": [{ "name": "a", "rules": [{ "kind": "regex" }] }] }"#,
        );
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_rules_default_to_empty() {
        let config = FormConfig::from_json(r#"{ "name": "x", "fields": [{ "name": "a" }] }"#)
            .unwrap();
        assert!(config.fields[0].rules.is_empty());
    }

    #[test]
    fn build_rejects_dangling_reference() {
        let config = FormConfig {
            name: "registration".to_string(),
            fields: vec![FieldConfig {
                name: "confirm".to_string(),
                rules: vec![RuleKind::EqualsField {
                    field: "password".to_string(),
                }
                .into()],
            }],
        };
        assert!(matches!(
            config.build(),
            Err(BuildError::UnknownReference { .. })
        ));
    }

    #[test]
    fn load_reports_parse_and_build_failures() {
        assert!(matches!(
            FormConfig::load("not json"),
            Err(ConfigError::Parse(_))
        ));

        let dangling = r#"{
            "name": "registration",
            "fields": [
                { "name": "confirm", "rules": [{ "kind": "equals_field", "field": "password" }] }
            ]
        }"#;
        match FormConfig::load(dangling) {
            Err(ConfigError::Build(BuildError::UnknownReference { field, target })) => {
                assert_eq!(field, "confirm");
                assert_eq!(target, "password");
            }
            other => panic!("Expected a build error, got {other:?}"),
        }
    }

    #[test]
    fn load_builds_a_working_form() {
        let json = profiles::login().to_json().unwrap();
        let mut form = FormConfig::load(&json).unwrap();
        form.set_value("username", "a").unwrap();
        form.set_value("password", "x").unwrap();
        assert!(form.is_ready());
    }

    #[test]
    fn config_survives_json() {
        let config = profiles::registration(&ProfileOptions::default());
        let json = config.to_json().unwrap();
        assert_eq!(FormConfig::from_json(&json).unwrap(), config);
    }
}
