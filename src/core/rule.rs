//! Named rules built on the primitives.
//!
//! A rule is a pure predicate over a candidate value and the current
//! values of the other fields of its form.

use super::primitives;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Current values of the other fields of a form, keyed by field name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleContext {
    values: HashMap<String, String>,
}

impl RuleContext {
    /// Context with no other fields.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace a field value.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(field.into(), value.into());
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// Value of another field, if the form has one by that name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

/// Pass/fail outcome of one rule for the current value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub passed: bool,
}

type Predicate = Box<dyn Fn(&str, &RuleContext) -> bool + Send + Sync>;

/// Named pure predicate applied to a field's value.
///
/// # Example
///
/// ```rust
/// use formcheck::core::{Rule, RuleContext};
///
/// let rule = Rule::min_length(3);
/// assert_eq!(rule.name(), "min-length-3");
/// assert!(!rule.check("ab", &RuleContext::empty()));
/// assert!(rule.check("abc", &RuleContext::empty()));
///
/// let confirm = Rule::equals_field("password");
/// let ctx = RuleContext::empty().with("password", "Secret1!");
/// assert!(confirm.check("Secret1!", &ctx));
/// ```
pub struct Rule {
    name: String,
    reads: Option<String>,
    predicate: Predicate,
}

impl Rule {
    /// Create a rule from a pure predicate.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str, &RuleContext) -> bool + Send + Sync + 'static,
    {
        Rule {
            name: name.into(),
            reads: None,
            predicate: Box::new(predicate),
        }
    }

    pub fn min_length(n: usize) -> Self {
        Self::new(format!("min-length-{n}"), move |v, _| {
            primitives::min_length(v, n)
        })
    }

    pub fn max_length(n: usize) -> Self {
        Self::new(format!("max-length-{n}"), move |v, _| {
            primitives::max_length(v, n)
        })
    }

    pub fn mixed_case() -> Self {
        Self::new("has-mixed-case", |v, _| primitives::has_mixed_case(v))
    }

    pub fn uppercase() -> Self {
        Self::new("has-uppercase", |v, _| primitives::has_uppercase(v))
    }

    pub fn digit() -> Self {
        Self::new("has-digit", |v, _| primitives::has_digit(v))
    }

    pub fn special_char() -> Self {
        Self::new("has-special-char", |v, _| primitives::has_special_char(v))
    }

    /// Equality against a fixed value.
    pub fn equals_value(other: impl Into<String>) -> Self {
        let other = other.into();
        Self::new("equals-value", move |v, _| primitives::equals_other(v, &other))
    }

    /// Equality against another field of the same form.
    ///
    /// A field missing from the context compares as the empty string.
    pub fn equals_field(field: impl Into<String>) -> Self {
        let field = field.into();
        let target = field.clone();
        let mut rule = Self::new(format!("equals-{field}"), move |v, ctx| {
            primitives::equals_other(v, ctx.get(&target).unwrap_or(""))
        });
        rule.reads = Some(field);
        rule
    }

    /// Replace the rule's name, e.g. to match a requirement indicator.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the other field this rule reads, if any.
    pub fn reads(&self) -> Option<&str> {
        self.reads.as_deref()
    }

    /// Evaluate the rule. Pure: same input, same answer.
    pub fn check(&self, value: &str, context: &RuleContext) -> bool {
        (self.predicate)(value, context)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("reads", &self.reads)
            .finish_non_exhaustive()
    }
}
