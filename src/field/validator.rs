//! Validator owning one field's value and its derived validity.

use crate::core::{Rule, RuleContext, RuleOutcome, Validity};
use crate::field::violations::RuleViolation;
use stillwater::validation::Validation;
use std::collections::HashSet;
use stillwater::NonEmptyVec;

/// Owner of one field's value, its ordered rules, and the validity derived
/// from them.
///
/// A new validator starts in the reset state: empty value, every rule
/// marked failing, invalid. Derived state only changes through
/// [`set_value`](Self::set_value), [`revalidate`](Self::revalidate) and
/// [`reset`](Self::reset).
///
/// # Example
///
/// ```rust
/// use formcheck::core::Rule;
/// use formcheck::field::FieldValidator;
///
/// let mut username = FieldValidator::new("username", vec![Rule::min_length(3)]);
/// assert!(!username.is_valid());
///
/// username.set_value("ab");
/// assert!(!username.is_valid());
///
/// username.set_value("abc");
/// assert!(username.is_valid());
/// ```
#[derive(Debug)]
pub struct FieldValidator {
    name: String,
    rules: Vec<Rule>,
    value: String,
    results: Vec<RuleOutcome>,
    valid: bool,
    touched: bool,
}

impl FieldValidator {
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        let mut validator = Self {
            name: name.into(),
            rules,
            value: String::new(),
            results: Vec::new(),
            valid: false,
            touched: false,
        };
        validator.reset();
        validator
    }

    /// Store a new value and re-evaluate every rule with no other fields in
    /// scope.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.set_value_with(value, &RuleContext::empty());
    }

    /// Store a new value and re-evaluate every rule against `context`.
    pub fn set_value_with(&mut self, value: impl Into<String>, context: &RuleContext) {
        self.value = value.into();
        self.touched = true;
        self.evaluate(context);
    }

    /// Re-evaluate the current value against a new context.
    pub fn revalidate(&mut self, context: &RuleContext) {
        self.evaluate(context);
    }

    /// Clear the value and mark every rule failing.
    pub fn reset(&mut self) {
        self.value.clear();
        self.touched = false;
        self.valid = false;
        self.results = self
            .rules
            .iter()
            .map(|rule| RuleOutcome {
                rule: rule.name().to_string(),
                passed: false,
            })
            .collect();
    }

    fn evaluate(&mut self, context: &RuleContext) {
        self.results = self
            .rules
            .iter()
            .map(|rule| RuleOutcome {
                rule: rule.name().to_string(),
                passed: rule.check(&self.value, context),
            })
            .collect();
        self.valid = self.results.iter().all(|outcome| outcome.passed);

        tracing::debug!(
            field = %self.name,
            valid = self.valid,
            failing = self.results.iter().filter(|o| !o.passed).count(),
            "field re-evaluated"
        );
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn validity(&self) -> Validity {
        Validity::from(self.valid)
    }

    /// Whether a value has been set since the last reset.
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Per-rule outcomes, in rule order.
    pub fn rule_results(&self) -> &[RuleOutcome] {
        &self.results
    }

    /// Outcome of a single rule by name.
    pub fn rule_result(&self, rule: &str) -> Option<bool> {
        self.results
            .iter()
            .find(|outcome| outcome.rule == rule)
            .map(|outcome| outcome.passed)
    }

    /// First rule name that occurs more than once, if any.
    pub fn duplicate_rule(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.rules.iter().map(Rule::name).find(|name| !seen.insert(*name))
    }

    /// Whether any rule reads the value of `field`.
    pub fn depends_on(&self, field: &str) -> bool {
        self.rules.iter().any(|rule| rule.reads() == Some(field))
    }

    /// Check the current outcomes, accumulating ALL failing rules.
    pub fn check(&self) -> Validation<(), NonEmptyVec<RuleViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<RuleViolation>>> = self
            .results
            .iter()
            .map(|outcome| {
                if outcome.passed {
                    Validation::success(())
                } else {
                    Validation::fail(RuleViolation::new(&self.name, &outcome.rule))
                }
            })
            .collect();

        Validation::all_vec(checks).map(|_| ())
    }
}
