//! Built-in profiles for the login, registration and change-password pages.

use super::{FieldConfig, FormConfig, RuleKind, RuleSpec};
use crate::builder::BuildError;
use crate::form::FormState;
use serde::{Deserialize, Serialize};

pub const LOGIN_MIN_LENGTH: usize = 1;
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const PASSWORD_MIN_LENGTH: usize = 8;
/// Username cap enforced by the server-side form.
pub const USERNAME_MAX_LENGTH: usize = 15;

/// How the confirm-password field is checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfirmPolicy {
    /// Equal to the password field
    MatchOnly,
    /// Equal to the password field and at least the password minimum length
    #[default]
    MatchAndMinLength,
}

/// Which predicate backs the "contains a capital letter" requirement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseCheck {
    /// Lowercasing the value must change it
    #[default]
    Lowercasing,
    /// The value must contain an uppercase character
    Uppercase,
}

/// Tunables shared by the registration and change-password profiles.
///
/// Defaults reproduce the behaviour of the pages as shipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileOptions {
    pub confirm_policy: ConfirmPolicy,
    pub case_check: CaseCheck,
    pub username_max_length: Option<usize>,
}

/// One of the three credential pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    Login,
    Registration,
    ChangePassword,
}

impl Profile {
    pub fn name(&self) -> &str {
        match self {
            Self::Login => "login",
            Self::Registration => "registration",
            Self::ChangePassword => "change_password",
        }
    }

    pub fn config(&self, options: &ProfileOptions) -> FormConfig {
        match self {
            Self::Login => login(),
            Self::Registration => registration(options),
            Self::ChangePassword => change_password(options),
        }
    }

    /// Build a fresh form instance for this page.
    pub fn form(&self, options: &ProfileOptions) -> Result<FormState, BuildError> {
        self.config(options).build()
    }
}

fn min_length(min: usize) -> RuleSpec {
    RuleKind::MinLength { min }.into()
}

fn field(name: &str, rules: Vec<RuleSpec>) -> FieldConfig {
    FieldConfig {
        name: name.to_string(),
        rules,
    }
}

fn new_password(options: &ProfileOptions) -> FieldConfig {
    let case = match options.case_check {
        CaseCheck::Lowercasing => RuleKind::MixedCase,
        CaseCheck::Uppercase => RuleKind::Uppercase,
    };
    field(
        "password",
        vec![
            min_length(PASSWORD_MIN_LENGTH),
            case.into(),
            RuleKind::Digit.into(),
            RuleKind::SpecialChar.into(),
        ],
    )
}

fn confirm(options: &ProfileOptions) -> FieldConfig {
    let mut rules = vec![RuleSpec::from(RuleKind::EqualsField {
        field: "password".to_string(),
    })];
    if options.confirm_policy == ConfirmPolicy::MatchAndMinLength {
        rules.push(min_length(PASSWORD_MIN_LENGTH));
    }
    field("confirm", rules)
}

/// Login: both fields merely non-empty.
pub fn login() -> FormConfig {
    FormConfig {
        name: Profile::Login.name().to_string(),
        fields: vec![
            field("username", vec![min_length(LOGIN_MIN_LENGTH)]),
            field("password", vec![min_length(LOGIN_MIN_LENGTH)]),
        ],
    }
}

/// Registration: username, composite password, confirmation.
pub fn registration(options: &ProfileOptions) -> FormConfig {
    let mut username = vec![min_length(USERNAME_MIN_LENGTH)];
    if let Some(max) = options.username_max_length {
        username.push(RuleKind::MaxLength { max }.into());
    }

    FormConfig {
        name: Profile::Registration.name().to_string(),
        fields: vec![
            field("username", username),
            new_password(options),
            confirm(options),
        ],
    }
}

/// Change password: old password plus the registration password rules.
pub fn change_password(options: &ProfileOptions) -> FormConfig {
    FormConfig {
        name: Profile::ChangePassword.name().to_string(),
        fields: vec![
            field("old_password", vec![min_length(PASSWORD_MIN_LENGTH)]),
            new_password(options),
            confirm(options),
        ],
    }
}
