//! End-to-end scenarios for the three credential pages.

use formcheck::config::{ConfirmPolicy, FormConfig, Profile, ProfileOptions};
use formcheck::snapshot::FormSnapshot;
use formcheck::{BindingAdapter, FieldView, FormSession, Readiness, Validity};
use std::collections::HashMap;

/// Adapter that keeps the latest rendered state, like a page would.
#[derive(Default)]
struct Page {
    fields: HashMap<String, FieldView>,
    alerts: HashMap<String, bool>,
    pending: Vec<String>,
    submit_enabled: bool,
}

impl BindingAdapter for Page {
    fn render_field(&mut self, view: &FieldView) {
        self.fields.insert(view.name.clone(), view.clone());
    }

    fn set_alert_visible(&mut self, field: &str, visible: bool) {
        self.alerts.insert(field.to_string(), visible);
    }

    fn mark_pending(&mut self, field: &str) {
        self.pending.push(field.to_string());
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }
}

fn open(profile: Profile, options: &ProfileOptions) -> FormSession<Page> {
    let form = profile.form(options).unwrap();
    let mut session = FormSession::new(form, Page::default());
    session.page_ready();
    session
}

fn valid(session: &FormSession<Page>, field: &str) -> bool {
    session.form().field(field).unwrap().is_valid()
}

#[test]
fn registration_scenario() {
    let mut session = open(Profile::Registration, &ProfileOptions::default());
    assert!(!session.adapter().submit_enabled);

    session.input("username", "ab").unwrap();
    assert!(!valid(&session, "username"));
    session.input("username", "abc").unwrap();
    assert!(valid(&session, "username"));

    session.input("password", "alllower1!").unwrap();
    let password = session.form().field("password").unwrap();
    assert_eq!(password.rule_result("has-mixed-case"), Some(false));
    assert!(!password.is_valid());

    session.input("password", "Alllower1!").unwrap();
    let password = session.form().field("password").unwrap();
    assert!(password.rule_results().iter().all(|o| o.passed));
    assert!(password.is_valid());
    assert!(!session.form().is_ready());
    assert!(!session.adapter().submit_enabled);

    let readiness = session.input("confirm", "Alllower1!").unwrap();
    assert!(valid(&session, "confirm"));
    assert_eq!(readiness, Readiness::Ready);
    assert!(session.adapter().submit_enabled);
}

#[test]
fn login_scenario() {
    let mut session = open(Profile::Login, &ProfileOptions::default());

    session.input("username", "").unwrap();
    assert!(!valid(&session, "username"));
    session.input("username", "a").unwrap();
    assert!(valid(&session, "username"));

    session.input("password", "").unwrap();
    assert!(!valid(&session, "password"));
    assert!(!session.adapter().submit_enabled);

    session.input("password", "x").unwrap();
    assert!(valid(&session, "password"));
    assert!(session.form().is_ready());
    assert!(session.adapter().submit_enabled);
}

#[test]
fn change_password_scenario() {
    let mut session = open(Profile::ChangePassword, &ProfileOptions::default());

    session.input("old_password", "short").unwrap();
    assert!(!valid(&session, "old_password"));
    session.input("old_password", "OldSecret").unwrap();
    assert!(valid(&session, "old_password"));

    session.input("password", "NewSecret1!").unwrap();
    session.input("confirm", "NewSecret1!").unwrap();
    assert!(session.adapter().submit_enabled);

    // Editing the new password invalidates the stale confirmation.
    session.input("password", "NewSecret2!").unwrap();
    assert!(!valid(&session, "confirm"));
    assert_eq!(
        session.adapter().fields["confirm"].validity,
        Validity::Invalid
    );
    assert!(!session.adapter().submit_enabled);
}

#[test]
fn confirm_length_policy() {
    let strict = ProfileOptions::default();
    let mut form = Profile::Registration.form(&strict).unwrap();
    form.set_value("password", "Ab1!").unwrap();
    form.set_value("confirm", "Ab1!").unwrap();
    assert!(!form.field("confirm").unwrap().is_valid());

    let lenient = ProfileOptions {
        confirm_policy: ConfirmPolicy::MatchOnly,
        ..ProfileOptions::default()
    };
    let mut form = Profile::Registration.form(&lenient).unwrap();
    form.set_value("password", "Ab1!").unwrap();
    form.set_value("confirm", "Ab1!").unwrap();
    assert!(form.field("confirm").unwrap().is_valid());
}

#[test]
fn reset_after_input_restores_initial_render() {
    let mut session = open(Profile::Login, &ProfileOptions::default());
    session.input("username", "a").unwrap();
    session.input("password", "x").unwrap();
    assert!(session.adapter().submit_enabled);

    session.page_ready();
    let page = session.adapter();
    assert!(!page.submit_enabled);
    for view in page.fields.values() {
        assert_eq!(view.validity, Validity::Invalid);
        assert!(view.rule_results.iter().all(|o| !o.passed));
    }
}

#[test]
fn focus_and_blur_toggle_alert() {
    let mut session = open(Profile::Registration, &ProfileOptions::default());

    session.focus("username").unwrap();
    assert_eq!(session.adapter().alerts.get("username"), Some(&true));
    assert_eq!(session.adapter().pending, vec!["username".to_string()]);

    session.input("username", "abc").unwrap();
    assert_eq!(session.adapter().alerts.get("username"), Some(&false));

    session.blur("username").unwrap();
    assert_eq!(session.adapter().alerts.get("username"), Some(&false));
    assert_eq!(
        session.adapter().fields["username"].validity,
        Validity::Valid
    );
}

#[test]
fn forms_on_one_page_are_independent() {
    let options = ProfileOptions::default();
    let mut login = open(Profile::Login, &options);
    let registration = open(Profile::Registration, &options);

    login.input("username", "someone").unwrap();
    login.input("password", "x").unwrap();

    assert!(login.form().is_ready());
    assert!(!registration.form().is_ready());
    assert!(!registration.form().field("username").unwrap().is_touched());
}

#[test]
fn configured_form_behaves_like_profile() {
    let json = r#"{
        "name": "registration",
        "fields": [
            { "name": "username", "rules": [{ "kind": "min_length", "min": 3, "name": "userleng" }] },
            { "name": "password", "rules": [
                { "kind": "min_length", "min": 8, "name": "leng" },
                { "kind": "mixed_case", "name": "big-letter" },
                { "kind": "digit", "name": "num" },
                { "kind": "special_char", "name": "special-char" }
            ] },
            { "name": "confirm", "rules": [
                { "kind": "equals_field", "field": "password", "name": "confirmequal" },
                { "kind": "min_length", "min": 8 }
            ] }
        ]
    }"#;

    let mut configured = FormConfig::load(json).unwrap();
    let mut builtin = Profile::Registration
        .form(&ProfileOptions::default())
        .unwrap();

    let edits = [
        ("username", "ab"),
        ("password", "alllower1!"),
        ("confirm", "alllower1!"),
        ("username", "abc"),
        ("password", "Alllower1!"),
        ("confirm", "Alllower1!"),
    ];
    for (field, value) in edits {
        configured.set_value(field, value).unwrap();
        builtin.set_value(field, value).unwrap();
        assert_eq!(configured.is_ready(), builtin.is_ready());
    }

    let password = configured.field("password").unwrap();
    assert_eq!(password.rule_result("big-letter"), Some(true));
    assert!(configured.is_ready());
}

#[test]
fn snapshot_reflects_session_state() {
    let mut session = open(Profile::Login, &ProfileOptions::default());
    session.input("username", "a").unwrap();

    let snapshot = FormSnapshot::capture(session.form());
    assert_eq!(snapshot.readiness, Readiness::NotReady);
    assert_eq!(snapshot.field("username").unwrap().validity, Validity::Valid);
    assert!(!snapshot.field("password").unwrap().touched);
}

#[test]
fn password_length_counts_like_the_browser() {
    let mut form = Profile::Registration
        .form(&ProfileOptions::default())
        .unwrap();

    // Three ASCII characters plus three emoji: nine UTF-16 units.
    form.set_value("password", "A1!😀😀😀").unwrap();
    let password = form.field("password").unwrap();
    assert_eq!(password.rule_result("min-length-8"), Some(true));
    assert!(password.is_valid());

    form.set_value("password", "A1!😀😀").unwrap();
    let password = form.field("password").unwrap();
    assert_eq!(password.rule_result("min-length-8"), Some(false));
}
