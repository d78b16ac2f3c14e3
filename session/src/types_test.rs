use super::*;

fn alice() -> User {
    User {
        id: Some("user:alice".to_owned()),
        name: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        admin: true,
        password: None,
        firstname: Some("Alice".to_owned()),
        lastname: Some("Liddell".to_owned()),
    }
}

// =============================================================
// serde shape
// =============================================================

#[test]
fn user_omits_absent_optional_fields() {
    let user = User {
        name: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        ..User::default()
    };
    let json = serde_json::to_value(&user).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({ "name": "bob", "email": "bob@example.com", "admin": false })
    );
}

#[test]
fn user_sends_password_when_present() {
    let user = User { password: Some("hunter2".to_owned()), ..alice() };
    let json = serde_json::to_value(&user).expect("serialize");
    assert_eq!(json["password"], "hunter2");
}

#[test]
fn user_parses_backend_record_without_password() {
    let raw = r#"{"id":"u1","admin":false,"name":"carol","email":"c@x.io","firstname":null,"lastname":"C"}"#;
    let user: User = serde_json::from_str(raw).expect("parse");
    assert_eq!(user.id.as_deref(), Some("u1"));
    assert_eq!(user.password, None);
    assert_eq!(user.firstname, None);
    assert_eq!(user.lastname.as_deref(), Some("C"));
}

#[test]
fn user_admin_defaults_to_false_when_missing() {
    let user: User = serde_json::from_str(r#"{"name":"d","email":"d@x.io"}"#).expect("parse");
    assert!(!user.admin);
}

#[test]
fn login_token_parses_token_field() {
    let token: LoginToken = serde_json::from_str(r#"{"token":"abc.def"}"#).expect("parse");
    assert_eq!(token.token, "abc.def");
}

// =============================================================
// display_name
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    assert_eq!(alice().display_name(), "Alice Liddell");
}

#[test]
fn display_name_falls_back_to_login_name() {
    let user = User { lastname: None, ..alice() };
    assert_eq!(user.display_name(), "alice");
}

#[test]
fn display_name_ignores_blank_parts() {
    let user = User { firstname: Some("  ".to_owned()), ..alice() };
    assert_eq!(user.display_name(), "alice");
}
