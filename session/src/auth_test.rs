use super::*;
use crate::storage::MemoryStorage;
use crate::test_support::{MockTransport, sample_user, sample_user_json};

fn token_body() -> String {
    r#"{"token":"jwt-123"}"#.to_owned()
}

// =============================================================
// authenticate / login
// =============================================================

#[tokio::test]
async fn login_stores_user_and_token() {
    let transport = MockTransport::new(vec![
        MockTransport::status(200, &token_body()),
        MockTransport::status(200, &sample_user_json()),
    ]);
    let mut store = SessionStore::new(MemoryStorage::new());

    let user = login(&transport, &mut store, "alice", "secret").await.expect("login");
    assert_eq!(user, sample_user());
    assert_eq!(store.user(), Some(&sample_user()));
    assert_eq!(store.token(), Some("jwt-123"));
}

#[tokio::test]
async fn login_posts_credentials_then_asks_who_am_i() {
    let transport = MockTransport::new(vec![
        MockTransport::status(200, &token_body()),
        MockTransport::status(200, &sample_user_json()),
    ]);
    let mut store = SessionStore::new(MemoryStorage::new());
    login(&transport, &mut store, "alice", "secret").await.expect("login");

    let calls = transport.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].method, Method::Post);
    assert_eq!(calls[0].endpoint, LOGIN_ENDPOINT);
    assert_eq!(calls[0].token, None);
    let body: serde_json::Value = serde_json::from_slice(calls[0].body.as_deref().expect("body")).expect("json");
    assert_eq!(body, serde_json::json!({ "username": "alice", "password": "secret" }));
    assert_eq!(calls[1].endpoint, WHO_AM_I_ENDPOINT);
    assert_eq!(calls[1].token.as_deref(), Some("jwt-123"));
}

#[tokio::test]
async fn login_rejected_leaves_session_empty() {
    let transport = MockTransport::new(vec![MockTransport::status(401, "Invalid credentials")]);
    let mut store = SessionStore::new(MemoryStorage::new());

    let err = login(&transport, &mut store, "alice", "wrong").await.expect_err("should fail");
    assert!(matches!(err, AuthError::Rejected(401)));
    assert!(!store.is_logged_in());
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test]
async fn login_requires_exactly_200() {
    let transport = MockTransport::new(vec![MockTransport::status(201, &token_body())]);
    let err = authenticate(&transport, "alice", "secret").await.expect_err("should fail");
    assert!(matches!(err, AuthError::Rejected(201)));
}

#[tokio::test]
async fn login_fails_when_who_am_i_fails() {
    let transport = MockTransport::new(vec![
        MockTransport::status(200, &token_body()),
        MockTransport::status(401, ""),
    ]);
    let mut store = SessionStore::new(MemoryStorage::new());

    let err = login(&transport, &mut store, "alice", "secret").await.expect_err("should fail");
    assert!(matches!(err, AuthError::Api(ApiError::Status(401))));
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn login_fails_on_malformed_token_body() {
    let transport = MockTransport::new(vec![MockTransport::status(200, "{}")]);
    let err = authenticate(&transport, "alice", "secret").await.expect_err("should fail");
    assert!(matches!(err, AuthError::Api(ApiError::Decode(_))));
}

#[tokio::test]
async fn login_fails_on_network_error() {
    let transport = MockTransport::new(vec![MockTransport::network_error()]);
    let err = authenticate(&transport, "alice", "secret").await.expect_err("should fail");
    assert!(matches!(err, AuthError::Api(ApiError::Network(_))));
}

// =============================================================
// current_user
// =============================================================

#[tokio::test]
async fn current_user_decodes_identity() {
    let transport = MockTransport::new(vec![MockTransport::status(200, &sample_user_json())]);
    let user = current_user(&transport, "tok").await.expect("user");
    assert_eq!(user, sample_user());
}
