use super::*;
use crate::routes::{RouteName, resolve};
use crate::storage::MemoryStorage;
use crate::store::{TOKEN_KEY, USER_KEY};
use crate::test_support::{MockTransport, sample_user, sample_user_json};

fn logged_in_store() -> SessionStore<MemoryStorage> {
    let mut store = SessionStore::new(MemoryStorage::new());
    store.set_user(sample_user(), "tok-1".to_owned()).expect("set_user");
    store
}

fn users_route() -> Option<&'static Route> {
    Some(RouteName::Users.route())
}

fn login_route() -> Option<&'static Route> {
    Some(RouteName::Login.route())
}

// =============================================================
// decide
// =============================================================

#[test]
fn decide_protected_route_unauthenticated_redirects_to_login() {
    assert_eq!(
        decide(users_route(), AuthState::Unauthenticated),
        GuardOutcome::Redirect(RouteName::Login)
    );
}

#[test]
fn decide_protected_route_authenticated_allows() {
    assert_eq!(decide(users_route(), AuthState::Authenticated), GuardOutcome::Allow);
}

#[test]
fn decide_login_authenticated_redirects_to_dashboard() {
    assert_eq!(
        decide(login_route(), AuthState::Authenticated),
        GuardOutcome::Redirect(RouteName::Dashboard)
    );
}

#[test]
fn decide_login_unauthenticated_allows() {
    assert_eq!(decide(login_route(), AuthState::Unauthenticated), GuardOutcome::Allow);
}

#[test]
fn decide_public_route_allows_either_state() {
    let dashboard = Some(RouteName::Dashboard.route());
    assert_eq!(decide(dashboard, AuthState::Unauthenticated), GuardOutcome::Allow);
    assert_eq!(decide(dashboard, AuthState::Authenticated), GuardOutcome::Allow);
}

#[test]
fn decide_unknown_route_allows() {
    assert_eq!(decide(resolve("/missing"), AuthState::Unauthenticated), GuardOutcome::Allow);
}

// =============================================================
// check_token
// =============================================================

#[tokio::test]
async fn check_token_missing_skips_backend() {
    let transport = MockTransport::default();
    assert_eq!(check_token(&transport, None).await, TokenCheck::Missing);
    assert_eq!(check_token(&transport, Some("")).await, TokenCheck::Missing);
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn check_token_calls_who_am_i_with_bearer() {
    let transport = MockTransport::new(vec![MockTransport::status(200, &sample_user_json())]);
    assert_eq!(check_token(&transport, Some("tok-1")).await, TokenCheck::Valid);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].method, Method::Get);
    assert_eq!(calls[0].endpoint, WHO_AM_I_ENDPOINT);
    assert_eq!(calls[0].token.as_deref(), Some("tok-1"));
    assert_eq!(calls[0].body, None);
}

#[tokio::test]
async fn check_token_ignores_response_body() {
    let transport = MockTransport::new(vec![MockTransport::status(204, "")]);
    assert_eq!(check_token(&transport, Some("tok")).await, TokenCheck::Valid);
}

#[tokio::test]
async fn check_token_rejects_non_2xx() {
    let transport = MockTransport::new(vec![MockTransport::status(401, "Invalid token")]);
    assert_eq!(check_token(&transport, Some("tok")).await, TokenCheck::Rejected);
}

#[tokio::test]
async fn check_token_rejects_network_error() {
    let transport = MockTransport::new(vec![MockTransport::network_error()]);
    assert_eq!(check_token(&transport, Some("tok")).await, TokenCheck::Rejected);
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_rejected_logs_out() {
    let mut store = logged_in_store();
    assert_eq!(settle(&mut store, TokenCheck::Rejected), AuthState::Unauthenticated);
    assert!(!store.is_logged_in());
    assert!(store.storage().is_empty());
}

#[test]
fn settle_valid_keeps_session() {
    let mut store = logged_in_store();
    assert_eq!(settle(&mut store, TokenCheck::Valid), AuthState::Authenticated);
    assert!(store.is_logged_in());
}

// =============================================================
// before_each scenarios
// =============================================================

#[tokio::test]
async fn no_token_protected_route_redirects_to_login() {
    let transport = MockTransport::default();
    let mut store = SessionStore::new(MemoryStorage::new());

    let outcome = NavigationGuard::new(&transport).before_each(&mut store, users_route()).await;
    assert_eq!(outcome, GuardOutcome::Redirect(RouteName::Login));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn valid_token_protected_route_allows() {
    let transport = MockTransport::new(vec![MockTransport::status(200, &sample_user_json())]);
    let mut store = logged_in_store();

    let outcome = NavigationGuard::new(&transport).before_each(&mut store, users_route()).await;
    assert_eq!(outcome, GuardOutcome::Allow);
    assert!(store.is_logged_in());
}

#[tokio::test]
async fn rejected_token_protected_route_clears_session_and_redirects() {
    let transport = MockTransport::new(vec![MockTransport::status(401, "")]);
    let mut store = logged_in_store();

    let outcome = NavigationGuard::new(&transport).before_each(&mut store, users_route()).await;
    assert_eq!(outcome, GuardOutcome::Redirect(RouteName::Login));
    assert!(!store.is_logged_in());
    assert!(!store.storage().contains(USER_KEY));
    assert!(!store.storage().contains(TOKEN_KEY));
}

#[tokio::test]
async fn valid_token_login_route_redirects_to_dashboard() {
    let transport = MockTransport::new(vec![MockTransport::status(200, &sample_user_json())]);
    let mut store = logged_in_store();

    let outcome = NavigationGuard::new(&transport).before_each(&mut store, login_route()).await;
    assert_eq!(outcome, GuardOutcome::Redirect(RouteName::Dashboard));
}

#[tokio::test]
async fn rejected_token_login_route_allows_and_clears_session() {
    let transport = MockTransport::new(vec![MockTransport::network_error()]);
    let mut store = logged_in_store();

    let outcome = NavigationGuard::new(&transport).before_each(&mut store, login_route()).await;
    assert_eq!(outcome, GuardOutcome::Allow);
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn rejected_token_public_route_still_clears_session() {
    let transport = MockTransport::new(vec![MockTransport::status(500, "")]);
    let mut store = logged_in_store();

    let outcome = NavigationGuard::new(&transport)
        .before_each(&mut store, Some(RouteName::Dashboard.route()))
        .await;
    assert_eq!(outcome, GuardOutcome::Allow);
    assert!(!store.is_logged_in());
}

#[tokio::test]
async fn every_navigation_revalidates() {
    let transport = MockTransport::new(vec![
        MockTransport::status(200, ""),
        MockTransport::status(200, ""),
        MockTransport::status(401, ""),
    ]);
    let mut store = logged_in_store();
    let guard = NavigationGuard::new(&transport);

    assert_eq!(guard.before_each(&mut store, users_route()).await, GuardOutcome::Allow);
    assert_eq!(guard.before_each(&mut store, users_route()).await, GuardOutcome::Allow);
    assert_eq!(
        guard.before_each(&mut store, users_route()).await,
        GuardOutcome::Redirect(RouteName::Login)
    );
    assert_eq!(transport.calls().len(), 3);
}
