//! Navigation guard: decides, before every route transition, whether the
//! transition may proceed or must be redirected.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is re-validated against `GET auth/me` on every navigation, never
//! cached, because the backend can revoke or expire it at any time. A failed
//! validation clears the session through [`SessionStore::logout`].
//!
//! The three steps are exposed separately ([`check_token`], [`settle`],
//! [`decide`]) so a reactive owner can hold the session in a signal and
//! release it across the await point. [`NavigationGuard::before_each`]
//! composes them for owners holding `&mut SessionStore`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use tracing::{debug, info};

use crate::http::{Method, Transport};
use crate::routes::{Route, RouteName};
use crate::storage::SessionStorage;
use crate::store::SessionStore;

/// Endpoint answering with the identity behind a bearer token.
pub const WHO_AM_I_ENDPOINT: &str = "auth/me";

/// Outcome of validating the stored token against the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenCheck {
    /// No token was stored; the backend was not contacted.
    Missing,
    /// The backend accepted the token.
    Valid,
    /// The backend rejected the token or could not be reached.
    Rejected,
}

/// Authentication state for a single navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthState {
    Authenticated,
    Unauthenticated,
}

/// What the router should do with a pending transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(RouteName),
}

/// Validate `token` with the backend. Only the status is consulted; any
/// non-2xx response or transport failure rejects the token.
pub async fn check_token<T: Transport + ?Sized>(transport: &T, token: Option<&str>) -> TokenCheck {
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        debug!("no token; treating navigation as unauthenticated");
        return TokenCheck::Missing;
    };

    match transport.request(Method::Get, WHO_AM_I_ENDPOINT, None, Some(token)).await {
        Ok(resp) if resp.is_success() => TokenCheck::Valid,
        Ok(resp) => {
            info!(status = resp.status(), "token rejected by backend");
            TokenCheck::Rejected
        }
        Err(e) => {
            info!(error = %e, "token validation failed");
            TokenCheck::Rejected
        }
    }
}

/// Apply a token check to the session, logging out on rejection.
pub fn settle<S: SessionStorage>(store: &mut SessionStore<S>, check: TokenCheck) -> AuthState {
    match check {
        TokenCheck::Valid => AuthState::Authenticated,
        TokenCheck::Missing => AuthState::Unauthenticated,
        TokenCheck::Rejected => {
            store.logout();
            AuthState::Unauthenticated
        }
    }
}

/// Route a transition to `target` given the session's state.
///
/// Login is only reachable while unauthenticated (authenticated sessions go
/// to the dashboard). Other routes redirect to login only when they need
/// auth and the session lacks it. `None` is an unknown path and is allowed.
#[must_use]
pub fn decide(target: Option<&Route>, auth: AuthState) -> GuardOutcome {
    let authenticated = auth == AuthState::Authenticated;
    match target {
        Some(route) if route.name == RouteName::Login => {
            if authenticated {
                GuardOutcome::Redirect(RouteName::Dashboard)
            } else {
                GuardOutcome::Allow
            }
        }
        Some(route) if route.meta.needs_auth && !authenticated => GuardOutcome::Redirect(RouteName::Login),
        _ => GuardOutcome::Allow,
    }
}

/// Guard bound to a transport, for owners of a `&mut SessionStore`.
pub struct NavigationGuard<'t, T: ?Sized> {
    transport: &'t T,
}

impl<'t, T: Transport + ?Sized> NavigationGuard<'t, T> {
    pub fn new(transport: &'t T) -> Self {
        Self { transport }
    }

    /// Run the full guard for one transition to `target`.
    pub async fn before_each<S: SessionStorage>(
        &self,
        store: &mut SessionStore<S>,
        target: Option<&Route>,
    ) -> GuardOutcome {
        let token = store.token().map(str::to_owned);
        let check = check_token(self.transport, token.as_deref()).await;
        let auth = settle(store, check);
        let outcome = decide(target, auth);
        debug!(?target, ?auth, ?outcome, "navigation guard resolved");
        outcome
    }
}
