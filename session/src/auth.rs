//! Login flow: exchange credentials for a token, resolve the identity behind
//! it, and hand both to the session store.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses to an [`AuthError`] and leaves the session
//! untouched. The UI shows a single "login failed" message regardless of the
//! variant; the detail only reaches the logs.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use tracing::{info, warn};

use crate::guard::WHO_AM_I_ENDPOINT;
use crate::http::{ApiError, Method, Transport, json_body};
use crate::storage::SessionStorage;
use crate::store::{SessionError, SessionStore};
use crate::types::{LoginCredentials, LoginToken, User};

pub const LOGIN_ENDPOINT: &str = "auth/login";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The backend refused the credentials (any status other than 200).
    #[error("login rejected with status {0}")]
    Rejected(u16),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Fetch the identity behind `token` from `GET auth/me`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for a non-2xx response, otherwise the
/// transport or decode error.
pub async fn current_user<T: Transport + ?Sized>(transport: &T, token: &str) -> Result<User, ApiError> {
    let resp = transport.request(Method::Get, WHO_AM_I_ENDPOINT, None, Some(token)).await?;
    if !resp.is_success() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json()
}

/// Log in without touching a store: returns the user and its token.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] unless the login status is exactly 200,
/// or the API error from either call.
pub async fn authenticate<T: Transport + ?Sized>(
    transport: &T,
    username: &str,
    password: &str,
) -> Result<(User, String), AuthError> {
    let credentials = LoginCredentials { username: username.to_owned(), password: password.to_owned() };
    let body = json_body(&credentials)?;

    let resp = transport.request(Method::Post, LOGIN_ENDPOINT, Some(body), None).await?;
    if resp.status() != 200 {
        return Err(AuthError::Rejected(resp.status()));
    }
    let LoginToken { token } = resp.json::<LoginToken>()?;
    let user = current_user(transport, &token).await?;
    Ok((user, token))
}

/// Log in and store the resulting session.
///
/// # Errors
///
/// See [`authenticate`]; additionally [`AuthError::Session`] when the
/// session could not be persisted (the store is still logged in).
pub async fn login<T: Transport + ?Sized, S: SessionStorage>(
    transport: &T,
    store: &mut SessionStore<S>,
    username: &str,
    password: &str,
) -> Result<User, AuthError> {
    let (user, token) = match authenticate(transport, username, password).await {
        Ok(found) => found,
        Err(e) => {
            warn!(username, error = %e, "login failed");
            return Err(e);
        }
    };
    info!(user = %user.name, "logged in");
    store.set_user(user.clone(), token)?;
    Ok(user)
}
