//! Typed client for the backend `users` collection.
//!
//! Status-only operations (delete, exists, create, picture upload) succeed
//! iff the backend answers exactly `200`; a `201` or `204` reads as `false`.
//! Transport failures are errors, not `false`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use tracing::debug;

use crate::http::{ApiError, ApiResponse, Method, Transport, json_body};
use crate::types::User;

pub const USERS_ENDPOINT: &str = "users";

// Caller-supplied ids are one path segment; `/`, `?` and `#` must not escape it.
fn user_endpoint(id: &str) -> String {
    format!("{USERS_ENDPOINT}/{}", urlencoding::encode(id))
}

fn exists_endpoint(identifier: &str) -> String {
    format!("{USERS_ENDPOINT}/exists/{}", urlencoding::encode(identifier))
}

fn picture_endpoint(id: &str) -> String {
    format!("{USERS_ENDPOINT}/{}/image", urlencoding::encode(id))
}

fn is_exact_ok(resp: &ApiResponse) -> bool {
    resp.status() == 200
}

/// Thin CRUD wrapper scoped to `users`. Every call forwards the caller's
/// token unchanged.
pub struct UsersClient<'t, T: ?Sized> {
    transport: &'t T,
}

impl<'t, T: Transport + ?Sized> UsersClient<'t, T> {
    pub fn new(transport: &'t T) -> Self {
        Self { transport }
    }

    /// `GET users`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for a non-2xx response, or the transport
    /// or decode error.
    pub async fn fetch_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        let resp = self.transport.request(Method::Get, USERS_ENDPOINT, None, Some(token)).await?;
        if !resp.is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json()
    }

    /// `DELETE users/{id}`.
    ///
    /// # Errors
    ///
    /// Returns the transport error if no response was received.
    pub async fn delete_user(&self, id: &str, token: &str) -> Result<bool, ApiError> {
        let resp = self.transport.request(Method::Delete, &user_endpoint(id), None, Some(token)).await?;
        debug!(id, status = resp.status(), "delete user");
        Ok(is_exact_ok(&resp))
    }

    /// `GET users/exists/{identifier}`; the identifier may be an id, name or
    /// email.
    ///
    /// # Errors
    ///
    /// Returns the transport error if no response was received.
    pub async fn user_exists(&self, identifier: &str, token: &str) -> Result<bool, ApiError> {
        let resp = self
            .transport
            .request(Method::Get, &exists_endpoint(identifier), None, Some(token))
            .await?;
        Ok(is_exact_ok(&resp))
    }

    /// `PATCH users/{user.id}` with the user's set fields; returns the
    /// backend's echo of the applied fields.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingId`] when `user.id` is unset,
    /// [`ApiError::Status`] for a non-2xx response, or the transport or
    /// decode error.
    pub async fn patch_user(&self, user: &User, token: &str) -> Result<User, ApiError> {
        let id = user.id.as_deref().ok_or(ApiError::MissingId)?;
        let body = json_body(user)?;
        let resp = self
            .transport
            .request(Method::Patch, &user_endpoint(id), Some(body), Some(token))
            .await?;
        if !resp.is_success() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json()
    }

    /// `POST users`.
    ///
    /// # Errors
    ///
    /// Returns the encode or transport error.
    pub async fn create_user(&self, user: &User, token: &str) -> Result<bool, ApiError> {
        let body = json_body(user)?;
        let resp = self.transport.request(Method::Post, USERS_ENDPOINT, Some(body), Some(token)).await?;
        debug!(name = %user.name, status = resp.status(), "create user");
        Ok(is_exact_ok(&resp))
    }

    /// `PUT users/{id}/image` with raw image bytes.
    ///
    /// # Errors
    ///
    /// Returns the transport error if no response was received.
    pub async fn upload_picture(&self, id: &str, bytes: Vec<u8>, token: &str) -> Result<bool, ApiError> {
        let resp = self.transport.upload(&picture_endpoint(id), bytes, Some(token)).await?;
        Ok(is_exact_ok(&resp))
    }
}
