//! Transport interface for the backend REST API.
//!
//! The browser implements [`Transport`] with `gloo-net`, the CLI with
//! `reqwest`. Implementations read the response body eagerly so callers get
//! a plain [`ApiResponse`] they can inspect and decode synchronously.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures surface as [`ApiError::Network`]. A non-2xx status is
//! not a transport failure: `request` returns the response and each caller
//! decides what counts as success.

#![allow(clippy::module_name_repetitions)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Path prefix under which the backend exposes its versioned API.
pub const API_PREFIX: &str = "/api/v1";

/// Content type sent with every JSON request.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Errors produced while talking to the backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection, CORS, abort).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with an unexpected status code.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body was not the JSON shape the caller expected.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// An operation addressing a record was given one without an `id`.
    #[error("user record has no id")]
    MissingId,
    /// No HTTP transport exists in this build.
    #[error("not available in this environment")]
    Unavailable,
}

/// HTTP verbs used by the console.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-read backend response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    status: u16,
    body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for any 2xx status.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Decode the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] if the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_str(&self.body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Issues requests against the backend API.
///
/// `endpoint` is relative to [`API_PREFIX`], e.g. `"users/exists/alice"`.
/// Futures are `?Send` so browser fetch futures can implement this trait.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send a JSON request. `body` is already serialized by the caller.
    /// When `token` is present it is sent as `Authorization: Bearer <token>`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> Result<ApiResponse, ApiError>;

    /// `PUT` a raw binary body without the JSON content type.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] when no response was received.
    async fn upload(&self, endpoint: &str, body: Vec<u8>, token: Option<&str>) -> Result<ApiResponse, ApiError>;
}

/// Join `base` (origin or empty for same-origin), the API prefix and `endpoint`.
#[must_use]
pub fn endpoint_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}{API_PREFIX}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// `Authorization` header value for `token`.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Serialize a request body for [`Transport::request`].
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if `value` cannot be serialized.
pub fn json_body<T: Serialize + ?Sized>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Encode(e.to_string()))
}
