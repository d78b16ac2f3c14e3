//! Wire records exchanged with the backend REST API.
//!
//! DESIGN
//! ======
//! Optional fields are skipped when `None` so the same `User` value can be
//! sent as a partial update without clobbering server-side fields.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user account as returned by `auth/me` and the `users` collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Backend-assigned identifier; absent on records not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Unique login name.
    pub name: String,
    /// Contact address, also accepted as a login identifier.
    pub email: String,
    /// Whether the account may manage other users.
    #[serde(default)]
    pub admin: bool,
    /// Write-only; only sent on create/update, never returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
}

impl User {
    /// "First Last" when both name parts are set, otherwise the login name.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (self.firstname.as_deref(), self.lastname.as_deref()) {
            (Some(first), Some(last)) if !first.trim().is_empty() && !last.trim().is_empty() => {
                format!("{} {}", first.trim(), last.trim())
            }
            _ => self.name.clone(),
        }
    }
}

/// Body of `POST auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Successful `POST auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginToken {
    pub token: String,
}
