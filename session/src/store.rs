//! The single owner of "who is logged in and with what credential".
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created at start-up and handed to the navigation
//! guard and resource callers. Only this type mutates the session; the
//! guard clears it exclusively through [`SessionStore::logout`].
//!
//! PERSISTENCE
//! ===========
//! Every `set_user` writes two storage keys ([`USER_KEY`] holds the JSON user
//! record, [`TOKEN_KEY`] the raw bearer token) and every `logout` removes
//! both. `init` restores purely from storage and never contacts the backend;
//! a stale token is caught by the guard on the first protected navigation.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use tracing::{debug, info, warn};

use crate::storage::{SessionStorage, StorageError};
use crate::types::User;

/// Storage key holding the serialized [`User`] record.
pub const USER_KEY: &str = "user";
/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";

/// Error returned by [`SessionStore::set_user`] when persistence fails.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to encode user record: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result of [`SessionStore::init`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// Both keys were present and the session was restored.
    Restored,
    /// At least one key was missing; the session stays empty.
    Empty,
    /// The stored user record was malformed; both keys were removed.
    Discarded,
}

/// User and token are held together so partial state cannot exist.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Session {
    user: User,
    token: String,
}

/// In-memory session mirrored into durable storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create an empty store over `storage`. Call [`Self::init`] to restore.
    pub fn new(storage: S) -> Self {
        Self { storage, session: None }
    }

    /// Restore a previously persisted session, if both keys are present.
    pub fn init(&mut self) -> RestoreOutcome {
        let stored_user = non_empty(self.storage.get_item(USER_KEY));
        let stored_token = non_empty(self.storage.get_item(TOKEN_KEY));
        let (Some(raw_user), Some(token)) = (stored_user, stored_token) else {
            debug!("no persisted session");
            return RestoreOutcome::Empty;
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                info!(user = %user.name, "restored persisted session");
                if let Err(e) = self.set_user(user, token) {
                    warn!(error = %e, "failed to re-persist restored session");
                }
                RestoreOutcome::Restored
            }
            Err(e) => {
                warn!(error = %e, "discarding malformed persisted session");
                self.clear_storage();
                RestoreOutcome::Discarded
            }
        }
    }

    /// Store `user` and `token` in memory and in durable storage.
    ///
    /// The token is not validated here; callers pass a token that just came
    /// back from a successful login or restore.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] when the record cannot be persisted. The
    /// in-memory session is set regardless, so the current process stays
    /// logged in.
    pub fn set_user(&mut self, user: User, token: String) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(&user);
        self.session = Some(Session { user, token });
        let encoded = encoded?;

        self.storage.set_item(USER_KEY, &encoded)?;
        let token = self.session.as_ref().map_or("", |s| s.token.as_str());
        if let Err(e) = self.storage.set_item(TOKEN_KEY, token) {
            // Keep storage restorable: a user without its token is never read back.
            let _ = self.storage.remove_item(USER_KEY);
            return Err(e.into());
        }
        Ok(())
    }

    /// Clear the session and remove both storage keys. Safe to repeat.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(user = %session.user.name, "session cleared");
        }
        self.clear_storage();
    }

    /// True iff a user identity is currently held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    /// The bearer token, or `None` when logged out or the token is empty.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str()).filter(|t| !t.is_empty())
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the store, handing back the storage backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn clear_storage(&mut self) {
        for key in [USER_KEY, TOKEN_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                warn!(key, error = %e, "failed to remove persisted session key");
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
