//! Session, navigation guard and REST plumbing for the Intelligence admin
//! console.
//!
//! This crate owns everything the browser `client` and the native `cli`
//! share: the user model, the session store and its durable-storage seam,
//! the HTTP transport interface, the route table with its auth guard, and
//! the typed `users` resource client. It has no browser or runtime
//! dependency so the whole auth state machine is testable natively.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard reads the token from [`store::SessionStore`], validates it
//! against `GET auth/me` through a [`http::Transport`], and on failure
//! clears the store before redirecting. Resource calls forward the stored
//! token unchanged.

pub mod auth;
pub mod guard;
pub mod http;
pub mod routes;
pub mod storage;
pub mod store;
pub mod types;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support;

pub use guard::{AuthState, GuardOutcome, NavigationGuard, TokenCheck};
pub use http::{ApiError, ApiResponse, Method, Transport};
pub use routes::{Layout, Route, RouteMeta, RouteName};
pub use storage::{MemoryStorage, SessionStorage, StorageError};
pub use store::{RestoreOutcome, SessionError, SessionStore};
pub use types::User;
