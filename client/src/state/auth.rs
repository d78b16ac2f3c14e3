//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` creates one [`ClientSession`], restores it from `localStorage` and
//! provides it as `RwSignal<ClientSession>` context. The route guard, pages and
//! nav bar read it from context; only `SessionStore` methods mutate it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{RestoreOutcome, SessionStore, User};

use crate::util::browser_storage::BrowserStorage;

/// The app-wide session store over `localStorage`.
pub type ClientSession = SessionStore<BrowserStorage>;

/// Build the session store and restore any persisted session.
pub fn restore_session() -> ClientSession {
    let mut store = SessionStore::new(BrowserStorage);
    match store.init() {
        RestoreOutcome::Restored => leptos::logging::log!("restored persisted session"),
        RestoreOutcome::Discarded => leptos::logging::warn!("discarded malformed persisted session"),
        RestoreOutcome::Empty => {}
    }
    store
}

/// Name shown in the nav bar and dashboard greeting.
pub fn greeting_name(user: Option<&User>) -> String {
    user.map_or_else(|| "guest".to_owned(), User::display_name)
}

/// Whether the users admin page should be offered to `user`.
pub fn can_manage_users(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.admin)
}
