//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every logout entry point (nav bar, profile page) must clear the session
//! and land on the login route the same way.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::RouteName;

use crate::state::auth::ClientSession;

/// Clear the session and navigate to the login route.
pub fn logout<F>(store: RwSignal<ClientSession>, navigate: F)
where
    F: Fn(&str, NavigateOptions),
{
    store.update(ClientSession::logout);
    navigate(RouteName::Login.path(), NavigateOptions::default());
}

/// Token of the current session without subscribing to changes.
pub fn current_token(store: RwSignal<ClientSession>) -> Option<String> {
    store.with_untracked(|s| s.token().map(str::to_owned))
}
