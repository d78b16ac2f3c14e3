//! Router-level navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `<Routes>`. Every location change suspends rendering, re-validates
//! the stored token against `auth/me`, and then either renders the matched
//! route or replaces the location with the guard's redirect. A rejected
//! token clears the session before the redirect is taken.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
#[cfg(any(test, feature = "csr"))]
use session::{
    GuardOutcome, SessionStorage, SessionStore, TokenCheck,
    guard::{decide, settle},
    routes::resolve,
};

use crate::state::auth::ClientSession;

/// Whether the guard has released `current`. A verdict for an earlier path
/// never releases a later one.
fn is_released(released: Option<&str>, current: &str) -> bool {
    released == Some(current)
}

/// Apply a finished token check that was started for `checked`. When the
/// location has since moved to another path the check is dropped without
/// touching the session; the newer navigation runs its own.
#[cfg(any(test, feature = "csr"))]
fn conclude<S: SessionStorage>(
    store: &mut SessionStore<S>,
    checked: &str,
    current: &str,
    check: TokenCheck,
) -> Option<GuardOutcome> {
    if checked != current {
        return None;
    }
    let auth = settle(store, check);
    Some(decide(resolve(checked), auth))
}

#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let store = expect_context::<RwSignal<ClientSession>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    let released = RwSignal::new(None::<String>);

    Effect::new(move || {
        let path = pathname.get();
        released.set(None);
        let token = crate::util::auth::current_token(store);

        #[cfg(feature = "csr")]
        {
            use leptos_router::NavigateOptions;
            use session::guard::check_token;

            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let check = check_token(&crate::net::api::BrowserTransport, token.as_deref()).await;
                let current = pathname.get_untracked();
                let Some(outcome) = store.try_update(|s| conclude(s, &path, &current, check)).flatten() else {
                    return;
                };
                match outcome {
                    GuardOutcome::Allow => released.set(Some(path)),
                    GuardOutcome::Redirect(route) => {
                        leptos::logging::log!("guard redirect {path} -> {}", route.path());
                        navigate(route.path(), NavigateOptions { replace: true, ..NavigateOptions::default() });
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, token, path);
        }
    });

    view! {
        <Show
            when=move || is_released(released.get().as_deref(), &pathname.get())
            fallback=|| view! { <div class="route-pending"></div> }
        >
            {children()}
        </Show>
    }
}
