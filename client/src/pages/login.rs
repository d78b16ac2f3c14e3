//! Login page: username (or email) and password.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered in the empty layout. A successful login stores the session and
//! navigates to the dashboard, where the guard re-validates the new token.
//! Failures show one generic message whatever the cause.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::ClientSession;
use crate::util::form::non_blank;

#[cfg(feature = "csr")]
const LOGIN_FAILED: &str = "Login failed. Check your username and password.";

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let Some(username) = non_blank(username) else {
        return Err("Enter your username or email.");
    };
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((username, password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<RwSignal<ClientSession>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (username_value, password_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::BrowserTransport;
                match session::auth::authenticate(&transport, &username_value, &password_value).await {
                    Ok((user, token)) => {
                        store.update(|s| {
                            if let Err(e) = s.set_user(user, token) {
                                leptos::logging::warn!("session not persisted: {e}");
                            }
                        });
                        password.set(String::new());
                        busy.set(false);
                        navigate(
                            session::RouteName::Dashboard.path(),
                            leptos_router::NavigateOptions::default(),
                        );
                    }
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        info.set(LOGIN_FAILED.to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, store, username_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Intelligence"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username or email"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
