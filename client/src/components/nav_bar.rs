//! Top navigation bar for default-layout routes.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use session::routes::{Layout, RouteName, resolve};

use crate::state::auth::{ClientSession, can_manage_users, greeting_name};

/// Hidden on routes rendered in the empty layout (login).
fn shows_nav(path: &str) -> bool {
    resolve(path).is_none_or(|route| route.meta.layout != Layout::Empty)
}

#[component]
pub fn NavBar() -> impl IntoView {
    let store = expect_context::<RwSignal<ClientSession>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let logged_in = move || store.with(ClientSession::is_logged_in);
    let is_admin = move || store.with(|s| can_manage_users(s.user()));
    let name = move || store.with(|s| greeting_name(s.user()));

    let on_logout = move |_| crate::util::auth::logout(store, navigate.clone());

    view! {
        <Show when=move || shows_nav(&pathname.get())>
            {
            let on_logout = on_logout.clone();
            view! {
            <nav class="nav-bar">
                <a class="nav-bar__brand" href=RouteName::Dashboard.path()>"Intelligence"</a>
                <a class="nav-bar__link" href=RouteName::Profile.path()>"My profile"</a>
                <Show when=is_admin>
                    <a class="nav-bar__link" href=RouteName::Users.path()>"Users"</a>
                </Show>
                <span class="nav-bar__spacer"></span>
                <Show
                    when=logged_in
                    fallback=|| view! { <a class="nav-bar__link" href=RouteName::Login.path()>"Sign in"</a> }
                >
                    <span class="nav-bar__user">{name}</span>
                    <button class="nav-bar__logout" on:click=on_logout.clone()>"Log out"</button>
                </Show>
            </nav>
            }
            }
        </Show>
    }
}
