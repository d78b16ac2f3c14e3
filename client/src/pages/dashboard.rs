//! Dashboard: the landing route and the guard's redirect target for
//! authenticated visits to `/login`.

use leptos::prelude::*;
use session::RouteName;

use crate::state::auth::{ClientSession, can_manage_users, greeting_name};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = expect_context::<RwSignal<ClientSession>>();

    let logged_in = move || store.with(ClientSession::is_logged_in);
    let is_admin = move || store.with(|s| can_manage_users(s.user()));
    let name = move || store.with(|s| greeting_name(s.user()));

    view! {
        <div class="dashboard-page">
            <h1>{move || format!("Welcome, {}", name())}</h1>
            <Show
                when=logged_in
                fallback=|| {
                    view! {
                        <p class="dashboard-page__hint">
                            <a href=RouteName::Login.path()>"Sign in"</a>
                            " to manage your profile."
                        </p>
                    }
                }
            >
                <div class="dashboard-page__cards">
                    <a class="dashboard-card" href=RouteName::Profile.path()>
                        <h2>"My profile"</h2>
                        <p>"Update your name, email and picture."</p>
                    </a>
                    <Show when=is_admin>
                        <a class="dashboard-card" href=RouteName::Users.path()>
                            <h2>"Users"</h2>
                            <p>"Create and remove accounts."</p>
                        </a>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
