//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::RouteName;

use crate::components::{nav_bar::NavBar, route_guard::RouteGuard};
use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, users::UsersPage,
};
use crate::state::auth::restore_session;

/// Root application component.
///
/// Restores the persisted session once, provides it as context and mounts
/// every route behind the navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = RwSignal::new(restore_session());
    provide_context(store);

    view! {
        <Title text="Intelligence"/>

        <Router>
            <NavBar/>
            <main class="app-content">
                <RouteGuard>
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment(RouteName::Dashboard.segment()) view=DashboardPage/>
                        <Route path=StaticSegment(RouteName::Profile.segment()) view=ProfilePage/>
                        <Route path=StaticSegment(RouteName::Users.segment()) view=UsersPage/>
                        <Route path=StaticSegment(RouteName::Login.segment()) view=LoginPage/>
                    </Routes>
                </RouteGuard>
            </main>
        </Router>
    }
}
