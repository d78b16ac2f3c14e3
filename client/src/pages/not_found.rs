//! Fallback for paths outside the route table.

use leptos::prelude::*;
use session::RouteName;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <a href=RouteName::Dashboard.path()>"Back to the dashboard"</a>
        </div>
    }
}
