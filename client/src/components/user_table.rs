//! Table of user accounts for the users admin page.

use leptos::prelude::*;
use session::User;

/// One row per user with a delete action. Rows without an id cannot be
/// deleted and show no action.
#[component]
pub fn UserTable(#[prop(into)] users: Signal<Vec<User>>, on_delete: Callback<String>) -> impl IntoView {
    view! {
        <Show
            when=move || !users.get().is_empty()
            fallback=move || view! { <div class="user-table__empty">"No users."</div> }
        >
            <table class="user-table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Full name"</th>
                        <th>"Admin"</th>
                        <th>"Action"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                let full_name = user.display_name();
                                let admin = if user.admin { "Yes" } else { "No" };
                                let id = user.id.clone();
                                view! {
                                    <tr>
                                        <td>{user.name}</td>
                                        <td>{user.email}</td>
                                        <td>{full_name}</td>
                                        <td>{admin}</td>
                                        <td>
                                            {id.map(|id| {
                                                view! {
                                                    <button
                                                        class="user-table__delete"
                                                        on:click=move |_| on_delete.run(id.clone())
                                                    >
                                                        "Delete"
                                                    </button>
                                                }
                                            })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
