//! Users admin page: list, create and delete accounts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Every call forwards the session token through
//! `session::users::UsersClient`; the backend decides whether the caller
//! is an admin. Create and delete report success only on an exact `200`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;
use session::User;

use crate::components::user_table::UserTable;
use crate::state::auth::ClientSession;
use crate::util::form::{is_blank, non_blank};

fn validate_new_user(name: &str, email: &str, password: &str, admin: bool) -> Result<User, &'static str> {
    let Some(name) = non_blank(name) else {
        return Err("Enter a username.");
    };
    let Some(email) = non_blank(email) else {
        return Err("Enter an email address.");
    };
    if is_blank(Some(password)) {
        return Err("Enter a password.");
    }
    Ok(User {
        id: None,
        name,
        email,
        admin,
        password: Some(password.to_owned()),
        firstname: None,
        lastname: None,
    })
}

fn sort_users(mut users: Vec<User>) -> Vec<User> {
    users.sort_by_key(|u| u.name.to_lowercase());
    users
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let store = expect_context::<RwSignal<ClientSession>>();
    let users = RwSignal::new(Vec::<User>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let new_name = RwSignal::new(String::new());
    let new_email = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let new_admin = RwSignal::new(false);

    let reload = move || {
        #[cfg(feature = "csr")]
        {
            let Some(token) = crate::util::auth::current_token(store) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::BrowserTransport;
                match session::users::UsersClient::new(&transport).fetch_users(&token).await {
                    Ok(list) => users.set(sort_users(list)),
                    Err(e) => {
                        leptos::logging::warn!("fetch users failed: {e}");
                        info.set(format!("Could not load users: {e}"));
                    }
                }
            });
        }
    };
    reload();

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "csr")]
        {
            let Some(token) = crate::util::auth::current_token(store) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::BrowserTransport;
                match session::users::UsersClient::new(&transport).delete_user(&id, &token).await {
                    Ok(true) => {
                        info.set("User deleted.".to_owned());
                        reload();
                    }
                    Ok(false) => info.set("Could not delete user.".to_owned()),
                    Err(e) => info.set(format!("Could not delete user: {e}")),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let user = match validate_new_user(&new_name.get(), &new_email.get(), &new_password.get(), new_admin.get()) {
            Ok(user) => user,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };

        #[cfg(feature = "csr")]
        {
            let Some(token) = crate::util::auth::current_token(store) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::BrowserTransport;
                let client = session::users::UsersClient::new(&transport);
                for identifier in [user.name.as_str(), user.email.as_str()] {
                    if matches!(client.user_exists(identifier, &token).await, Ok(true)) {
                        info.set(format!("A user named \"{identifier}\" already exists."));
                        busy.set(false);
                        return;
                    }
                }
                match client.create_user(&user, &token).await {
                    Ok(true) => {
                        new_name.set(String::new());
                        new_email.set(String::new());
                        new_password.set(String::new());
                        new_admin.set(false);
                        info.set("User created.".to_owned());
                        reload();
                    }
                    Ok(false) => info.set("Could not create user.".to_owned()),
                    Err(e) => info.set(format!("Could not create user: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (user, store);
        }
    };

    view! {
        <div class="users-page">
            <h1>"Users"</h1>
            <UserTable users=users on_delete=on_delete/>

            <h2>"New user"</h2>
            <form class="users-page__form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || new_name.get()
                    on:input=move |ev| new_name.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || new_email.get()
                    on:input=move |ev| new_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    autocomplete="new-password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| new_password.set(event_target_value(&ev))
                />
                <label class="users-page__admin">
                    <input
                        type="checkbox"
                        prop:checked=move || new_admin.get()
                        on:change=move |ev| new_admin.set(event_target_checked(&ev))
                    />
                    "Administrator"
                </label>
                <button type="submit" disabled=move || busy.get()>"Create"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="users-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
