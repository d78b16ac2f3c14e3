//! Profile page: edit the current user's name fields and email, upload a
//! profile picture.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected route. Saves go through `PATCH users/{id}` and, on success,
//! replace the session's user record so the nav bar reflects the change.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use session::User;

use crate::state::auth::ClientSession;
use crate::util::form::non_blank;

/// Apply form edits to `user`. A blank name part is sent as an empty string
/// so the backend clears it (absent fields are left untouched there); a
/// blank email keeps the current one.
fn apply_profile_edits(user: &User, firstname: &str, lastname: &str, email: &str) -> User {
    User {
        firstname: Some(firstname.trim().to_owned()),
        lastname: Some(lastname.trim().to_owned()),
        email: non_blank(email).unwrap_or_else(|| user.email.clone()),
        password: None,
        ..user.clone()
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<RwSignal<ClientSession>>();
    let current = move || store.with(|s| s.user().cloned());

    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    if let Some(user) = store.with_untracked(|s| s.user().cloned()) {
        firstname.set(user.firstname.unwrap_or_default());
        lastname.set(user.lastname.unwrap_or_default());
        email.set(user.email);
    }

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(user) = store.with_untracked(|s| s.user().cloned()) else {
            return;
        };
        let edited = apply_profile_edits(&user, &firstname.get(), &lastname.get(), &email.get());

        #[cfg(feature = "csr")]
        {
            let Some(token) = crate::util::auth::current_token(store) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let transport = crate::net::api::BrowserTransport;
                match session::users::UsersClient::new(&transport).patch_user(&edited, &token).await {
                    Ok(_) => {
                        store.update(|s| {
                            if let Err(e) = s.set_user(edited, token) {
                                leptos::logging::warn!("session not persisted: {e}");
                            }
                        });
                        info.set("Profile saved.".to_owned());
                    }
                    Err(e) => info.set(format!("Could not save profile: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = edited;
        }
    };

    let on_picture = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Some(id) = store.with_untracked(|s| s.user().and_then(|u| u.id.clone())) else {
                info.set("Your account has no id yet.".to_owned());
                return;
            };
            let Some(token) = crate::util::auth::current_token(store) else {
                return;
            };
            busy.set(true);
            leptos::task::spawn_local(async move {
                let bytes = match wasm_bindgen_futures::JsFuture::from(file.array_buffer()).await {
                    Ok(buffer) => js_sys::Uint8Array::new(&buffer).to_vec(),
                    Err(e) => {
                        info.set(format!("Could not read file: {e:?}"));
                        busy.set(false);
                        return;
                    }
                };
                let transport = crate::net::api::BrowserTransport;
                match session::users::UsersClient::new(&transport).upload_picture(&id, bytes, &token).await {
                    Ok(true) => info.set("Picture uploaded.".to_owned()),
                    Ok(false) => info.set("Could not upload picture.".to_owned()),
                    Err(e) => info.set(format!("Could not upload picture: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    view! {
        <div class="profile-page">
            <h1>"My profile"</h1>
            <p class="profile-page__account">
                {move || current().map(|u| format!("Signed in as {}", u.name)).unwrap_or_default()}
            </p>
            <form class="profile-page__form" on:submit=on_save>
                <label>
                    "First name"
                    <input
                        type="text"
                        prop:value=move || firstname.get()
                        on:input=move |ev| firstname.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Last name"
                    <input
                        type="text"
                        prop:value=move || lastname.get()
                        on:input=move |ev| lastname.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || busy.get()>"Save"</button>
            </form>
            <label class="profile-page__picture">
                "Profile picture"
                <input type="file" accept="image/*" on:change=on_picture disabled=move || busy.get()/>
            </label>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-page__message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
