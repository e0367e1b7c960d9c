//! Users page component
//!
//! Lists the accounts known to the service and hosts the create-user form.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::UserForm;
use crate::models::user::{NewUser, User};

/// Users page component
#[component]
pub fn Users() -> impl IntoView {
    let users = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(None::<String>);

    let load_users = move || {
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(list) => {
                    users.set(list);
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("loading users failed: {}", e).into());
                    error.set(Some(format!("Failed to load users: {}", e)));
                }
            }
        });
    };

    // Initial load; later loads happen after a successful creation.
    load_users();

    let on_create = move |new_user: NewUser| {
        spawn_local(async move {
            match api::create_user(&new_user).await {
                Ok(()) => load_users(),
                Err(e) => {
                    web_sys::console::error_1(&format!("creating user failed: {}", e).into());
                    error.set(Some(format!("Failed to create user: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="users-page">
            <h1>"Users"</h1>

            <Show when=move || error.get().is_some()>
                <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <section class="user-list">
                <div class="user-count">{move || format!("{} users", users.get().len())}</div>
                <ul class="user-items">
                    {move || {
                        users
                            .get()
                            .into_iter()
                            .map(|user| {
                                view! { <UserItem user=user /> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>

            <section class="user-create">
                <h2>"Create user"</h2>
                <UserForm on_submit=on_create />
            </section>
        </div>
    }
}

/// Individual user row
#[component]
fn UserItem(user: User) -> impl IntoView {
    let role = if user.is_admin { "admin" } else { "user" };

    view! {
        <li class=format!("user-item role-{}", role)>
            <span class="user-name">{user.name.clone()}</span>
            <span class="user-role">{role}</span>
            <span class="user-id">{format!("ID: {}", user.id)}</span>
        </li>
    }
}
