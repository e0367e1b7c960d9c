//! Create-user form component

use leptos::prelude::*;

use crate::models::user::NewUser;

/// Reactive form for creating a user
///
/// `name` and `password` are required. A failed submit marks the empty
/// fields invalid inline instead of raising an error; `on_submit` receives
/// the payload only once both required fields are filled.
#[component]
pub fn UserForm(on_submit: impl Fn(NewUser) + Clone + 'static) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let is_admin = RwSignal::new(false);
    let attempted = RwSignal::new(false);

    let name_invalid = move || attempted.get() && name.get().is_empty();
    let password_invalid = move || attempted.get() && password.get().is_empty();

    let handle_submit = move |_| {
        attempted.set(true);
        let new_user = NewUser {
            name: name.get(),
            password: password.get(),
            is_admin: is_admin.get(),
        };
        if new_user.is_valid() {
            on_submit(new_user);
            name.set(String::new());
            password.set(String::new());
            is_admin.set(false);
            attempted.set(false);
        }
    };

    view! {
        <form
            class="user-form"
            on:submit=move |e| {
                e.prevent_default();
                handle_submit(());
            }
        >
            <div class="form-group" class:invalid=name_invalid>
                <label for="name">"Name"</label>
                <input
                    id="name"
                    type="text"
                    placeholder="User name..."
                    on:input=move |ev| name.set(event_target_value(&ev))
                    prop:value=move || name.get()
                />
                <Show when=name_invalid>
                    <span class="field-error">"Name is required"</span>
                </Show>
            </div>

            <div class="form-group" class:invalid=password_invalid>
                <label for="password">"Password"</label>
                <input
                    id="password"
                    type="password"
                    placeholder="Password..."
                    on:input=move |ev| password.set(event_target_value(&ev))
                    prop:value=move || password.get()
                />
                <Show when=password_invalid>
                    <span class="field-error">"Password is required"</span>
                </Show>
            </div>

            <div class="form-group checkbox-group">
                <label for="is-admin">"Administrator"</label>
                <input
                    id="is-admin"
                    type="checkbox"
                    on:change=move |ev| is_admin.set(event_target_checked(&ev))
                    prop:checked=move || is_admin.get()
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="btn-primary">
                    "Create user"
                </button>
            </div>
        </form>
    }
}
