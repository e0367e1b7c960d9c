//! Sessions page component
//!
//! Lists the active refresh-token sessions and lets an admin revoke them.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::models::session::Session;

/// Sessions page component
#[component]
pub fn Sessions() -> impl IntoView {
    let sessions = RwSignal::new(Vec::<Session>::new());
    let error = RwSignal::new(None::<String>);

    let load_sessions = move || {
        spawn_local(async move {
            match api::fetch_sessions().await {
                Ok(list) => {
                    sessions.set(list);
                    error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("loading sessions failed: {}", e).into());
                    error.set(Some(format!("Failed to load sessions: {}", e)));
                }
            }
        });
    };

    load_sessions();

    let on_delete = move |id: String| {
        spawn_local(async move {
            match api::delete_session(&id).await {
                Ok(()) => load_sessions(),
                Err(e) => {
                    web_sys::console::error_1(&format!("deleting session failed: {}", e).into());
                    error.set(Some(format!("Failed to delete session: {}", e)));
                }
            }
        });
    };

    view! {
        <div class="sessions-page">
            <h1>"Sessions"</h1>

            <Show when=move || error.get().is_some()>
                <p class="error-banner">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <section class="session-list">
                <div class="session-count">
                    {move || format!("{} active sessions", sessions.get().len())}
                </div>
                <ul class="session-items">
                    {move || {
                        sessions
                            .get()
                            .into_iter()
                            .map(|session| {
                                view! { <SessionItem session=session on_delete=on_delete /> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>
            </section>
        </div>
    }
}

/// Individual session row with a revoke action
#[component]
fn SessionItem(session: Session, on_delete: impl Fn(String) + Clone + 'static) -> impl IntoView {
    let id = session.id.clone();

    view! {
        <li class="session-item">
            <span class="session-summary">{session.summary()}</span>
            <span class="session-agent">{session.device_data.user_agent.clone()}</span>
            <span class="session-user">{format!("User: {}", session.user_id)}</span>
            <button class="btn-danger" on:click=move |_| on_delete(id.clone())>
                "Revoke"
            </button>
        </li>
    }
}
