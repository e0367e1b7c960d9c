//! Home page component

use leptos::prelude::*;

use crate::router::routes;

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"authd admin console"</h1>
            <p>"Manage the users and sessions of your authd instance"</p>
            <div class="feature-grid">
                <div class="feature-card">
                    <h2>"Users"</h2>
                    <p>"List accounts and create new ones"</p>
                    <a href=routes::USERS>"Go to Users"</a>
                </div>
                <div class="feature-card">
                    <h2>"Sessions"</h2>
                    <p>"Inspect and revoke active sessions"</p>
                    <a href=routes::SESSIONS>"Go to Sessions"</a>
                </div>
            </div>
        </div>
    }
}
