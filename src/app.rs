//! Main application component
//!
//! This module provides the root App component that sets up routing
//! and the overall application structure.

use leptos::prelude::*;
use leptos_router::components::Router;

use crate::components::Navigation;
use crate::router::AppRouter;

/// Main application component with router integration
///
/// This component serves as the root of the Leptos application. The
/// `<Router>` wraps the header as well as the routed content so the
/// navigation bar can read the current location.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app-container">
                <header class="app-header">
                    <h1>"authd"</h1>
                    <Navigation />
                </header>
                <main class="app-main">
                    <AppRouter />
                </main>
                <footer class="app-footer">
                    <p>"authd admin console - Leptos 0.7 CSR"</p>
                </footer>
            </div>
        </Router>
    }
}
