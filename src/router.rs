//! Router configuration for the authd console
//!
//! This module defines the static route table and the navigation structure
//! for the application.

use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Routes},
};

use crate::pages::{Home, NotFound, Sessions, Users};

/// Route definitions as constants for type safety
pub mod routes {
    pub const HOME: &str = "/home";
    pub const USERS: &str = "/users";
    pub const SESSIONS: &str = "/sessions";
}

/// A single entry in the static route table
///
/// `path` is the path segment without a leading slash. The root redirect
/// entry has an empty path and is not navigable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
}

/// Ordered route table mirroring the `AppRouter` configuration
///
/// The first entry is the root-to-home redirect.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: "" },
    RouteEntry { path: "home" },
    RouteEntry { path: "users" },
    RouteEntry { path: "sessions" },
];

/// Routed content of the application
///
/// Lives inside the `<Router>` provided by `App`.
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=|| view! { <Redirect path=routes::HOME /> } />
            <Route path=StaticSegment("home") view=Home />
            <Route path=StaticSegment("users") view=Users />
            <Route path=StaticSegment("sessions") view=Sessions />
        </Routes>
    }
}
