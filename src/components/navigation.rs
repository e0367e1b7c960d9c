//! Navigation bar component and the route filter behind it

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::router::{ROUTE_TABLE, RouteEntry};

/// Compute the ordered list of navigation link targets for a current path
///
/// Iterates the route table in order and keeps every entry whose path is
/// non-empty and not equal to `current_path`. Entries with an empty path
/// (the root redirect) are never navigable. Duplicate table paths pass
/// through unchanged, and a `current_path` matching no entry excludes
/// nothing. This function cannot fail.
pub fn navigation_targets(table: &[RouteEntry], current_path: &str) -> Vec<String> {
    table
        .iter()
        .filter(|entry| !entry.path.is_empty() && entry.path != current_path)
        .map(|entry| entry.path.to_string())
        .collect()
}

/// Navigation bar listing every screen except the one being shown
#[component]
pub fn Navigation() -> impl IntoView {
    let pathname = use_location().pathname;

    // One recomputation per route change, single pass over the table.
    let targets = Memo::new(move |_| {
        let pathname = pathname.get();
        let current = pathname.trim_start_matches('/').to_string();
        web_sys::console::log_1(&format!("route: {}", current).into());
        navigation_targets(ROUTE_TABLE, &current)
    });

    view! {
        <nav class="app-nav">
            {move || {
                targets
                    .get()
                    .into_iter()
                    .map(|target| {
                        let href = format!("/{}", target);
                        view! { <a href=href>{target}</a> }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
