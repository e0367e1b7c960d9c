//! Behavioral tests for navigation and routing

use crate::components::navigation::navigation_targets;
use crate::router::{ROUTE_TABLE, RouteEntry, routes};

// ============================================================================
// ROUTE CONSTANT BEHAVIORS
// ============================================================================

#[test]
fn given_route_constants_when_checked_then_start_with_slash() {
    assert!(routes::HOME.starts_with('/'), "Home route should start with /");
    assert!(
        routes::USERS.starts_with('/'),
        "Users route should start with /"
    );
    assert!(
        routes::SESSIONS.starts_with('/'),
        "Sessions route should start with /"
    );
}

#[test]
fn given_route_constants_when_checked_then_all_unique() {
    let routes = [routes::HOME, routes::USERS, routes::SESSIONS];

    let unique: std::collections::HashSet<_> = routes.iter().collect();
    assert_eq!(unique.len(), routes.len(), "All routes should be unique");
}

#[test]
fn given_route_constants_when_checked_then_no_trailing_slash() {
    assert!(
        !routes::HOME.ends_with('/'),
        "Home route should not end with /"
    );
    assert!(
        !routes::USERS.ends_with('/'),
        "Users route should not end with /"
    );
    assert!(
        !routes::SESSIONS.ends_with('/'),
        "Sessions route should not end with /"
    );
}

#[test]
fn given_route_constants_when_checked_then_lowercase() {
    // Routes should be lowercase for consistency
    assert_eq!(
        routes::HOME,
        routes::HOME.to_lowercase(),
        "Home route should be lowercase"
    );
    assert_eq!(
        routes::USERS,
        routes::USERS.to_lowercase(),
        "Users route should be lowercase"
    );
    assert_eq!(
        routes::SESSIONS,
        routes::SESSIONS.to_lowercase(),
        "Sessions route should be lowercase"
    );
}

// ============================================================================
// NAVIGATION FILTER BEHAVIORS
// ============================================================================

#[test]
fn given_static_table_when_on_home_then_links_to_other_screens() {
    let targets = navigation_targets(ROUTE_TABLE, "home");
    assert_eq!(targets, vec!["users", "sessions"]);
}

#[test]
fn given_static_table_when_on_sessions_then_links_preserve_table_order() {
    let targets = navigation_targets(ROUTE_TABLE, "sessions");
    assert_eq!(targets, vec!["home", "users"]);
}

#[test]
fn given_static_table_when_on_unknown_path_then_every_screen_is_linked() {
    let targets = navigation_targets(ROUTE_TABLE, "unknown");
    assert_eq!(targets, vec!["home", "users", "sessions"]);
}

#[test]
fn given_any_current_path_when_filtering_then_result_never_contains_it() {
    for current in ["", "home", "users", "sessions", "unknown"] {
        let targets = navigation_targets(ROUTE_TABLE, current);
        assert!(
            !targets.iter().any(|target| target.as_str() == current),
            "nav list for '{}' contains itself",
            current
        );
    }
}

#[test]
fn given_redirect_entry_when_filtering_then_it_never_appears() {
    for current in ["", "home", "users", "sessions", "unknown"] {
        let targets = navigation_targets(ROUTE_TABLE, current);
        assert!(
            !targets.iter().any(|target| target.is_empty()),
            "nav list for '{}' contains the redirect entry",
            current
        );
    }
}

#[test]
fn given_table_with_duplicates_when_filtering_then_duplicates_survive() {
    let table = [
        RouteEntry { path: "home" },
        RouteEntry { path: "users" },
        RouteEntry { path: "home" },
    ];

    let targets = navigation_targets(&table, "users");
    assert_eq!(targets, vec!["home", "home"], "No dedup is performed");
}

#[test]
fn given_identical_inputs_when_filtering_twice_then_results_are_equal() {
    let first = navigation_targets(ROUTE_TABLE, "users");
    let second = navigation_targets(ROUTE_TABLE, "users");
    assert_eq!(first, second);
}

#[test]
fn given_empty_table_when_filtering_then_result_is_empty() {
    assert!(navigation_targets(&[], "home").is_empty());
    assert!(navigation_targets(&[], "").is_empty());
}
