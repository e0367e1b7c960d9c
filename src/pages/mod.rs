//! Page components for the authd console
//!
//! This module contains the top-level page components for each route.

pub mod home;
pub mod not_found;
pub mod sessions;
pub mod users;

pub use home::Home;
pub use not_found::NotFound;
pub use sessions::Sessions;
pub use users::Users;
