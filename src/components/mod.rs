//! Leptos UI components for the authd console

pub mod navigation;
pub mod user_form;


pub use navigation::Navigation;
pub use user_form::UserForm;
