//! User model and create-user input

use serde::{Deserialize, Serialize};

/// A user as returned by the service
///
/// Passwords never leave the backend, so they are absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// Input payload for creating a user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub password: String,
    pub is_admin: bool,
}

impl NewUser {
    /// Names of required fields that are still empty
    ///
    /// Required means non-empty. No trimming and no strength policy.
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_empty() {
            missing.push("name");
        }
        if self.password.is_empty() {
            missing.push("password");
        }
        missing
    }

    /// True when every required field is filled in
    pub fn is_valid(&self) -> bool {
        self.missing_required().is_empty()
    }
}
