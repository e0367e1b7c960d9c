//! Session model for the sessions screen

use serde::{Deserialize, Serialize};

/// Device metadata captured when a session was opened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceData {
    pub ip: String,
    pub user_agent: String,
}

/// An active refresh-token session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub user_id: String,
    pub device_data: DeviceData,
    /// RFC 3339 creation timestamp as emitted by the service
    pub created: String,
}

impl Session {
    /// Short label for list rows, e.g. "2024-05-01 (192.168.0.4)"
    pub fn summary(&self) -> String {
        let date = self.created.split('T').next().unwrap_or(&self.created);
        format!("{} ({})", date, self.device_data.ip)
    }
}
