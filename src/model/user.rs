use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitLab user record, as returned by the `users` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric id of the user
    pub id: u64,
    /// Login name
    #[serde(default)]
    pub username: Option<String>,
    /// Registered email address
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Account state, e.g. `active` or `blocked`
    #[serde(default)]
    pub state: Option<String>,
    /// Whether the user has administrator rights
    #[serde(default)]
    pub is_admin: bool,
    /// Account creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
