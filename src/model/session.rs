use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Login response from the `session` endpoint
///
/// Carries the private token granting authenticated access to subsequent
/// requests, plus the profile of the account that logged in. Unknown
/// fields in the response body are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Numeric id of the account
    pub id: u64,
    /// Login name
    pub username: String,
    /// Registered email address
    #[serde(default)]
    pub email: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Opaque bearer token for the `PRIVATE-TOKEN` header
    pub private_token: String,
    /// Whether the account is blocked
    #[serde(default)]
    pub blocked: bool,
    /// Account creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether the account has administrator rights
    #[serde(default)]
    pub is_admin: bool,
    /// Whether the account may create groups
    #[serde(default)]
    pub can_create_group: bool,
    /// Whether the account may create projects
    #[serde(default)]
    pub can_create_project: bool,
}
