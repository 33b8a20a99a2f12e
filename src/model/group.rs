use serde::{Deserialize, Serialize};

/// A GitLab group record, as returned by the `groups` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Numeric id of the group
    pub id: u64,
    /// Group name
    #[serde(default)]
    pub name: Option<String>,
    /// URL path segment of the group
    #[serde(default)]
    pub path: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}
