use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A GitLab project record, as returned by the `projects` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Numeric id of the project
    pub id: u64,
    /// Project name
    #[serde(default)]
    pub name: Option<String>,
    /// URL path segment of the project
    #[serde(default)]
    pub path: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Default branch, e.g. `master`
    #[serde(default)]
    pub default_branch: Option<String>,
    /// SSH clone URL
    #[serde(default)]
    pub ssh_url_to_repo: Option<String>,
    /// HTTP clone URL
    #[serde(default)]
    pub http_url_to_repo: Option<String>,
    /// Web URL of the project page
    #[serde(default)]
    pub web_url: Option<String>,
    /// Whether the project is archived
    #[serde(default)]
    pub archived: bool,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
