//! Data-transfer objects for the GitLab v3 API
//!
//! These are passive serde shapes with no behaviour, except
//! [`PaginatedList`](paginated::PaginatedList) which derives its page
//! metadata from response headers.

/// GitLab group record
pub mod group;
/// Paginated result envelope and header parsing
pub mod paginated;
/// GitLab project record
pub mod project;
/// Login response carrying the private token
pub mod session;
/// GitLab user record
pub mod user;

pub use group::Group;
pub use paginated::PaginatedList;
pub use project::Project;
pub use session::Session;
pub use user::User;
