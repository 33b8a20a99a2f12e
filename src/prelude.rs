//! Convenience re-exports of the types most callers need

pub use crate::config::Config;
pub use crate::connection::{Connection, QueryParams};
pub use crate::error::GitlabError;
pub use crate::model::{Group, PaginatedList, Project, Session, User};
pub use crate::utils::logger::setup_logger;
