//! Session-based connection client for the GitLab v3 REST API
//!
//! This crate provides the connection layer of a GitLab client:
//! - session login with username and password, yielding a private token
//! - token-scoped GET dispatch for single objects and paginated lists,
//!   with optional impersonation (`SUDO`)
//! - page metadata derived from the `X-*` pagination response headers
//! - a typed error taxonomy for the HTTP status outcomes
//!
//! # Example
//! ```ignore
//! use gitlab_connection::prelude::*;
//!
//! let connection = Connection::new(Config::new())?;
//! connection.create_session("john.smith", "secret")?;
//!
//! let projects: Option<PaginatedList<Project>> =
//!     connection.get_list(None, "projects", None)?;
//! ```

/// Client configuration, environment-driven
pub mod config;
/// The connection layer: login handshake and token-scoped fetch
pub mod connection;
/// Fixed wire constants for the GitLab v3 API
pub mod constants;
/// Error taxonomy surfaced to callers
pub mod error;
/// Passive data-transfer objects and the paginated envelope
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Logging helpers
pub mod utils;
