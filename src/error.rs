//! Error taxonomy surfaced by the connection layer
//!
//! Every error is raised synchronously at the call site that detects it.
//! There is no retry and no automatic recovery; callers handle errors per
//! call.

use reqwest::StatusCode;
use std::fmt;

/// Errors produced by [`Connection`](crate::connection::Connection) operations
#[derive(Debug)]
pub enum GitlabError {
    /// A required argument was empty; raised before any network call
    InvalidArgument(String),
    /// Login was rejected, or a request came back 401 Unauthorized
    AuthenticationFailed,
    /// A single-object fetch came back 404 Not Found
    NotFound,
    /// The server answered with a status the mapping table does not cover
    Unexpected(StatusCode),
    /// Transport failure: connect, timeout, or body read/decode
    Http(reqwest::Error),
    /// JSON (de)serialization failure outside the transport
    Json(serde_json::Error),
}

impl fmt::Display for GitlabError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitlabError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            GitlabError::AuthenticationFailed => write!(f, "authentication failed"),
            GitlabError::NotFound => write!(f, "not found"),
            GitlabError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            GitlabError::Http(e) => write!(f, "http error: {e}"),
            GitlabError::Json(e) => write!(f, "json error: {e}"),
        }
    }
}

impl std::error::Error for GitlabError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GitlabError::Http(e) => Some(e),
            GitlabError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GitlabError {
    fn from(error: reqwest::Error) -> Self {
        GitlabError::Http(error)
    }
}

impl From<serde_json::Error> for GitlabError {
    fn from(error: serde_json::Error) -> Self {
        GitlabError::Json(error)
    }
}
