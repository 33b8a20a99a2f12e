//! Client configuration
//!
//! All values are environment-driven with sensible defaults, so a plain
//! `Config::new()` talks to gitlab.com with 5 second timeouts. A `.env`
//! file is honoured when present.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `GITLAB_API_URL` | `https://gitlab.com/api/v3` | API base URL |
//! | `GITLAB_CONNECT_TIMEOUT_MS` | `5000` | TCP connect timeout |
//! | `GITLAB_READ_TIMEOUT_MS` | `5000` | whole-request timeout |
//! | `GITLAB_PRIVATE_TOKEN` | unset | pre-provisioned credential |

use crate::constants::{DEFAULT_TIMEOUT_MS, GITLAB_API_URL};
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::error;

/// Configuration for the GitLab connection client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the GitLab REST API
    pub base_url: String,
    /// TCP connect timeout in milliseconds
    pub connect_timeout_ms: u64,
    /// Read (whole request) timeout in milliseconds
    pub read_timeout_ms: u64,
    /// Optional pre-provisioned private token, used as the initial
    /// credential instead of calling `create_session`
    pub private_token: Option<String>,
}

impl Config {
    /// Builds a configuration from the environment
    pub fn new() -> Self {
        dotenv().ok();

        Self {
            base_url: env_or("GITLAB_API_URL", GITLAB_API_URL.to_string()),
            connect_timeout_ms: env_or("GITLAB_CONNECT_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
            read_timeout_ms: env_or("GITLAB_READ_TIMEOUT_MS", DEFAULT_TIMEOUT_MS),
            private_token: env_parsed("GITLAB_PRIVATE_TOKEN"),
        }
    }

    /// Builds a configuration pointing at a specific API base URL,
    /// keeping the default timeouts
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the GitLab REST API
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout_ms: DEFAULT_TIMEOUT_MS,
            read_timeout_ms: DEFAULT_TIMEOUT_MS,
            private_token: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and parses an environment variable, returning `None` when the
/// variable is absent and logging when it is set but unparsable
fn env_parsed<T: FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            error!("Ignoring unparsable {}: {}", name, raw);
            None
        }
    }
}

/// Reads an environment variable, falling back to a default when it is
/// absent or does not parse as `T`
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env_parsed(name).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_base_url_keeps_default_timeouts() {
        let config = Config::with_base_url("http://localhost:9999/api/v3");
        assert_eq!(config.base_url, "http://localhost:9999/api/v3");
        assert_eq!(config.connect_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.read_timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.private_token.is_none());
    }

    #[test]
    fn env_or_falls_back_when_unset_or_unparsable() {
        assert_eq!(env_or("GITLAB_TEST_MISSING_VAR", 7u64), 7);

        env::set_var("GITLAB_TEST_BAD_VAR", "not-a-number");
        assert_eq!(env_or("GITLAB_TEST_BAD_VAR", 7u64), 7);
        env::remove_var("GITLAB_TEST_BAD_VAR");
    }
}
