//! Connection layer for the GitLab v3 API
//!
//! This module provides [`Connection`], the single point of access to the
//! remote API. It handles:
//! - the session login handshake (`create_session`)
//! - token-scoped GET dispatch for single objects and paginated lists
//! - translation of HTTP status codes into typed outcomes
//!
//! # Example
//! ```ignore
//! use gitlab_connection::config::Config;
//! use gitlab_connection::connection::Connection;
//! use gitlab_connection::model::Project;
//!
//! let connection = Connection::new(Config::new())?;
//! connection.create_session("john.smith", "secret")?;
//!
//! let project: Option<Project> = connection.get_object(None, "projects/1234", None)?;
//! ```

use crate::config::Config;
use crate::constants::{PRIVATE_TOKEN_HEADER, SESSION_API_PATH, SUDO_HEADER, USER_AGENT};
use crate::error::GitlabError;
use crate::model::{PaginatedList, Session};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::{debug, error, info};

/// Query parameters attached verbatim to a request URL
///
/// Maps a query key to one or more values; an absent or empty map means
/// no filtering.
pub type QueryParams = HashMap<String, Vec<String>>;

/// Connection to a GitLab instance
///
/// Owns the HTTP client (built with the configured connect and read
/// timeouts) and the current private token. Callers construct and own
/// the connection, and may share it across threads via `Arc`: every
/// request method takes `&self`, and the token is swapped atomically, so
/// a concurrent reader observes either the previous or the new
/// credential, never a torn value.
///
/// Each request is a single synchronous blocking round trip. There is no
/// retry, backoff, or cancellation; a failed attempt surfaces immediately.
pub struct Connection {
    client: Client,
    config: Config,
    private_token: RwLock<Option<String>>,
}

impl Connection {
    /// Creates a connection from the given configuration
    ///
    /// No network activity happens here. If the configuration carries a
    /// pre-provisioned private token it becomes the initial credential,
    /// so fetch calls work without a prior `create_session`.
    ///
    /// # Errors
    /// Returns [`GitlabError::Http`] if the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, GitlabError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;
        let private_token = RwLock::new(
            config
                .private_token
                .clone()
                .filter(|token| !token.is_empty()),
        );

        Ok(Self {
            client,
            config,
            private_token,
        })
    }

    /// Logs in to GitLab with username and password to obtain a private token
    ///
    /// Uses the configured base URL; see [`Connection::create_session_at`].
    pub fn create_session(&self, username: &str, password: &str) -> Result<Session, GitlabError> {
        self.create_session_at(&self.config.base_url, username, password)
    }

    /// Logs in to a specific GitLab instance with username and password
    ///
    /// Submits a form-encoded login request to the `session` sub-path of
    /// `api_url`. On 201 Created the response body is decoded as a
    /// [`Session`], its private token is stored as the current credential,
    /// and the session is returned. On any other status the stored
    /// credential is left untouched.
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the GitLab REST API
    /// * `username` - Login name
    /// * `password` - Password
    ///
    /// # Errors
    /// * [`GitlabError::InvalidArgument`] - Any argument is empty; raised
    ///   before any network call
    /// * [`GitlabError::AuthenticationFailed`] - The server answered with
    ///   anything other than 201 Created
    pub fn create_session_at(
        &self,
        api_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Session, GitlabError> {
        if api_url.is_empty() || username.is_empty() || password.is_empty() {
            error!("Incorrect connection parameters are passed");
            return Err(GitlabError::InvalidArgument(
                "one of the connection parameters is empty".to_string(),
            ));
        }

        info!("Creating a new session for {}", username);
        let url = format!("{}/{}", api_url.trim_end_matches('/'), SESSION_API_PATH);
        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(&[("login", username), ("password", password)])
            .send()?;

        let status = response.status();
        debug!("Response status: {}", status);
        if status != StatusCode::CREATED {
            error!("Invalid username or password provided");
            return Err(GitlabError::AuthenticationFailed);
        }

        let session: Session = response.json()?;
        self.set_private_token(session.private_token.clone());
        info!("Session successfully created for {}", username);
        Ok(session)
    }

    /// Fetches a single object from the configured GitLab instance
    ///
    /// See [`Connection::get_object_at`].
    pub fn get_object<T: DeserializeOwned>(
        &self,
        sudo: Option<&str>,
        path: &str,
        params: Option<&QueryParams>,
    ) -> Result<Option<T>, GitlabError> {
        self.get_object_at(sudo, &self.config.base_url, path, params)
    }

    /// Fetches a single object from a specific GitLab instance
    ///
    /// Issues a GET to `{api_url}/{path}` with the query parameters
    /// attached, the `PRIVATE-TOKEN` header always set, and the `SUDO`
    /// header set only when a non-empty impersonation user is supplied.
    ///
    /// Without a stored credential (no token, or an empty one) this
    /// returns `Ok(None)` without contacting the transport at all. This
    /// weak guard is carried over
    /// from the original connection service; prefer checking
    /// [`Connection::private_token`] up front.
    ///
    /// # Arguments
    /// * `sudo` - Account to impersonate, requires an admin token
    /// * `api_url` - Base URL of the GitLab REST API
    /// * `path` - Resource path relative to `api_url`
    /// * `params` - Query parameters, passed through verbatim
    ///
    /// # Errors
    /// * [`GitlabError::NotFound`] - 404
    /// * [`GitlabError::AuthenticationFailed`] - 401
    /// * [`GitlabError::Unexpected`] - any other non-200 status
    pub fn get_object_at<T: DeserializeOwned>(
        &self,
        sudo: Option<&str>,
        api_url: &str,
        path: &str,
        params: Option<&QueryParams>,
    ) -> Result<Option<T>, GitlabError> {
        let Some(token) = self.private_token() else {
            debug!("No session created yet, skipping GET {}", path);
            return Ok(None);
        };

        let response = self.build_get(&token, sudo, api_url, path, params).send()?;
        let status = response.status();
        debug!("Response status: {}", status);
        match status {
            StatusCode::OK => Ok(Some(response.json()?)),
            StatusCode::NOT_FOUND => Err(GitlabError::NotFound),
            StatusCode::UNAUTHORIZED => Err(GitlabError::AuthenticationFailed),
            other => {
                error!("GET {} failed with status {}", path, other);
                Err(GitlabError::Unexpected(other))
            }
        }
    }

    /// Fetches a paginated list from the configured GitLab instance
    ///
    /// See [`Connection::get_list_at`].
    pub fn get_list<T: DeserializeOwned>(
        &self,
        sudo: Option<&str>,
        path: &str,
        params: Option<&QueryParams>,
    ) -> Result<Option<PaginatedList<T>>, GitlabError> {
        self.get_list_at(sudo, &self.config.base_url, path, params)
    }

    /// Fetches a paginated list from a specific GitLab instance
    ///
    /// Header rules and the missing-credential guard match
    /// [`Connection::get_object_at`]. On 200 the body is decoded as a
    /// sequence of `T` and paired with the page metadata read from the
    /// `X-*` pagination headers; a missing or malformed pagination header
    /// reads 0 and never fails the call.
    ///
    /// # Errors
    /// * [`GitlabError::AuthenticationFailed`] - 401
    /// * [`GitlabError::Unexpected`] - any other non-200 status,
    ///   including 404 (`NotFound` is reserved for single-object fetch)
    pub fn get_list_at<T: DeserializeOwned>(
        &self,
        sudo: Option<&str>,
        api_url: &str,
        path: &str,
        params: Option<&QueryParams>,
    ) -> Result<Option<PaginatedList<T>>, GitlabError> {
        let Some(token) = self.private_token() else {
            debug!("No session created yet, skipping GET {}", path);
            return Ok(None);
        };

        let response = self.build_get(&token, sudo, api_url, path, params).send()?;
        let status = response.status();
        debug!("Response status: {}", status);
        match status {
            StatusCode::OK => Ok(Some(Self::read_page(response)?)),
            StatusCode::UNAUTHORIZED => Err(GitlabError::AuthenticationFailed),
            other => {
                error!("GET {} failed with status {}", path, other);
                Err(GitlabError::Unexpected(other))
            }
        }
    }

    /// Gets a copy of the stored private token, if any
    pub fn private_token(&self) -> Option<String> {
        self.private_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replaces the stored private token
    ///
    /// Accepts a token, or `None` to clear the credential. An empty token
    /// also counts as absent and clears the credential. Used by tests and
    /// by callers injecting a pre-existing token.
    pub fn set_private_token(&self, token: impl Into<Option<String>>) {
        let mut guard = self
            .private_token
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = token.into().filter(|token| !token.is_empty());
    }

    /// Gets a reference to the underlying HTTP client
    pub fn http_client(&self) -> &Client {
        &self.client
    }

    /// Replaces the underlying HTTP client
    ///
    /// Intended for advanced callers that need transport settings beyond
    /// the configured timeouts.
    pub fn set_http_client(&mut self, client: Client) {
        self.client = client;
    }

    /// Gets the configuration this connection was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn build_get(
        &self,
        token: &str,
        sudo: Option<&str>,
        api_url: &str,
        path: &str,
        params: Option<&QueryParams>,
    ) -> RequestBuilder {
        let url = format!(
            "{}/{}",
            api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        debug!("GET {}", url);

        let mut request = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(PRIVATE_TOKEN_HEADER, token);
        if let Some(user) = sudo.filter(|user| !user.is_empty()) {
            request = request.header(SUDO_HEADER, user);
        }
        if let Some(params) = params.filter(|params| !params.is_empty()) {
            let pairs: Vec<(&str, &str)> = params
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |value| (key.as_str(), value.as_str())))
                .collect();
            request = request.query(&pairs);
        }
        request
    }

    // Pagination headers must be read before .json() consumes the response.
    fn read_page<T: DeserializeOwned>(response: Response) -> Result<PaginatedList<T>, GitlabError> {
        let headers = response.headers().clone();
        let items: Vec<T> = response.json()?;
        Ok(PaginatedList::from_headers(items, &headers))
    }
}
