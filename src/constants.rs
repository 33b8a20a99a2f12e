//! Fixed wire constants for the GitLab v3 API

/// Default base URL of the GitLab v3 REST API
pub const GITLAB_API_URL: &str = "https://gitlab.com/api/v3";
/// Sub-path of the login endpoint, relative to the API base URL
pub const SESSION_API_PATH: &str = "session";
/// Header carrying the private token on every authenticated request
pub const PRIVATE_TOKEN_HEADER: &str = "PRIVATE-TOKEN";
/// Header naming the account to impersonate (admin only)
pub const SUDO_HEADER: &str = "SUDO";

/// Pagination header: total number of items across all pages
pub const X_TOTAL: &str = "X-Total";
/// Pagination header: total number of pages
pub const X_TOTAL_PAGES: &str = "X-Total-Pages";
/// Pagination header: number of items per page
pub const X_PER_PAGE: &str = "X-Per-Page";
/// Pagination header: index of the current page
pub const X_PAGE: &str = "X-Page";
/// Pagination header: index of the previous page, absent on the first page
pub const X_PREV_PAGE: &str = "X-Prev-Page";
/// Pagination header: index of the next page, absent on the last page
pub const X_NEXT_PAGE: &str = "X-Next-Page";

/// Default connect and read timeout applied to the HTTP client, in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
/// User agent string used in HTTP requests to identify this client to GitLab
pub const USER_AGENT: &str = "gitlab-connection-rs/0.1.0";
