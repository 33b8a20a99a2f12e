//! Paginated results
//!
//! GitLab reports page position in response headers rather than in the
//! body. [`PaginatedList`] pairs the decoded items with that metadata.
//! A malformed or missing pagination header never fails the call; the
//! affected field reads 0.

use crate::constants::{X_NEXT_PAGE, X_PAGE, X_PER_PAGE, X_PREV_PAGE, X_TOTAL, X_TOTAL_PAGES};
use reqwest::header::HeaderMap;

/// A decoded list plus page-position metadata derived from response headers
///
/// Only ever constructed from a 200 response; `items` may be empty but is
/// never absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedList<T> {
    /// Decoded items, in server-returned order
    pub items: Vec<T>,
    /// Total number of items across all pages (`X-Total`)
    pub total_items: u32,
    /// Total number of pages (`X-Total-Pages`)
    pub total_pages: u32,
    /// Number of items per page (`X-Per-Page`)
    pub items_per_page: u32,
    /// Index of this page (`X-Page`)
    pub current_page: u32,
    /// Index of the previous page, 0 on the first page (`X-Prev-Page`)
    pub previous_page: u32,
    /// Index of the next page, 0 on the last page (`X-Next-Page`)
    pub next_page: u32,
}

impl<T> PaginatedList<T> {
    /// Builds a paginated list from decoded items and the response headers
    ///
    /// # Arguments
    /// * `items` - Items decoded from the response body
    /// * `headers` - Response headers carrying the `X-*` pagination fields
    pub fn from_headers(items: Vec<T>, headers: &HeaderMap) -> Self {
        Self {
            items,
            total_items: header_as_u32(headers, X_TOTAL),
            total_pages: header_as_u32(headers, X_TOTAL_PAGES),
            items_per_page: header_as_u32(headers, X_PER_PAGE),
            current_page: header_as_u32(headers, X_PAGE),
            previous_page: header_as_u32(headers, X_PREV_PAGE),
            next_page: header_as_u32(headers, X_NEXT_PAGE),
        }
    }

    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carries no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a further page exists after this one
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.next_page > 0
    }
}

/// Reads a header as a non-negative integer, substituting 0 when the
/// header is missing, empty, or non-numeric
fn header_as_u32(headers: &HeaderMap, name: &str) -> u32 {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u32>().ok())
        .unwrap_or(0)
}
