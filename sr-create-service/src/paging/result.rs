//! Result envelope returned by list operations

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// One page of items plus an optional total match count
///
/// # Example
///
/// ```rust
/// use sr_create_service::paging::PagedResult;
///
/// let page = PagedResult::new(vec!["a", "b"]).with_total(12);
/// assert_eq!(page.len(), 2);
/// assert_eq!(page.total_results, Some(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    /// Items in backend order
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total number of matches across all pages, when requested and known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_results: Option<u64>,
}

impl<T> PagedResult<T> {
    /// Create a page without a total
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            total_results: None,
        }
    }

    /// Attach the total match count
    #[must_use]
    pub fn with_total(mut self, total: u64) -> Self {
        self.total_results = Some(total);
        self
    }

    /// Drop the total match count
    #[must_use]
    pub fn without_total(mut self) -> Self {
        self.total_results = None;
        self
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T> IntoResponse for PagedResult<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
