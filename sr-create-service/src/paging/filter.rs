//! Filter envelope handed to the backend for list operations

use serde::Serialize;

use crate::api::ApiError;

use super::{limits::PageLimits, params::RawParams, sort::parse_sort, sort::SortTerm};

/// A validated, immutable list request
///
/// Carries a sparse entity of filter values together with the page window,
/// the sort clause and whether a total count was asked for. The only way to
/// build one is [`PagedFilter::parse`], so every instance satisfies the
/// endpoint's limits and sort allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedFilter<T> {
    filter_fields: T,
    offset: u64,
    limit: u64,
    sort_criteria: Vec<SortTerm>,
    #[serde(rename = "totalResults")]
    include_total: bool,
}

impl<T> PagedFilter<T> {
    /// Validate the paging parameters of a request and wrap the filter values
    ///
    /// Checks run in order `offset`, `limit`, `orderBy`; the first failure
    /// is returned.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a malformed offset or limit, a limit above the
    /// configured maximum, or a sort clause outside `sortable`.
    pub fn parse(
        filter_fields: T,
        params: &RawParams,
        limits: &PageLimits,
        sortable: &[&str],
    ) -> Result<Self, ApiError> {
        let offset = limits.parse_offset(params.offset())?;
        let limit = limits.parse_limit(params.limit())?;
        let sort_criteria = parse_sort(params.order_by(), sortable)?;

        Ok(Self {
            filter_fields,
            offset,
            limit,
            sort_criteria,
            include_total: params.include_total(),
        })
    }

    /// Sparse entity holding the filter values
    pub fn filter_fields(&self) -> &T {
        &self.filter_fields
    }

    /// Number of items to skip
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Maximum number of items to return
    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Ordered sort terms; empty means backend default order
    pub fn sort_criteria(&self) -> &[SortTerm] {
        &self.sort_criteria
    }

    /// Whether the caller asked for the total match count
    pub fn include_total(&self) -> bool {
        self.include_total
    }

    /// Request for a count without any items (`limit=0&totalResults=true`)
    pub fn is_count_only(&self) -> bool {
        self.limit == 0 && self.include_total
    }
}
