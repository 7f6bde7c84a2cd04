//! Paged filter/result protocol
//!
//! List requests are turned into a [`PagedFilter`] (filter values, page
//! window, sort clause, total-count flag) and answered with a
//! [`PagedResult`].

pub mod filter;
pub mod limits;
pub mod mandatory;
pub mod params;
pub mod result;
pub mod sort;

pub use filter::PagedFilter;
pub use limits::{PageLimits, DEFAULT_LIMIT, MAX_LIMIT};
pub use mandatory::MandatoryParams;
pub use params::{parse_include_total, RawParams};
pub use result::PagedResult;
pub use sort::{parse_sort, SortDirection, SortTerm};
