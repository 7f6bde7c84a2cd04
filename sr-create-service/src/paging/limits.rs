//! Offset and limit parsing
//!
//! Raw query tokens are parsed exactly as received: an absent or empty token
//! takes the default, anything other than plain ASCII digits is rejected.
//!
//! # Example
//!
//! ```rust
//! use sr_create_service::paging::PageLimits;
//!
//! let limits = PageLimits::new(25, 500);
//! assert_eq!(limits.parse_offset(None).unwrap(), 0);
//! assert_eq!(limits.parse_limit(Some("")).unwrap(), 25);
//! assert_eq!(limits.parse_limit(Some("0")).unwrap(), 0);
//! assert!(limits.parse_limit(Some("501")).is_err());
//! ```

use crate::api::ApiError;

/// Default number of items per page
pub const DEFAULT_LIMIT: u64 = 25;

/// Maximum allowed items per page
pub const MAX_LIMIT: u64 = 500;

/// Default page size and upper bound applied to `limit`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    default_limit: u64,
    max_limit: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT, MAX_LIMIT)
    }
}

impl PageLimits {
    /// Create new bounds
    ///
    /// `default_limit` must not exceed `max_limit`; configuration loading
    /// rejects such a pair before it gets here.
    #[must_use]
    pub const fn new(default_limit: u64, max_limit: u64) -> Self {
        debug_assert!(
            default_limit <= max_limit,
            "default_limit must not exceed max_limit"
        );
        Self {
            default_limit,
            max_limit,
        }
    }

    /// Page size used when `limit` is absent or empty
    #[must_use]
    pub const fn default_limit(&self) -> u64 {
        self.default_limit
    }

    /// Largest accepted `limit`
    #[must_use]
    pub const fn max_limit(&self) -> u64 {
        self.max_limit
    }

    /// Parse the `offset` query token
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the token is non-numeric or negative.
    pub fn parse_offset(&self, raw: Option<&str>) -> Result<u64, ApiError> {
        match non_empty(raw) {
            None => Ok(0),
            Some(token) => parse_count(token).ok_or_else(|| {
                ApiError::invalid_argument(format!(
                    "offset must be a non-negative integer, got '{}'",
                    token
                ))
            }),
        }
    }

    /// Parse the `limit` query token
    ///
    /// `0` is accepted and means "no items", which callers pair with
    /// `totalResults=true` to fetch only a count.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the token is non-numeric, negative or above
    /// the configured maximum.
    pub fn parse_limit(&self, raw: Option<&str>) -> Result<u64, ApiError> {
        let Some(token) = non_empty(raw) else {
            return Ok(self.default_limit);
        };

        let limit = parse_count(token).ok_or_else(|| {
            ApiError::invalid_argument(format!(
                "limit must be a non-negative integer, got '{}'",
                token
            ))
        })?;

        if limit > self.max_limit {
            return Err(ApiError::invalid_argument(format!(
                "limit must not exceed {}, got {}",
                self.max_limit, limit
            )));
        }

        Ok(limit)
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.is_empty())
}

/// Digits only; `u64::from_str` would also accept a leading `+`
fn parse_count(token: &str) -> Option<u64> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
