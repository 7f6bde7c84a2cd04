//! Sort criteria parsing for list operations
//!
//! The `orderBy` grammar is a comma-separated list of terms, each either
//! `field` or `field:direction`, where direction is `asc` or `desc`
//! (case-insensitive, default `asc`). Term order is the sort precedence.
//!
//! # Example
//!
//! ```rust
//! use sr_create_service::paging::{parse_sort, SortDirection, SortTerm};
//!
//! let terms = parse_sort(Some("name:asc,rank:DESC"), &["name", "rank"]).unwrap();
//! assert_eq!(
//!     terms,
//!     vec![
//!         SortTerm::new("name", SortDirection::Ascending),
//!         SortTerm::new("rank", SortDirection::Descending),
//!     ]
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Direction for ordering results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Sort in ascending order (A-Z, 0-9)
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Sort in descending order (Z-A, 9-0)
    #[serde(rename = "desc")]
    Descending,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}

impl SortDirection {
    /// Parse a direction token, ignoring ASCII case
    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("asc") {
            Some(Self::Ascending)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Self::Descending)
        } else {
            None
        }
    }
}

/// One `(field, direction)` pair of a sort clause
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortTerm {
    /// Field name, as exposed by the endpoint
    pub field: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortTerm {
    /// Create a new sort term
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

impl fmt::Display for SortTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// Parse an `orderBy` value against an endpoint's sortable fields
///
/// Absent or empty input yields an empty sequence, leaving the backend's
/// default order in effect. Terms are neither reordered nor deduplicated.
///
/// # Errors
///
/// `InvalidArgument` for an empty term, a field that is not an identifier,
/// an unknown direction token, or a field outside `allowed`.
pub fn parse_sort(raw: Option<&str>, allowed: &[&str]) -> Result<Vec<SortTerm>, ApiError> {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(|term| parse_term(term, allowed))
        .collect()
}

fn parse_term(term: &str, allowed: &[&str]) -> Result<SortTerm, ApiError> {
    if term.is_empty() {
        return Err(ApiError::invalid_argument(
            "orderBy contains an empty sort term",
        ));
    }

    let mut parts = term.split(':');
    let field = parts.next().unwrap_or_default();
    let direction_token = parts.next();
    if parts.next().is_some() {
        return Err(ApiError::invalid_argument(format!(
            "orderBy term '{}' must be 'field' or 'field:asc|desc'",
            term
        )));
    }

    if !is_identifier(field) {
        return Err(ApiError::invalid_argument(format!(
            "orderBy field '{}' is not a valid field name",
            field
        )));
    }

    let direction = match direction_token {
        None => SortDirection::default(),
        Some(token) => SortDirection::from_token(token).ok_or_else(|| {
            ApiError::invalid_argument(format!(
                "orderBy direction '{}' for field '{}' must be asc or desc",
                token, field
            ))
        })?,
    };

    if !allowed.contains(&field) {
        return Err(ApiError::invalid_argument(format!(
            "orderBy field '{}' is not sortable; allowed fields: {}",
            field,
            allowed.join(", ")
        )));
    }

    Ok(SortTerm::new(field, direction))
}

fn is_identifier(field: &str) -> bool {
    let mut chars = field.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
