//! Raw query parameters shared by list endpoints

use std::collections::HashMap;

use serde::Deserialize;

/// Query parameter carrying the sort clause
pub const ORDER_BY: &str = "orderBy";
/// Query parameter carrying the page offset
pub const OFFSET: &str = "offset";
/// Query parameter carrying the page size
pub const LIMIT: &str = "limit";
/// Query parameter toggling total-count inclusion
pub const TOTAL_RESULTS: &str = "totalResults";

/// Query string of a list request, kept exactly as received
///
/// Values are never trimmed. An empty value is treated the same as an
/// absent one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawParams(HashMap<String, String>);

impl RawParams {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, replacing any previous value
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Non-empty value of a parameter
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str).filter(|v| !v.is_empty())
    }

    /// Owned non-empty value, for populating filter fields
    #[must_use]
    pub fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }

    /// Whether a parameter is present with a non-empty value
    #[must_use]
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Raw `orderBy` token
    #[must_use]
    pub fn order_by(&self) -> Option<&str> {
        self.get(ORDER_BY)
    }

    /// Raw `offset` token
    #[must_use]
    pub fn offset(&self) -> Option<&str> {
        self.get(OFFSET)
    }

    /// Raw `limit` token
    #[must_use]
    pub fn limit(&self) -> Option<&str> {
        self.get(LIMIT)
    }

    /// `totalResults` flag: only the literal `true`, in any case, enables it
    #[must_use]
    pub fn include_total(&self) -> bool {
        parse_include_total(self.get(TOTAL_RESULTS))
    }
}

impl<K, V> FromIterator<(K, V)> for RawParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Interpret a raw `totalResults` token
#[must_use]
pub fn parse_include_total(raw: Option<&str>) -> bool {
    raw.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}
