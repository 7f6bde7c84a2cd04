//! Request identifiers
//!
//! Request ids are `req_` followed by a hyphen-less UUIDv7, so ids sort by
//! creation time in logs.
//!
//! ```rust
//! use sr_create_service::ids::RequestId;
//!
//! let request_id = RequestId::new();
//! assert!(request_id.as_str().starts_with("req_"));
//! ```

use std::fmt;
use std::str::FromStr;

use http::Request;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};
use uuid::Uuid;

/// A request identifier for log correlation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID with a UUIDv7 (time-sortable).
    #[must_use]
    pub fn new() -> Self {
        Self(format!("{}_{}", Self::PREFIX, Uuid::now_v7().simple()))
    }

    /// Returns the request ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The UUID carried by this id
    #[must_use]
    pub fn uuid(&self) -> Option<Uuid> {
        self.0
            .strip_prefix(Self::PREFIX)
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|suffix| Uuid::parse_str(suffix).ok())
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when a string is not a request id
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid request id: {0}")]
pub struct InvalidRequestId(String);

impl FromStr for RequestId {
    type Err = InvalidRequestId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self(s.to_string());
        match id.uuid() {
            Some(_) => Ok(id),
            None => Err(InvalidRequestId(s.to_string())),
        }
    }
}

/// Request id generator for `tower_http::request_id::SetRequestIdLayer`
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestIdentifier;

impl MakeRequestId for MakeRequestIdentifier {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        let id = RequestId::new();
        let header_value = http::HeaderValue::from_str(id.as_str()).ok()?;
        Some(TowerRequestId::new(header_value))
    }
}
