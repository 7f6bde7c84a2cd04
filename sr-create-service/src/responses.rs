//! Success response types beyond plain `Json`
//!
//! List endpoints answer with [`PagedResult`](crate::paging::PagedResult),
//! lookups with `Json<T>`, and commands with [`Created`].

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// HTTP 201 Created response
///
/// Optionally carries a `Location` header pointing to the new resource.
///
/// # Example
///
/// ```rust
/// use axum::response::IntoResponse;
/// use sr_create_service::responses::Created;
///
/// let response = Created::new(serde_json::json!({ "srNumber": "3-1" }))
///     .with_location("/1.0/ServiceRequests/srCreate/serviceRequests/3-1")
///     .into_response();
/// assert_eq!(response.status().as_u16(), 201);
/// ```
#[derive(Debug)]
pub struct Created<T> {
    data: T,
    location: Option<String>,
}

impl<T> Created<T> {
    /// Create a new 201 Created response
    pub fn new(data: T) -> Self {
        Self {
            data,
            location: None,
        }
    }

    /// Add a Location header pointing to the created resource
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::CREATED, Json(&self.data)).into_response();

        // Identifiers with characters invalid in a header just lose the Location
        if let Some(location) = self.location {
            if let Ok(header_value) = HeaderValue::from_str(&location) {
                response.headers_mut().insert(header::LOCATION, header_value);
            }
        }

        response
    }
}
