//! Request tracking middleware
//!
//! Request ID generation and propagation, plus masking of credentials in
//! request logs.

use http::HeaderName;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    sensitive_headers::SetSensitiveRequestHeadersLayer,
};

use crate::ids::MakeRequestIdentifier;

/// Sensitive headers that should be masked in logs
pub const SENSITIVE_HEADERS: &[&str] = &[
    "authorization",
    "cookie",
    "set-cookie",
    "x-api-key",
    "x-auth-token",
];

/// Create a request ID layer that stamps `x-request-id` on incoming requests
///
/// An id already supplied by the caller is kept.
pub fn request_id_layer() -> SetRequestIdLayer<MakeRequestIdentifier> {
    SetRequestIdLayer::x_request_id(MakeRequestIdentifier)
}

/// Copy `x-request-id` from the request onto the response
pub fn request_id_propagation_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}

/// Create a sensitive headers layer
pub fn sensitive_headers_layer() -> SetSensitiveRequestHeadersLayer {
    let headers = SENSITIVE_HEADERS
        .iter()
        .map(|&h| HeaderName::from_static(h))
        .collect::<Vec<_>>();

    SetSensitiveRequestHeadersLayer::new(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sensitive_headers_are_lowercase() {
        for header in SENSITIVE_HEADERS {
            assert_eq!(*header, header.to_lowercase());
            assert!(header.parse::<HeaderName>().is_ok());
        }
        assert!(SENSITIVE_HEADERS.contains(&"authorization"));
    }
}
