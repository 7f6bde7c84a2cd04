//! API error types for endpoint operations
//!
//! Every failed request ends in an [`ApiError`], which carries a stable kind
//! code, a human-readable message and the operation/resource it happened in.
//! The `IntoResponse` impl maps the kind onto an HTTP status.
//!
//! # Example
//!
//! ```rust
//! use sr_create_service::api::{ApiError, ApiErrorKind};
//!
//! let error = ApiError::no_data("csis", "No csis returned");
//! assert!(matches!(error.kind, ApiErrorKind::NoData));
//! assert_eq!(error.kind.status_code().as_u16(), 404);
//! ```

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Operation being performed when the API error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiOperation {
    /// Paged, filtered list query
    List,
    /// Single entity lookup by key
    Get,
    /// Creating a new record
    Create,
    /// Linking two existing records
    Associate,
}

impl fmt::Display for ApiOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Get => write!(f, "get"),
            Self::Create => write!(f, "create"),
            Self::Associate => write!(f, "associate"),
        }
    }
}

/// Category of API error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorKind {
    /// Malformed, missing or contradictory input, detected before any backend call
    InvalidArgument,
    /// Request was well-formed but the backend had nothing to return
    NoData,
    /// Domain rule violated, as reported by the backend
    BusinessRule,
    /// Backend unreachable or declared a service-level fault
    Unavailable,
    /// Anything unanticipated
    InternalError,
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid_argument"),
            Self::NoData => write!(f, "no_data"),
            Self::BusinessRule => write!(f, "business_rule"),
            Self::Unavailable => write!(f, "unavailable"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

impl ApiErrorKind {
    /// Get the HTTP status code for this error kind
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument => StatusCode::BAD_REQUEST,
            Self::NoData => StatusCode::NOT_FOUND,
            Self::BusinessRule => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code string for this error kind
    #[must_use]
    pub fn error_code(&self) -> String {
        self.to_string().to_uppercase()
    }

    /// Whether the caller is at fault (4xx) rather than the service (5xx)
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument | Self::NoData | Self::BusinessRule
        )
    }
}

/// Structured API error with operation context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// The operation being performed when the error occurred
    pub operation: ApiOperation,
    /// The category of error
    pub kind: ApiErrorKind,
    /// Human-readable error message
    pub message: String,
    /// The resource involved (e.g., "csis", "serviceRequests")
    pub resource: Option<String>,
}

impl ApiError {
    /// Create a new API error
    pub fn new(operation: ApiOperation, kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            operation,
            kind,
            message: message.into(),
            resource: None,
        }
    }

    /// Create an invalid argument error
    ///
    /// # Example
    ///
    /// ```rust
    /// use sr_create_service::api::ApiError;
    ///
    /// let error = ApiError::invalid_argument("offset must be a non-negative integer");
    /// assert_eq!(error.kind.status_code().as_u16(), 400);
    /// ```
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ApiOperation::List, ApiErrorKind::InvalidArgument, message)
    }

    /// Create a "no data" error for a resource
    pub fn no_data(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ApiOperation::List, ApiErrorKind::NoData, message).with_resource(resource)
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiOperation::List, ApiErrorKind::InternalError, message)
    }

    /// Attach the resource name
    #[must_use]
    pub fn with_resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    /// Set the operation that caused the error
    #[must_use]
    pub fn with_operation(mut self, operation: ApiOperation) -> Self {
        self.operation = operation;
        self
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "API {} error during {}: {}",
            self.kind, self.operation, self.message
        )?;
        if let Some(ref resource) = self.resource {
            write!(f, " [{}]", resource)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Response body for API errors
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message
    pub error: String,
    /// Stable kind code, e.g. `NO_DATA`
    pub code: String,
    /// HTTP status code
    pub status: u16,
    /// Operation that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    /// Resource that failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.kind.status_code();
        let code = self.kind.error_code();

        if self.kind == ApiErrorKind::NoData {
            tracing::info!(
                operation = %self.operation,
                resource = ?self.resource,
                "{}", self.message
            );
        } else if self.kind.is_client_error() {
            tracing::warn!(
                operation = %self.operation,
                kind = %self.kind,
                resource = ?self.resource,
                "API error: {}", self.message
            );
        } else {
            tracing::error!(
                operation = %self.operation,
                kind = %self.kind,
                resource = ?self.resource,
                "API error: {}", self.message
            );
        }

        let response = ApiErrorResponse {
            error: self.message,
            code,
            status: status.as_u16(),
            operation: Some(self.operation.to_string()),
            resource: self.resource,
        };

        (status, Json(response)).into_response()
    }
}
