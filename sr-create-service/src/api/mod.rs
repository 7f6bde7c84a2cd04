//! HTTP API surface
//!
//! - [`endpoints`]: list resource definitions (sortable fields, mandatory parameters)
//! - [`dispatch`]: validation and backend outcome mapping shared by all handlers
//! - [`handlers`]: axum handlers, one module per resource
//! - [`error`]: the [`ApiError`] taxonomy and its HTTP rendering

pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod handlers;

pub use endpoints::ListEndpoint;
pub use error::{ApiError, ApiErrorKind, ApiErrorResponse, ApiOperation};
