//! # sr-create-service
//!
//! REST facade over the Service Request creation backend: paged lookups of
//! CSIs, accounts, addresses, handling instructions and product templates,
//! single lookups of account info and CMDB configuration, and the commands
//! that create a service request, attach CMDB items and add notes.
//!
//! Every list endpoint shares one contract:
//!
//! - filter values come straight from the query string,
//! - `offset`, `limit`, `orderBy` and `totalResults` are validated before the
//!   backend is called,
//! - the backend answer is wrapped in a [`PagedResult`](paging::PagedResult),
//!   and an empty answer is reported as `NO_DATA`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sr_create_service::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let state = AppState::remote(config.clone())?;
//!     let app = router(state);
//!
//!     Server::new(config).serve(app).await
//! }
//! ```

pub mod api;
pub mod backend;
pub mod config;
pub mod error;
pub mod health;
pub mod ids;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod paging;
pub mod responses;
pub mod routes;
pub mod server;
pub mod state;

/// Commonly used items
pub mod prelude {
    pub use crate::api::{ApiError, ApiErrorKind, ApiOperation};
    pub use crate::backend::{BackendError, BackendResult, RemoteBackend, SrCreateBackend};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::observability::{init_tracing, shutdown_tracing};
    pub use crate::paging::{PageLimits, PagedFilter, PagedResult, SortDirection, SortTerm};
    pub use crate::routes::router;
    pub use crate::server::Server;
    pub use crate::state::AppState;
}
