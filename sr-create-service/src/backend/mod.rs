//! Backend collaborator for the SR creation domain
//!
//! The HTTP layer never talks to a concrete backend. Handlers receive an
//! `Arc<dyn SrCreateBackend>` through [`AppState`](crate::state::AppState);
//! the binary wires in [`RemoteBackend`], tests wire in stubs.

pub mod remote;

use async_trait::async_trait;
use thiserror::Error;

use crate::api::ApiErrorKind;
use crate::models::{
    Account, AccountInfo, Address, CmdbConfig, CreatedServiceRequest, Csi, HandlingInstruction,
    NewNote, NewServiceRequest, ProductTemplate,
};
use crate::paging::{PagedFilter, PagedResult};

pub use remote::RemoteBackend;

/// Result type for backend operations
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Fault raised by a backend operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Domain rule violated; kind and message are shown to the caller as-is
    #[error("{message}")]
    Business {
        /// Error category reported to the caller
        kind: ApiErrorKind,
        /// Message reported to the caller
        message: String,
    },

    /// Backend unreachable or reporting a service-level fault
    #[error("{0}")]
    Unavailable(String),

    /// Anything the backend did not anticipate
    #[error("{0}")]
    Unexpected(String),
}

impl BackendError {
    /// Create a business fault
    pub fn business(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self::Business {
            kind,
            message: message.into(),
        }
    }
}

/// Operations offered by the SR creation domain service
///
/// List operations return `Ok(None)` when the backend had nothing to say;
/// the HTTP layer treats that the same as an empty page.
#[async_trait]
pub trait SrCreateBackend: Send + Sync {
    /// CSIs matching the filter
    async fn get_csis(&self, filter: PagedFilter<Csi>) -> BackendResult<Option<PagedResult<Csi>>>;

    /// Accounts matching the filter
    async fn get_accounts(
        &self,
        filter: PagedFilter<Account>,
    ) -> BackendResult<Option<PagedResult<Account>>>;

    /// Addresses registered under a CSI
    async fn get_addresses(
        &self,
        filter: PagedFilter<Address>,
    ) -> BackendResult<Option<PagedResult<Address>>>;

    /// Handling instructions for a CSI
    async fn get_handling_instructions(
        &self,
        filter: PagedFilter<HandlingInstruction>,
    ) -> BackendResult<Option<PagedResult<HandlingInstruction>>>;

    /// Product templates matching the filter
    async fn get_templates(
        &self,
        filter: PagedFilter<ProductTemplate>,
    ) -> BackendResult<Option<PagedResult<ProductTemplate>>>;

    /// Account summary by account id
    async fn get_account_info(&self, account_id: &str) -> BackendResult<Option<AccountInfo>>;

    /// CMDB configuration item by key
    async fn get_cmdb_config(&self, config_key: &str) -> BackendResult<Option<CmdbConfig>>;

    /// Create a service request, returning the identifiers assigned to it
    async fn create_service_request(
        &self,
        request: NewServiceRequest,
    ) -> BackendResult<Option<CreatedServiceRequest>>;

    /// Associate a CMDB configuration item with a service request
    async fn associate_cmdb_config(&self, sr_number: &str, config_key: &str) -> BackendResult<()>;

    /// Add a note to a service request, returning the note id
    async fn insert_note(&self, sr_number: &str, note: NewNote) -> BackendResult<Option<String>>;
}
