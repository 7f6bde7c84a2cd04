//! Application state management

use std::sync::Arc;

use crate::backend::{RemoteBackend, SrCreateBackend};
use crate::config::Config;
use crate::error::Result;
use crate::paging::PageLimits;

/// Application state shared across handlers
///
/// Immutable after construction; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    limits: PageLimits,
    backend: Arc<dyn SrCreateBackend>,
}

impl AppState {
    /// Create state around an explicit backend
    pub fn new(config: Config, backend: Arc<dyn SrCreateBackend>) -> Self {
        let limits = config.paging.limits();
        Self {
            config: Arc::new(config),
            limits,
            backend,
        }
    }

    /// Create state backed by the configured remote backend
    ///
    /// # Errors
    ///
    /// Returns an error if the backend HTTP client cannot be built.
    pub fn remote(config: Config) -> Result<Self> {
        let backend = RemoteBackend::new(&config.backend)?;
        tracing::info!(base_url = %backend.base_url(), "Using remote backend");
        Ok(Self::new(config, Arc::new(backend)))
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Page size bounds applied to list requests
    pub fn limits(&self) -> &PageLimits {
        &self.limits
    }

    /// Get the backend collaborator
    pub fn backend(&self) -> &dyn SrCreateBackend {
        self.backend.as_ref()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("limits", &self.limits)
            .finish_non_exhaustive()
    }
}
