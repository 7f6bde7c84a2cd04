//! Service-level error types
//!
//! These errors cover startup concerns (configuration, sockets, HTTP client
//! construction). Request-scoped failures use [`crate::api::ApiError`].

use thiserror::Error;

/// Result type alias using the service error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for service startup and wiring
///
/// Large error variants are boxed to reduce stack size
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or extracted
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Configuration loaded but is inconsistent
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Backend HTTP client could not be built
    #[error("Backend client error: {0}")]
    BackendClient(Box<reqwest::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::BackendClient(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = Error::InvalidConfig("default_limit exceeds max_limit".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: default_limit exceeds max_limit"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }
}
