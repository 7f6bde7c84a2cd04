//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: SRCREATE_, nested keys separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/sr-create-service/config.toml
//! 4. System directory: /etc/sr-create-service/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};
use crate::paging::PageLimits;

const CONFIG_DIR_NAME: &str = "sr-create-service";
const ENV_PREFIX: &str = "SRCREATE_";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    pub service: ServiceConfig,

    /// Paging defaults and bounds shared by every list endpoint
    #[serde(default)]
    pub paging: PagingConfig,

    /// Backend collaborator connection
    pub backend: BackendConfig,

    /// Middleware configuration
    #[serde(default)]
    pub middleware: MiddlewareConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    pub name: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error) or a full EnvFilter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Environment (dev, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Path prefix under which the API routes are mounted
    #[serde(default = "default_base_path")]
    pub base_path: String,
}

/// Paging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingConfig {
    /// Page size used when a request omits `limit`
    #[serde(default = "default_page_limit")]
    pub default_limit: u64,

    /// Largest `limit` a request may ask for
    #[serde(default = "default_max_page_limit")]
    pub max_limit: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            default_limit: default_page_limit(),
            max_limit: default_max_page_limit(),
        }
    }
}

impl PagingConfig {
    /// Bounds used by the pagination parser
    pub fn limits(&self) -> PageLimits {
        PageLimits::new(self.default_limit, self.max_limit)
    }
}

/// Backend collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the SR creation domain service
    pub base_url: String,

    /// Per-call timeout in seconds
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Get the per-call timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Middleware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// Request body size limit in MB
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,

    /// CORS mode (permissive, restrictive, disabled)
    #[serde(default = "default_cors_mode")]
    pub cors_mode: String,
}

impl Default for MiddlewareConfig {
    fn default() -> Self {
        Self {
            body_limit_mb: default_body_limit_mb(),
            cors_mode: default_cors_mode(),
        }
    }
}

// Default value functions
fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_environment() -> String {
    "dev".to_string()
}

fn default_base_path() -> String {
    "/1.0/ServiceRequests/srCreate".to_string()
}

fn default_page_limit() -> u64 {
    25
}

fn default_max_page_limit() -> u64 {
    500
}

fn default_backend_url() -> String {
    "http://localhost:9080/srCreate".to_string()
}

fn default_backend_timeout() -> u64 {
    20
}

fn default_body_limit_mb() -> usize {
    2
}

fn default_cors_mode() -> String {
    "permissive".to_string()
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Environment variables (SRCREATE_ prefix) override all file-based configs,
    /// e.g. `SRCREATE_PAGING__MAX_LIMIT=200`.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        tracing::debug!("Searching for config files in order:");
        for path in &config_paths {
            tracing::debug!("  - {}", path.display());
        }

        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Lowest priority first so that higher priority files override
        for path in config_paths.iter().rev() {
            if path.exists() {
                tracing::info!("Loading configuration from: {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// Bypasses the search path. Environment variables still apply.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde defaults cannot express
    pub fn validate(&self) -> Result<()> {
        if self.paging.default_limit > self.paging.max_limit {
            return Err(Error::InvalidConfig(format!(
                "paging.default_limit ({}) exceeds paging.max_limit ({})",
                self.paging.default_limit, self.paging.max_limit
            )));
        }
        if !self.service.base_path.starts_with('/') {
            return Err(Error::InvalidConfig(format!(
                "service.base_path must start with '/', got '{}'",
                self.service.base_path
            )));
        }
        Ok(())
    }

    /// Config file locations, highest priority first
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(CONFIG_DIR_NAME);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(
            PathBuf::from("/etc")
                .join(CONFIG_DIR_NAME)
                .join("config.toml"),
        );

        paths
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                name: CONFIG_DIR_NAME.to_string(),
                port: default_port(),
                log_level: default_log_level(),
                timeout_secs: default_timeout(),
                environment: default_environment(),
                base_path: default_base_path(),
            },
            paging: PagingConfig::default(),
            backend: BackendConfig {
                base_url: default_backend_url(),
                timeout_secs: default_backend_timeout(),
            },
            middleware: MiddlewareConfig::default(),
        }
    }
}
