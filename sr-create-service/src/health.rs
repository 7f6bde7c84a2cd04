//! Health check handlers

use std::collections::HashMap;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check (readiness probe)
///
/// The backend is called per request and never probed here; readiness only
/// reflects whether a backend endpoint is configured.
pub async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    let base_url = &state.config().backend.base_url;
    let backend_ready = !base_url.is_empty();

    let mut dependencies = HashMap::new();
    dependencies.insert(
        "backend".to_string(),
        DependencyStatus {
            healthy: backend_ready,
            message: Some(if backend_ready {
                format!("Configured at {}", base_url)
            } else {
                "No backend base_url configured".to_string()
            }),
        },
    );

    let status = if backend_ready {
        StatusCode::OK
    } else {
        tracing::warn!("Readiness check failed: backend not configured");
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ReadinessResponse {
        ready: backend_ready,
        service: state.config().service.name.clone(),
        dependencies,
    };

    (status, Json(response))
}
