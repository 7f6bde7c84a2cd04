//! Router assembly
//!
//! Health probes sit at the root; the API is mounted under
//! `service.base_path` (`/1.0/ServiceRequests/srCreate` by default).

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers::{
    accounts, addresses, cmdb, csis, handling_instructions, service_requests, templates,
};
use crate::health;
use crate::state::AppState;

/// API routes, relative to the base path
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/csis", get(csis::list_csis))
        .route("/accounts", get(accounts::list_accounts))
        .route("/accounts/{accountId}/info", get(accounts::get_account_info))
        .route("/addresses", get(addresses::list_addresses))
        .route(
            "/handlingInstructions",
            get(handling_instructions::list_handling_instructions),
        )
        .route("/templates", get(templates::list_templates))
        .route("/cmdbConfigs/{configKey}", get(cmdb::get_cmdb_config))
        .route(
            "/serviceRequests",
            post(service_requests::create_service_request),
        )
        .route(
            "/serviceRequests/{srNumber}/cmdbConfigs/{configKey}",
            post(service_requests::associate_cmdb_config),
        )
        .route(
            "/serviceRequests/{srNumber}/notes",
            post(service_requests::insert_note),
        )
}

/// Complete application router with state attached
pub fn router(state: AppState) -> Router {
    let base_path = state.config().service.base_path.trim_end_matches('/');

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::readiness));

    let app = if base_path.is_empty() {
        app.merge(api_routes())
    } else {
        app.nest(base_path, api_routes())
    };

    app.with_state(state)
}
