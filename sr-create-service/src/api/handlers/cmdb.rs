//! `GET /cmdbConfigs/{configKey}`

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dispatch::{lookup_outcome, require_identifier};
use crate::api::{ApiError, ApiOperation};
use crate::models::CmdbConfig;
use crate::state::AppState;

pub(crate) const CMDB_CONFIGS: &str = "cmdbConfigs";

/// Fetch one CMDB configuration item
pub async fn get_cmdb_config(
    State(state): State<AppState>,
    Path(config_key): Path<String>,
) -> Result<Json<CmdbConfig>, ApiError> {
    require_identifier(ApiOperation::Get, CMDB_CONFIGS, "configKey", &config_key)?;
    let outcome = state.backend().get_cmdb_config(&config_key).await;
    lookup_outcome(CMDB_CONFIGS, outcome).map(Json)
}
