//! Service request commands
//!
//! - `POST /serviceRequests`
//! - `POST /serviceRequests/{srNumber}/cmdbConfigs/{configKey}`
//! - `POST /serviceRequests/{srNumber}/notes`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

use crate::api::dispatch::{associate_outcome, command_outcome, json_body, require_identifier};
use crate::api::{ApiError, ApiOperation};
use crate::models::{Association, CreatedNote, CreatedServiceRequest, NewNote, NewServiceRequest};
use crate::responses::Created;
use crate::state::AppState;

use super::cmdb::CMDB_CONFIGS;

const SERVICE_REQUESTS: &str = "serviceRequests";
const NOTES: &str = "notes";

/// Create a service request
///
/// The payload is forwarded as received; the response carries the
/// identifiers assigned by the backend and a `Location` for the new request.
pub async fn create_service_request(
    State(state): State<AppState>,
    body: Result<Json<NewServiceRequest>, JsonRejection>,
) -> Result<Created<CreatedServiceRequest>, ApiError> {
    let request = json_body(ApiOperation::Create, SERVICE_REQUESTS, body)?;

    let outcome = state.backend().create_service_request(request).await;
    let created = command_outcome(SERVICE_REQUESTS, outcome, CreatedServiceRequest::sr_number)?;

    let location = format!(
        "{}/{}/{}",
        state.config().service.base_path,
        SERVICE_REQUESTS,
        created.sr_number().unwrap_or_default()
    );
    tracing::info!(sr_number = ?created.sr_number, "Service request created");

    Ok(Created::new(created).with_location(location))
}

/// Associate a CMDB configuration item with a service request
pub async fn associate_cmdb_config(
    State(state): State<AppState>,
    Path((sr_number, config_key)): Path<(String, String)>,
) -> Result<Created<Association>, ApiError> {
    require_identifier(ApiOperation::Associate, CMDB_CONFIGS, "srNumber", &sr_number)?;
    require_identifier(ApiOperation::Associate, CMDB_CONFIGS, "configKey", &config_key)?;

    let outcome = state
        .backend()
        .associate_cmdb_config(&sr_number, &config_key)
        .await;
    associate_outcome(CMDB_CONFIGS, outcome)?;

    Ok(Created::new(Association {
        sr_number,
        config_key,
    }))
}

/// Add a note to a service request
pub async fn insert_note(
    State(state): State<AppState>,
    Path(sr_number): Path<String>,
    body: Result<Json<NewNote>, JsonRejection>,
) -> Result<Created<CreatedNote>, ApiError> {
    require_identifier(ApiOperation::Create, NOTES, "srNumber", &sr_number)?;
    let note = json_body(ApiOperation::Create, NOTES, body)?;

    let outcome = state.backend().insert_note(&sr_number, note).await;
    let note_id = command_outcome(NOTES, outcome, |id: &String| Some(id.as_str()))?;

    Ok(Created::new(CreatedNote { sr_number, note_id }))
}
