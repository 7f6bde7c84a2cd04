//! `GET /handlingInstructions`

use axum::extract::{rejection::QueryRejection, Query, State};

use crate::api::dispatch::{query_params, run_list};
use crate::api::endpoints::HANDLING_INSTRUCTIONS;
use crate::api::ApiError;
use crate::models::HandlingInstruction;
use crate::paging::{PagedResult, RawParams};
use crate::state::AppState;

/// List the handling instructions recorded for a CSI
pub async fn list_handling_instructions(
    State(state): State<AppState>,
    query: Result<Query<RawParams>, QueryRejection>,
) -> Result<PagedResult<HandlingInstruction>, ApiError> {
    let params = query_params(HANDLING_INSTRUCTIONS.resource, query)?;
    run_list(
        &HANDLING_INSTRUCTIONS,
        &params,
        state.limits(),
        HandlingInstruction::from_params,
        |filter| state.backend().get_handling_instructions(filter),
    )
    .await
}
