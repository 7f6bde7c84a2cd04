//! `GET /csis`

use axum::extract::{rejection::QueryRejection, Query, State};

use crate::api::dispatch::{query_params, run_list};
use crate::api::endpoints::CSIS;
use crate::api::ApiError;
use crate::models::Csi;
use crate::paging::{PagedResult, RawParams};
use crate::state::AppState;

/// Search CSIs by number, name, account, country or contact email
pub async fn list_csis(
    State(state): State<AppState>,
    query: Result<Query<RawParams>, QueryRejection>,
) -> Result<PagedResult<Csi>, ApiError> {
    let params = query_params(CSIS.resource, query)?;
    run_list(&CSIS, &params, state.limits(), Csi::from_params, |filter| {
        state.backend().get_csis(filter)
    })
    .await
}
