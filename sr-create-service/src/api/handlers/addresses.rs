//! `GET /addresses`

use axum::extract::{rejection::QueryRejection, Query, State};

use crate::api::dispatch::{query_params, run_list};
use crate::api::endpoints::ADDRESSES;
use crate::api::ApiError;
use crate::models::Address;
use crate::paging::{PagedResult, RawParams};
use crate::state::AppState;

/// List the addresses of a CSI in one country
pub async fn list_addresses(
    State(state): State<AppState>,
    query: Result<Query<RawParams>, QueryRejection>,
) -> Result<PagedResult<Address>, ApiError> {
    let params = query_params(ADDRESSES.resource, query)?;
    run_list(
        &ADDRESSES,
        &params,
        state.limits(),
        Address::from_params,
        |filter| state.backend().get_addresses(filter),
    )
    .await
}
