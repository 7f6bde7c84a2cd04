//! `GET /accounts` and `GET /accounts/{accountId}/info`

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};

use crate::api::dispatch::{lookup_outcome, query_params, require_identifier, run_list};
use crate::api::endpoints::ACCOUNTS;
use crate::api::{ApiError, ApiOperation};
use crate::models::{Account, AccountInfo};
use crate::paging::{PagedResult, RawParams};
use crate::state::AppState;

const ACCOUNT_INFO: &str = "accountInfo";

/// Search accounts by number, name or party number
pub async fn list_accounts(
    State(state): State<AppState>,
    query: Result<Query<RawParams>, QueryRejection>,
) -> Result<PagedResult<Account>, ApiError> {
    let params = query_params(ACCOUNTS.resource, query)?;
    run_list(
        &ACCOUNTS,
        &params,
        state.limits(),
        Account::from_params,
        |filter| state.backend().get_accounts(filter),
    )
    .await
}

/// Fetch the summary of one account
pub async fn get_account_info(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
) -> Result<Json<AccountInfo>, ApiError> {
    require_identifier(ApiOperation::Get, ACCOUNT_INFO, "accountId", &account_id)?;
    let outcome = state.backend().get_account_info(&account_id).await;
    lookup_outcome(ACCOUNT_INFO, outcome).map(Json)
}
