//! `GET /templates`

use axum::extract::{rejection::QueryRejection, Query, State};

use crate::api::dispatch::{query_params, run_list};
use crate::api::endpoints::TEMPLATES;
use crate::api::ApiError;
use crate::models::ProductTemplate;
use crate::paging::{PagedResult, RawParams};
use crate::state::AppState;

/// Search product templates by product or platform
pub async fn list_templates(
    State(state): State<AppState>,
    query: Result<Query<RawParams>, QueryRejection>,
) -> Result<PagedResult<ProductTemplate>, ApiError> {
    let params = query_params(TEMPLATES.resource, query)?;
    run_list(
        &TEMPLATES,
        &params,
        state.limits(),
        ProductTemplate::from_params,
        |filter| state.backend().get_templates(filter),
    )
    .await
}
