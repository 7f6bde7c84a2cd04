//! Entity-agnostic request dispatch
//!
//! Every endpoint follows the same sequence: validate the input, call the
//! backend exactly once, then map the outcome. The mapping is shared:
//!
//! - business and availability faults pass through with their own kind and
//!   message,
//! - unexpected faults are logged and become `InternalError`,
//! - a missing or empty answer becomes `NoData`.

use std::future::Future;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    extract::Query,
    Json,
};

use crate::backend::{BackendError, BackendResult};
use crate::paging::{PageLimits, PagedFilter, PagedResult, RawParams};

use super::endpoints::ListEndpoint;
use super::error::{ApiError, ApiErrorKind, ApiOperation};

/// Run a paged list request against the backend
///
/// Validation order is: mandatory parameters, `offset`, `limit`, `orderBy`.
/// Nothing reaches the backend unless all of them pass.
///
/// An absent result or a page without items is `NoData`, except for a
/// count-only request (`limit=0&totalResults=true`) answered with a total.
/// A total the caller did not ask for is dropped.
///
/// # Errors
///
/// `InvalidArgument` for rejected input, `NoData` for an empty answer, and
/// the mapped backend fault otherwise.
pub async fn run_list<T, Fut>(
    endpoint: &ListEndpoint,
    params: &RawParams,
    limits: &PageLimits,
    filter_fields: impl FnOnce(&RawParams) -> T,
    call: impl FnOnce(PagedFilter<T>) -> Fut,
) -> Result<PagedResult<T>, ApiError>
where
    Fut: Future<Output = BackendResult<Option<PagedResult<T>>>>,
{
    let resource = endpoint.resource;

    endpoint
        .mandatory
        .check(params)
        .map_err(|e| e.with_resource(resource))?;

    let filter = PagedFilter::parse(filter_fields(params), params, limits, endpoint.sortable)
        .map_err(|e| e.with_resource(resource))?;

    let include_total = filter.include_total();
    let count_only = filter.is_count_only();

    tracing::debug!(
        resource,
        offset = filter.offset(),
        limit = filter.limit(),
        sort_terms = filter.sort_criteria().len(),
        include_total,
        "Dispatching list request"
    );

    let outcome = call(filter).await;

    let Some(page) = settle(ApiOperation::List, resource, outcome)? else {
        return Err(ApiError::no_data(resource, endpoint.no_data_message()));
    };

    let page = if include_total {
        page
    } else {
        page.without_total()
    };

    if page.is_empty() && !(count_only && page.total_results.is_some()) {
        return Err(ApiError::no_data(resource, endpoint.no_data_message()));
    }

    Ok(page)
}

/// Reject an empty path identifier before any backend call
///
/// # Errors
///
/// `InvalidArgument` naming the parameter.
pub fn require_identifier(
    operation: ApiOperation,
    resource: &str,
    name: &str,
    value: &str,
) -> Result<(), ApiError> {
    if value.is_empty() {
        return Err(ApiError::invalid_argument(format!("{} must be specified", name))
            .with_operation(operation)
            .with_resource(resource));
    }
    Ok(())
}

/// Map the outcome of a single-entity lookup
///
/// # Errors
///
/// `NoData` when the backend found nothing, the mapped fault otherwise.
pub fn lookup_outcome<T>(
    resource: &str,
    outcome: BackendResult<Option<T>>,
) -> Result<T, ApiError> {
    settle(ApiOperation::Get, resource, outcome)?.ok_or_else(|| {
        ApiError::no_data(resource, format!("No {} returned", resource))
            .with_operation(ApiOperation::Get)
    })
}

/// Map the outcome of a command that returns an identifier
///
/// `identifier` extracts the id the caller needs; a missing or empty id is
/// `NoData` even though the backend reported success.
///
/// # Errors
///
/// `NoData` when no identifier came back, the mapped fault otherwise.
pub fn command_outcome<R>(
    resource: &str,
    outcome: BackendResult<Option<R>>,
    identifier: impl Fn(&R) -> Option<&str>,
) -> Result<R, ApiError> {
    let created = settle(ApiOperation::Create, resource, outcome)?
        .filter(|r| identifier(r).is_some_and(|id| !id.is_empty()));

    created.ok_or_else(|| {
        ApiError::no_data(resource, format!("No {} identifier returned", resource))
            .with_operation(ApiOperation::Create)
    })
}

/// Map the outcome of a command without a result
///
/// # Errors
///
/// The mapped backend fault.
pub fn associate_outcome(resource: &str, outcome: BackendResult<()>) -> Result<(), ApiError> {
    outcome.map_err(|e| backend_failure(ApiOperation::Associate, resource, e))
}

/// Unwrap a JSON request body, reporting a malformed one as `InvalidArgument`
///
/// # Errors
///
/// `InvalidArgument` carrying the extractor's explanation.
pub fn json_body<T>(
    operation: ApiOperation,
    resource: &str,
    body: Result<Json<T>, JsonRejection>,
) -> Result<T, ApiError> {
    body.map(|Json(value)| value).map_err(|rejection| {
        ApiError::invalid_argument(rejection.body_text())
            .with_operation(operation)
            .with_resource(resource)
    })
}

/// Unwrap a list query string, reporting an undecodable one as `InvalidArgument`
///
/// # Errors
///
/// `InvalidArgument` carrying the extractor's explanation.
pub fn query_params(
    resource: &str,
    query: Result<Query<RawParams>, QueryRejection>,
) -> Result<RawParams, ApiError> {
    query
        .map(|Query(params)| params)
        .map_err(|rejection| {
            ApiError::invalid_argument(rejection.body_text()).with_resource(resource)
        })
}

fn settle<T>(
    operation: ApiOperation,
    resource: &str,
    outcome: BackendResult<T>,
) -> Result<T, ApiError> {
    outcome.map_err(|e| backend_failure(operation, resource, e))
}

fn backend_failure(operation: ApiOperation, resource: &str, err: BackendError) -> ApiError {
    let error = match err {
        BackendError::Business { kind, message } => ApiError::new(operation, kind, message),
        BackendError::Unavailable(message) => {
            ApiError::new(operation, ApiErrorKind::Unavailable, message)
        }
        BackendError::Unexpected(message) => {
            tracing::error!(
                operation = %operation,
                resource,
                error = %message,
                "Unexpected backend fault"
            );
            ApiError::new(operation, ApiErrorKind::InternalError, message)
        }
    };
    error.with_resource(resource)
}
