//! Paged list endpoints through the full router

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, get, StubBackend};
use sr_create_service::api::ApiErrorKind;
use sr_create_service::backend::BackendError;

fn one_csi() -> serde_json::Value {
    json!({ "items": [{ "csiNumber": "1001", "csiName": "Acme Corp" }] })
}

#[tokio::test]
async fn csis_returns_page_and_forwards_filter_verbatim() {
    let stub = Arc::new(StubBackend::new().reply("getCsis", one_csi()));

    let (status, body) = get(app(&stub), "/csis?csiName=Acme*&offset=0&limit=10").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["csiNumber"], "1001");
    assert!(body.get("totalResults").is_none());

    let (operation, request) = stub.only_call();
    assert_eq!(operation, "getCsis");
    assert_eq!(request["filterFields"], json!({ "csiName": "Acme*" }));
    assert_eq!(request["offset"], 0);
    assert_eq!(request["limit"], 10);
    assert_eq!(request["sortCriteria"], json!([]));
    assert_eq!(request["totalResults"], false);
}

#[tokio::test]
async fn csis_without_any_search_field_is_rejected_before_backend() {
    let stub = Arc::new(StubBackend::new().reply("getCsis", one_csi()));

    let (status, body) = get(app(&stub), "/csis").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_ARGUMENT");
    assert_eq!(
        body["error"],
        "At least one of csiNumber, csiName, accountNumber, accountName, country, contactEmail must be specified"
    );
    assert_eq!(body["resource"], "csis");
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn empty_search_value_counts_as_missing() {
    let stub = Arc::new(StubBackend::new());

    let (status, _) = get(app(&stub), "/csis?csiName=&supportLevel=Gold").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn default_paging_applies_when_absent() {
    let stub = Arc::new(StubBackend::new().reply("getCsis", one_csi()));

    let (status, _) = get(app(&stub), "/csis?country=US").await;

    assert_eq!(status, StatusCode::OK);
    let (_, request) = stub.only_call();
    assert_eq!(request["offset"], 0);
    assert_eq!(request["limit"], 25);
}

#[tokio::test]
async fn invalid_offset_and_limit_are_rejected_before_backend() {
    for query in [
        "offset=-1",
        "offset=abc",
        "limit=-5",
        "limit=501",
        "limit=ten",
    ] {
        let stub = Arc::new(StubBackend::new().reply("getCsis", one_csi()));
        let (status, body) = get(app(&stub), &format!("/csis?country=US&{query}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "query {query}");
        assert_eq!(body["code"], "INVALID_ARGUMENT", "query {query}");
        assert!(stub.calls().is_empty(), "query {query}");
    }
}

#[tokio::test]
async fn limit_at_maximum_is_accepted() {
    let stub = Arc::new(StubBackend::new().reply("getCsis", one_csi()));

    let (status, _) = get(app(&stub), "/csis?country=US&limit=500").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stub.only_call().1["limit"], 500);
}

#[tokio::test]
async fn order_by_is_forwarded_in_order() {
    let stub = Arc::new(StubBackend::new().reply("getCsis", one_csi()));

    let (status, _) = get(
        app(&stub),
        "/csis?country=US&orderBy=csiName:asc,supportLevel:DESC",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stub.only_call().1["sortCriteria"],
        json!([
            { "field": "csiName", "direction": "asc" },
            { "field": "supportLevel", "direction": "desc" }
        ])
    );
}

#[tokio::test]
async fn order_by_outside_allow_list_is_rejected() {
    let stub = Arc::new(StubBackend::new().reply("getCsis", one_csi()));

    let (status, body) = get(app(&stub), "/csis?country=US&orderBy=secretField:asc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("secretField"));
    assert!(stub.calls().is_empty());
}

#[tokio::test]
async fn total_is_returned_only_when_requested() {
    let page = json!({ "items": [{ "csiNumber": "1" }], "totalResults": 40 });

    let stub = Arc::new(StubBackend::new().reply("getCsis", page.clone()));
    let (status, body) = get(app(&stub), "/csis?country=US&totalResults=TRUE").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalResults"], 40);
    assert_eq!(stub.only_call().1["totalResults"], true);

    let stub = Arc::new(StubBackend::new().reply("getCsis", page));
    let (status, body) = get(app(&stub), "/csis?country=US&totalResults=yes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.get("totalResults").is_none());
    assert_eq!(stub.only_call().1["totalResults"], false);
}

#[tokio::test]
async fn count_only_request_returns_total_without_items() {
    let stub = Arc::new(
        StubBackend::new().reply("getCsis", json!({ "items": [], "totalResults": 17 })),
    );

    let (status, body) = get(app(&stub), "/csis?country=US&limit=0&totalResults=true").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "items": [], "totalResults": 17 }));
}

#[tokio::test]
async fn null_and_empty_results_are_no_data() {
    let stub = Arc::new(StubBackend::new());
    let (status, body) = get(app(&stub), "/csis?country=US").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NO_DATA");
    assert_eq!(body["error"], "No csis returned");

    let stub = Arc::new(StubBackend::new().reply("getCsis", json!({ "items": [] })));
    let (status, body) = get(app(&stub), "/csis?country=US").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NO_DATA");
}

#[tokio::test]
async fn business_fault_keeps_kind_and_message() {
    let stub = Arc::new(StubBackend::new().fail(
        "getCsis",
        BackendError::business(ApiErrorKind::BusinessRule, "CSI 1001 is expired"),
    ));

    let (status, body) = get(app(&stub), "/csis?csiNumber=1001").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "BUSINESS_RULE");
    assert_eq!(body["error"], "CSI 1001 is expired");
}

#[tokio::test]
async fn unavailable_backend_is_503() {
    let stub = Arc::new(StubBackend::new().fail(
        "getCsis",
        BackendError::Unavailable("connection refused".to_string()),
    ));

    let (status, body) = get(app(&stub), "/csis?csiNumber=1001").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "UNAVAILABLE");
    assert_eq!(body["error"], "connection refused");
}

#[tokio::test]
async fn unexpected_fault_becomes_internal_error_with_message() {
    let stub = Arc::new(StubBackend::new().fail(
        "getCsis",
        BackendError::Unexpected("index out of range".to_string()),
    ));

    let (status, body) = get(app(&stub), "/csis?csiNumber=1001").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["error"], "index out of range");
    assert_eq!(body["operation"], "list");
}

#[tokio::test]
async fn addresses_require_every_mandatory_field() {
    let stub = Arc::new(StubBackend::new().reply(
        "getAddresses",
        json!({ "items": [{ "addressLine1": "1 Main St", "city": "Austin" }] }),
    ));

    let (status, body) = get(app(&stub), "/addresses?csiNumber=1001").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "All of csiNumber, country must be specified");
    assert!(stub.calls().is_empty());

    let (status, body) = get(app(&stub), "/addresses?csiNumber=1001&country=US&orderBy=city").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["addressLine1"], "1 Main St");
    let (operation, request) = stub.only_call();
    assert_eq!(operation, "getAddresses");
    assert_eq!(request["filterFields"], json!({ "csiNumber": "1001", "country": "US" }));
}

#[tokio::test]
async fn accounts_accept_party_number_alone() {
    let stub = Arc::new(StubBackend::new().reply(
        "getAccounts",
        json!({ "items": [{ "accountId": "A1", "partyNumber": "P-77" }] }),
    ));

    let (status, body) = get(app(&stub), "/accounts?partyNumber=P-77&orderBy=city:desc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["accountId"], "A1");
    assert_eq!(
        stub.only_call().1["sortCriteria"],
        json!([{ "field": "city", "direction": "desc" }])
    );
}

#[tokio::test]
async fn handling_instructions_need_csi_number() {
    let stub = Arc::new(StubBackend::new().reply(
        "getHandlingInstructions",
        json!({ "items": [{ "instructionId": "H1", "category": "Escalation" }] }),
    ));

    let (status, _) = get(app(&stub), "/handlingInstructions?productId=P1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(app(&stub), "/handlingInstructions?csiNumber=1001").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["items"][0]["category"], "Escalation");
}

#[tokio::test]
async fn templates_sort_fields_are_endpoint_specific() {
    let stub = Arc::new(StubBackend::new().reply(
        "getTemplates",
        json!({ "items": [{ "templateId": "T1" }] }),
    ));

    let (status, _) = get(app(&stub), "/templates?productId=P1&orderBy=csiName").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(stub.calls().is_empty());

    let (status, _) = get(app(&stub), "/templates?productId=P1&orderBy=templateName").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn health_probes_sit_outside_base_path() {
    let stub = Arc::new(StubBackend::new());
    let response = common::send(
        app(&stub),
        axum::http::Method::GET,
        "/health",
        None,
    )
    .await;
    let (status, body) = common::json_of(response).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "sr-create-service");

    let response = common::send(app(&stub), axum::http::Method::GET, "/ready", None).await;
    let (status, body) = common::json_of(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["dependencies"]["backend"]["healthy"], true);
}
