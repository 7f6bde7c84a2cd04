//! Shared fixtures for router-level tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower::ServiceExt;

use sr_create_service::backend::{BackendError, BackendResult, SrCreateBackend};
use sr_create_service::config::Config;
use sr_create_service::models::{
    Account, AccountInfo, Address, CmdbConfig, CreatedServiceRequest, Csi, HandlingInstruction,
    NewNote, NewServiceRequest, ProductTemplate,
};
use sr_create_service::paging::{PagedFilter, PagedResult};
use sr_create_service::routes::router;
use sr_create_service::state::AppState;

pub const BASE: &str = "/1.0/ServiceRequests/srCreate";

/// Backend double that answers from canned JSON and records every call
///
/// Operations without a canned answer return `Ok(None)`.
#[derive(Default)]
pub struct StubBackend {
    replies: Mutex<HashMap<&'static str, BackendResult<Value>>>,
    panics: Mutex<Vec<&'static str>>,
    calls: Mutex<Vec<(String, Value)>>,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `operation` with `value` (JSON `null` means `None`)
    pub fn reply(self, operation: &'static str, value: Value) -> Self {
        self.replies.lock().unwrap().insert(operation, Ok(value));
        self
    }

    /// Fail `operation` with `error`
    pub fn fail(self, operation: &'static str, error: BackendError) -> Self {
        self.replies.lock().unwrap().insert(operation, Err(error));
        self
    }

    /// Panic inside `operation` instead of answering
    pub fn panic_on(self, operation: &'static str) -> Self {
        self.panics.lock().unwrap().push(operation);
        self
    }

    /// Recorded `(operation, request)` pairs, oldest first
    pub fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded request, asserting there was exactly one call
    pub fn only_call(&self) -> (String, Value) {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one backend call: {calls:?}");
        calls.into_iter().next().unwrap()
    }

    fn answer<R: DeserializeOwned>(
        &self,
        operation: &str,
        request: Value,
    ) -> BackendResult<Option<R>> {
        self.calls
            .lock()
            .unwrap()
            .push((operation.to_string(), request));

        let explode = self.panics.lock().unwrap().iter().any(|p| *p == operation);
        if explode {
            panic!("{operation} blew up");
        }

        match self.replies.lock().unwrap().get(operation).cloned() {
            None => Ok(None),
            Some(Err(error)) => Err(error),
            Some(Ok(value)) => {
                Ok(serde_json::from_value(value).expect("canned reply matches type"))
            }
        }
    }
}

#[async_trait]
impl SrCreateBackend for StubBackend {
    async fn get_csis(&self, filter: PagedFilter<Csi>) -> BackendResult<Option<PagedResult<Csi>>> {
        self.answer("getCsis", json!(filter))
    }

    async fn get_accounts(
        &self,
        filter: PagedFilter<Account>,
    ) -> BackendResult<Option<PagedResult<Account>>> {
        self.answer("getAccounts", json!(filter))
    }

    async fn get_addresses(
        &self,
        filter: PagedFilter<Address>,
    ) -> BackendResult<Option<PagedResult<Address>>> {
        self.answer("getAddresses", json!(filter))
    }

    async fn get_handling_instructions(
        &self,
        filter: PagedFilter<HandlingInstruction>,
    ) -> BackendResult<Option<PagedResult<HandlingInstruction>>> {
        self.answer("getHandlingInstructions", json!(filter))
    }

    async fn get_templates(
        &self,
        filter: PagedFilter<ProductTemplate>,
    ) -> BackendResult<Option<PagedResult<ProductTemplate>>> {
        self.answer("getTemplates", json!(filter))
    }

    async fn get_account_info(&self, account_id: &str) -> BackendResult<Option<AccountInfo>> {
        self.answer("getAccountInfo", json!({ "accountId": account_id }))
    }

    async fn get_cmdb_config(&self, config_key: &str) -> BackendResult<Option<CmdbConfig>> {
        self.answer("getCmdbConfig", json!({ "configKey": config_key }))
    }

    async fn create_service_request(
        &self,
        request: NewServiceRequest,
    ) -> BackendResult<Option<CreatedServiceRequest>> {
        self.answer("createServiceRequest", json!(request))
    }

    async fn associate_cmdb_config(&self, sr_number: &str, config_key: &str) -> BackendResult<()> {
        self.answer::<Value>(
            "associateCmdbConfig",
            json!({ "srNumber": sr_number, "configKey": config_key }),
        )
        .map(|_| ())
    }

    async fn insert_note(&self, sr_number: &str, note: NewNote) -> BackendResult<Option<String>> {
        self.answer(
            "insertNote",
            json!({ "srNumber": sr_number, "note": note }),
        )
    }
}

/// Router over the default configuration and the given stub
pub fn app(stub: &Arc<StubBackend>) -> Router {
    app_with(Config::default(), stub)
}

/// Router over an explicit configuration and the given stub
pub fn app_with(config: Config, stub: &Arc<StubBackend>) -> Router {
    let backend: Arc<dyn SrCreateBackend> = stub.clone();
    router(AppState::new(config, backend))
}

/// Send a request and return the raw response
pub async fn send(app: Router, method: Method, uri: &str, body: Option<&str>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

/// Decode a response into its status and JSON body
pub async fn json_of(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// `GET {BASE}{path}`
pub async fn get(app: Router, path: &str) -> (StatusCode, Value) {
    json_of(send(app, Method::GET, &format!("{BASE}{path}"), None).await).await
}

/// `POST {BASE}{path}` with a JSON body
pub async fn post(app: Router, path: &str, body: &str) -> (StatusCode, Value) {
    json_of(send(app, Method::POST, &format!("{BASE}{path}"), Some(body)).await).await
}
