//! JSON-over-HTTP backend adapter
//!
//! Every operation is a `POST {base_url}/{operation}` carrying a JSON body.
//! Responses are interpreted as follows:
//!
//! | Response | Outcome |
//! |---|---|
//! | `204`, empty body or JSON `null` | `Ok(None)` |
//! | `404` to a query | `Ok(None)` |
//! | `404` to a command | [`BackendError::Business`] with kind `NO_DATA` |
//! | other `2xx` | decoded body |
//! | `4xx` with a `{ "kind", "message" }` body | [`BackendError::Business`] |
//! | `5xx`, connection failure, timeout | [`BackendError::Unavailable`] |
//! | anything else | [`BackendError::Unexpected`] |

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, de::IgnoredAny, Deserialize, Serialize};

use crate::api::ApiErrorKind;
use crate::config::BackendConfig;
use crate::error::Result;
use crate::models::{
    Account, AccountInfo, Address, Association, CmdbConfig, CreatedServiceRequest, Csi,
    HandlingInstruction, NewNote, NewServiceRequest, ProductTemplate,
};
use crate::paging::{PagedFilter, PagedResult};

use super::{BackendError, BackendResult, SrCreateBackend};

/// Fault body returned by the backend with a `4xx` status
#[derive(Debug, Deserialize)]
struct FaultBody {
    kind: ApiErrorKind,
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountKey<'a> {
    account_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigKey<'a> {
    config_key: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NoteRequest<'a> {
    sr_number: &'a str,
    #[serde(flatten)]
    note: NewNote,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteId {
    #[serde(default)]
    note_id: Option<String>,
}

/// How a `404` answer is read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NotFound {
    /// The query matched nothing
    Empty,
    /// The command's target does not exist
    Fault,
}

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct RemoteBackend {
    client: Client,
    base_url: String,
}

impl RemoteBackend {
    /// Build the HTTP client from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("sr-create-service/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL operations are posted under
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn query<B, R>(&self, operation: &str, body: &B) -> BackendResult<Option<R>>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.call(operation, body, NotFound::Empty).await
    }

    async fn command<B, R>(&self, operation: &str, body: &B) -> BackendResult<Option<R>>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        self.call(operation, body, NotFound::Fault).await
    }

    async fn call<B, R>(
        &self,
        operation: &str,
        body: &B,
        not_found: NotFound,
    ) -> BackendResult<Option<R>>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, operation);
        tracing::debug!(operation, url = %url, "Calling backend");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| transport_error(operation, &e))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| transport_error(operation, &e))?;

        decode_response(operation, status, &bytes, not_found)
    }
}

fn transport_error(operation: &str, err: &reqwest::Error) -> BackendError {
    if err.is_builder() || err.is_decode() {
        BackendError::Unexpected(format!("{}: {}", operation, err))
    } else {
        BackendError::Unavailable(format!("{}: {}", operation, err))
    }
}

fn decode_response<R>(
    operation: &str,
    status: StatusCode,
    bytes: &[u8],
    not_found: NotFound,
) -> BackendResult<Option<R>>
where
    R: DeserializeOwned,
{
    if status == StatusCode::NO_CONTENT
        || (status == StatusCode::NOT_FOUND && not_found == NotFound::Empty)
    {
        return Ok(None);
    }

    if status.is_success() {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        return serde_json::from_slice::<Option<R>>(bytes).map_err(|e| {
            BackendError::Unexpected(format!("{}: undecodable response body: {}", operation, e))
        });
    }

    if status.is_server_error() {
        return Err(BackendError::Unavailable(format!(
            "{}: backend responded with {}",
            operation, status
        )));
    }

    if status.is_client_error() {
        return match serde_json::from_slice::<FaultBody>(bytes) {
            Ok(fault) => Err(BackendError::Business {
                kind: fault.kind,
                message: fault.message,
            }),
            Err(_) if status == StatusCode::NOT_FOUND => Err(BackendError::business(
                ApiErrorKind::NoData,
                format!("{}: target not found", operation),
            )),
            Err(_) => Err(BackendError::Unexpected(format!(
                "{}: backend responded with {}",
                operation, status
            ))),
        };
    }

    Err(BackendError::Unexpected(format!(
        "{}: unexpected status {}",
        operation, status
    )))
}

#[async_trait]
impl SrCreateBackend for RemoteBackend {
    async fn get_csis(&self, filter: PagedFilter<Csi>) -> BackendResult<Option<PagedResult<Csi>>> {
        self.query("getCsis", &filter).await
    }

    async fn get_accounts(
        &self,
        filter: PagedFilter<Account>,
    ) -> BackendResult<Option<PagedResult<Account>>> {
        self.query("getAccounts", &filter).await
    }

    async fn get_addresses(
        &self,
        filter: PagedFilter<Address>,
    ) -> BackendResult<Option<PagedResult<Address>>> {
        self.query("getAddresses", &filter).await
    }

    async fn get_handling_instructions(
        &self,
        filter: PagedFilter<HandlingInstruction>,
    ) -> BackendResult<Option<PagedResult<HandlingInstruction>>> {
        self.query("getHandlingInstructions", &filter).await
    }

    async fn get_templates(
        &self,
        filter: PagedFilter<ProductTemplate>,
    ) -> BackendResult<Option<PagedResult<ProductTemplate>>> {
        self.query("getTemplates", &filter).await
    }

    async fn get_account_info(&self, account_id: &str) -> BackendResult<Option<AccountInfo>> {
        self.query("getAccountInfo", &AccountKey { account_id }).await
    }

    async fn get_cmdb_config(&self, config_key: &str) -> BackendResult<Option<CmdbConfig>> {
        self.query("getCmdbConfig", &ConfigKey { config_key }).await
    }

    async fn create_service_request(
        &self,
        request: NewServiceRequest,
    ) -> BackendResult<Option<CreatedServiceRequest>> {
        self.command("createServiceRequest", &request).await
    }

    async fn associate_cmdb_config(&self, sr_number: &str, config_key: &str) -> BackendResult<()> {
        let association = Association {
            sr_number: sr_number.to_string(),
            config_key: config_key.to_string(),
        };
        self.command::<_, IgnoredAny>("associateCmdbConfig", &association)
            .await
            .map(|_| ())
    }

    async fn insert_note(&self, sr_number: &str, note: NewNote) -> BackendResult<Option<String>> {
        let request = NoteRequest { sr_number, note };
        let created: Option<NoteId> = self.command("insertNote", &request).await?;
        Ok(created.and_then(|c| c.note_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(status: u16, body: &str) -> BackendResult<Option<Csi>> {
        decode_as(status, body, NotFound::Empty)
    }

    fn decode_as(status: u16, body: &str, not_found: NotFound) -> BackendResult<Option<Csi>> {
        decode_response(
            "getCsis",
            StatusCode::from_u16(status).unwrap(),
            body.as_bytes(),
            not_found,
        )
    }

    #[test]
    fn test_no_content_and_not_found_are_none() {
        assert_eq!(decode(204, "").unwrap(), None);
        assert_eq!(decode(404, r#"{"anything":1}"#).unwrap(), None);
    }

    #[test]
    fn test_command_not_found_is_no_data() {
        let err = decode_as(404, "", NotFound::Fault).unwrap_err();
        assert!(matches!(
            err,
            BackendError::Business {
                kind: ApiErrorKind::NoData,
                ..
            }
        ));
        assert_eq!(decode_as(204, "", NotFound::Fault).unwrap(), None);
    }

    #[test]
    fn test_command_not_found_keeps_fault_body() {
        let err = decode_as(
            404,
            r#"{"kind":"BUSINESS_RULE","message":"SR 3-9 is closed"}"#,
            NotFound::Fault,
        )
        .unwrap_err();
        assert_eq!(
            err,
            BackendError::business(ApiErrorKind::BusinessRule, "SR 3-9 is closed")
        );
    }

    #[test]
    fn test_empty_and_null_bodies_are_none() {
        assert_eq!(decode(200, "").unwrap(), None);
        assert_eq!(decode(200, " \n").unwrap(), None);
        assert_eq!(decode(200, "null").unwrap(), None);
    }

    #[test]
    fn test_success_body_decoded() {
        let csi = decode(200, r#"{"csiNumber":"77"}"#).unwrap().unwrap();
        assert_eq!(csi.csi_number.as_deref(), Some("77"));
    }

    #[test]
    fn test_undecodable_body_is_unexpected() {
        assert!(matches!(
            decode(200, "<html>"),
            Err(BackendError::Unexpected(_))
        ));
    }

    #[test]
    fn test_server_error_is_unavailable() {
        assert!(matches!(decode(503, ""), Err(BackendError::Unavailable(_))));
        assert!(matches!(decode(500, "boom"), Err(BackendError::Unavailable(_))));
    }

    #[test]
    fn test_client_error_with_fault_is_business() {
        let err = decode(422, r#"{"kind":"BUSINESS_RULE","message":"CSI is expired"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            BackendError::business(ApiErrorKind::BusinessRule, "CSI is expired")
        );
    }

    #[test]
    fn test_client_error_without_fault_is_unexpected() {
        assert!(matches!(
            decode(400, "bad request"),
            Err(BackendError::Unexpected(_))
        ));
    }

    #[test]
    fn test_redirect_is_unexpected() {
        assert!(matches!(decode(302, ""), Err(BackendError::Unexpected(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = BackendConfig {
            base_url: "http://backend.local/srCreate/".to_string(),
            timeout_secs: 5,
        };
        let backend = RemoteBackend::new(&config).unwrap();
        assert_eq!(backend.base_url(), "http://backend.local/srCreate");
    }
}
