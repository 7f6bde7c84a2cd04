use serde::{Deserialize, Serialize};

use crate::paging::RawParams;

/// Customer account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_number: Option<String>,
}

impl Account {
    /// Filter values taken from a list request's query string
    pub fn from_params(params: &RawParams) -> Self {
        Self {
            account_id: params.owned("accountId"),
            account_number: params.owned("accountNumber"),
            account_name: params.owned("accountName"),
            country: params.owned("country"),
            city: params.owned("city"),
            party_number: params.owned("partyNumber"),
        }
    }
}

/// Summary of an account used when raising a request against it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_level: Option<String>,
}
