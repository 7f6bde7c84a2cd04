use serde::{Deserialize, Serialize};

use crate::paging::RawParams;

/// Customer Support Identifier, the support contract a request is raised under
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Csi {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csi_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csi_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Csi {
    /// Filter values taken from a list request's query string
    pub fn from_params(params: &RawParams) -> Self {
        Self {
            csi_number: params.owned("csiNumber"),
            csi_name: params.owned("csiName"),
            account_number: params.owned("accountNumber"),
            account_name: params.owned("accountName"),
            country: params.owned("country"),
            contact_email: params.owned("contactEmail"),
            support_level: params.owned("supportLevel"),
            status: params.owned("status"),
        }
    }
}
