use serde::{Deserialize, Serialize};

use crate::paging::RawParams;

/// Site address registered under a CSI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csi_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Address {
    /// Filter values taken from a list request's query string
    pub fn from_params(params: &RawParams) -> Self {
        Self {
            address_id: params.owned("addressId"),
            csi_number: params.owned("csiNumber"),
            account_number: params.owned("accountNumber"),
            address_line1: params.owned("addressLine1"),
            address_line2: params.owned("addressLine2"),
            city: params.owned("city"),
            state: params.owned("state"),
            postal_code: params.owned("postalCode"),
            country: params.owned("country"),
        }
    }
}
