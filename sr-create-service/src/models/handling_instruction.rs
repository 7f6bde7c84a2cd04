use serde::{Deserialize, Serialize};

use crate::paging::RawParams;

/// Customer-specific instruction for handling requests on a CSI
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlingInstruction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csi_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruction_text: Option<String>,
}

impl HandlingInstruction {
    /// Filter values taken from a list request's query string
    pub fn from_params(params: &RawParams) -> Self {
        Self {
            instruction_id: params.owned("instructionId"),
            csi_number: params.owned("csiNumber"),
            product_id: params.owned("productId"),
            category: params.owned("category"),
            instruction_text: params.owned("instructionText"),
        }
    }
}
