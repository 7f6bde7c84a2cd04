use serde::{Deserialize, Serialize};

use crate::paging::RawParams;

/// Product template that pre-fills a new service request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_type: Option<String>,
}

impl ProductTemplate {
    /// Filter values taken from a list request's query string
    pub fn from_params(params: &RawParams) -> Self {
        Self {
            template_id: params.owned("templateId"),
            template_name: params.owned("templateName"),
            product_id: params.owned("productId"),
            product_name: params.owned("productName"),
            platform_id: params.owned("platformId"),
            problem_type: params.owned("problemType"),
        }
    }
}
