//! Service request commands and their results

use serde::{Deserialize, Serialize};

/// Payload for creating a service request, forwarded without validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csi_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
}

/// Identifiers assigned by the backend to a new service request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedServiceRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sr_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sr_id: Option<String>,
}

impl CreatedServiceRequest {
    /// The SR number, if the backend supplied a non-empty one
    pub fn sr_number(&self) -> Option<&str> {
        self.sr_number.as_deref().filter(|s| !s.is_empty())
    }
}

/// Link between a service request and a CMDB configuration item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Association {
    pub sr_number: String,
    pub config_key: String,
}

/// Note to append to an existing service request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
}

/// Identifier of a note just added to a service request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedNote {
    pub sr_number: String,
    pub note_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_service_request_accepts_partial_body() {
        let request: NewServiceRequest =
            serde_json::from_str(r#"{"csiNumber":"1","problemSummary":"Disk full"}"#).unwrap();
        assert_eq!(request.csi_number.as_deref(), Some("1"));
        assert_eq!(request.problem_summary.as_deref(), Some("Disk full"));
        assert_eq!(request.severity, None);
    }

    #[test]
    fn test_empty_sr_number_is_missing() {
        let created = CreatedServiceRequest {
            sr_number: Some(String::new()),
            sr_id: Some("9".to_string()),
        };
        assert_eq!(created.sr_number(), None);
        assert_eq!(CreatedServiceRequest::default().sr_number(), None);
    }

    #[test]
    fn test_created_note_camel_case() {
        let note = CreatedNote {
            sr_number: "3-100".to_string(),
            note_id: "n1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&note).unwrap(),
            serde_json::json!({ "srNumber": "3-100", "noteId": "n1" })
        );
    }
}
