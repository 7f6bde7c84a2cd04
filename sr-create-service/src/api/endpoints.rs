//! List endpoint definitions
//!
//! Each list resource is described by data: the name used in messages, the
//! fields a caller may sort on, and which filter parameters are required.

use crate::paging::MandatoryParams;

/// Static description of a list resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListEndpoint {
    /// Resource name, used in error bodies and `No <resource> returned`
    pub resource: &'static str,
    /// Fields accepted in `orderBy`
    pub sortable: &'static [&'static str],
    /// Filter parameters that must be supplied
    pub mandatory: MandatoryParams,
}

impl ListEndpoint {
    /// Message used when the backend returns nothing
    pub fn no_data_message(&self) -> String {
        format!("No {} returned", self.resource)
    }
}

/// `GET /csis`
pub const CSIS: ListEndpoint = ListEndpoint {
    resource: "csis",
    sortable: &[
        "csiNumber",
        "csiName",
        "accountNumber",
        "accountName",
        "country",
        "supportLevel",
    ],
    mandatory: MandatoryParams::AnyOf(&[
        "csiNumber",
        "csiName",
        "accountNumber",
        "accountName",
        "country",
        "contactEmail",
    ]),
};

/// `GET /accounts`
pub const ACCOUNTS: ListEndpoint = ListEndpoint {
    resource: "accounts",
    sortable: &["accountNumber", "accountName", "country", "city"],
    mandatory: MandatoryParams::AnyOf(&["accountNumber", "accountName", "partyNumber"]),
};

/// `GET /addresses`
pub const ADDRESSES: ListEndpoint = ListEndpoint {
    resource: "addresses",
    sortable: &["addressLine1", "city", "state", "postalCode"],
    mandatory: MandatoryParams::AllOf(&["csiNumber", "country"]),
};

/// `GET /handlingInstructions`
pub const HANDLING_INSTRUCTIONS: ListEndpoint = ListEndpoint {
    resource: "handlingInstructions",
    sortable: &["category", "productId"],
    mandatory: MandatoryParams::AllOf(&["csiNumber"]),
};

/// `GET /templates`
pub const TEMPLATES: ListEndpoint = ListEndpoint {
    resource: "templates",
    sortable: &["templateName", "productName", "problemType"],
    mandatory: MandatoryParams::AnyOf(&["productId", "productName", "platformId"]),
};
