//! Mandatory-parameter policy for list endpoints
//!
//! Each endpoint declares which of its filter parameters must be supplied.
//! Some endpoints need at least one of a set ([`MandatoryParams::AnyOf`]),
//! others need every member of a set ([`MandatoryParams::AllOf`]). The two
//! policies are deliberately kept distinct per endpoint.

use crate::api::ApiError;

use super::params::RawParams;

/// Which raw parameters an endpoint requires before calling the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandatoryParams {
    /// Nothing is required
    None,
    /// At least one of these must be non-empty
    AnyOf(&'static [&'static str]),
    /// Every one of these must be non-empty
    AllOf(&'static [&'static str]),
}

impl MandatoryParams {
    /// Check the policy against the request parameters
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the violated parameter set.
    pub fn check(&self, params: &RawParams) -> Result<(), ApiError> {
        match self {
            Self::None => Ok(()),
            Self::AnyOf(names) => {
                if names.iter().any(|name| params.is_set(name)) {
                    Ok(())
                } else {
                    Err(ApiError::invalid_argument(format!(
                        "At least one of {} must be specified",
                        names.join(", ")
                    )))
                }
            }
            Self::AllOf(names) => {
                if names.iter().all(|name| params.is_set(name)) {
                    Ok(())
                } else {
                    Err(ApiError::invalid_argument(format!(
                        "All of {} must be specified",
                        names.join(", ")
                    )))
                }
            }
        }
    }
}
