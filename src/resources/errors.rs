//! Error types for resource operations.
//!
//! Every missing identifier has its own variant so callers can branch on the
//! cause. These errors are raised before any request is sent.
//!
//! A non-2xx response is not an error here: resource operations return
//! [`ApiResponse::Failure`](crate::clients::ApiResponse::Failure). The
//! [`ResourceError::Remote`] variant only appears when a caller opts into
//! [`ApiResponse::into_result`](crate::clients::ApiResponse::into_result) and
//! propagates with `?`.
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::resources::ResourceError;
//!
//! match dashboard.networks().list("").await {
//!     Err(ResourceError::NetworkIdMissing) => println!("pass a network id"),
//!     Err(e) => println!("Other error: {e}"),
//!     Ok(response) => println!("{response}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::{HttpError, RemoteFailure};

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No network ID was supplied.
    #[error("Network ID is required. To list every network use organizations().networks(<org_id>).")]
    NetworkIdMissing,

    /// No destination IP was supplied for a loss/latency query.
    #[error("The destination IP used to obtain the requested stats is required.")]
    IpMissing,

    /// No client identifier was supplied.
    #[error("Client ID, MAC or IP is required.")]
    ClientIdMissing,

    /// No client MAC address was supplied.
    #[error("MAC address is required.")]
    MacAddressMissing,

    /// No device policy was supplied.
    #[error("Device policy is required (Whitelisted, Blocked, Normal or Group policy).")]
    DevicePolicyMissing,

    /// No device serial was supplied.
    #[error("Device serial is required.")]
    SerialMissing,

    /// No organization ID was supplied.
    #[error("Organization ID is required.")]
    OrganizationIdMissing,

    /// No admin ID was supplied.
    #[error("Admin ID is required.")]
    AdminIdMissing,

    /// Some other required argument was not supplied.
    #[error("Parameter '{name}' is required.")]
    ParameterMissing {
        /// The wire name of the missing parameter.
        name: &'static str,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Remote(#[from] RemoteFailure),
}

impl ResourceError {
    /// Returns `true` for the variants raised by argument validation.
    #[must_use]
    pub const fn is_missing_field(&self) -> bool {
        !matches!(self, Self::Http(_) | Self::Remote(_))
    }
}

/// Returns `value` if it is present, otherwise `missing`.
pub(crate) fn require(value: &str, missing: ResourceError) -> Result<&str, ResourceError> {
    if value.trim().is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;

    #[test]
    fn test_require_accepts_present_value() {
        assert_eq!(require("N_1", ResourceError::NetworkIdMissing).unwrap(), "N_1");
    }

    #[test]
    fn test_require_rejects_empty_and_blank_values() {
        assert!(matches!(
            require("", ResourceError::SerialMissing),
            Err(ResourceError::SerialMissing)
        ));
        assert!(matches!(
            require("  ", ResourceError::MacAddressMissing),
            Err(ResourceError::MacAddressMissing)
        ));
    }

    #[test]
    fn test_missing_field_variants_are_distinct() {
        let messages = [
            ResourceError::NetworkIdMissing.to_string(),
            ResourceError::IpMissing.to_string(),
            ResourceError::ClientIdMissing.to_string(),
            ResourceError::MacAddressMissing.to_string(),
            ResourceError::DevicePolicyMissing.to_string(),
            ResourceError::SerialMissing.to_string(),
        ];
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_is_missing_field() {
        assert!(ResourceError::IpMissing.is_missing_field());
        assert!(ResourceError::ParameterMissing { name: "name" }.is_missing_field());

        let http = ResourceError::Http(HttpError::InvalidRequest(InvalidHttpRequestError::NoSegments));
        assert!(!http.is_missing_field());

        let remote = ResourceError::Remote(RemoteFailure {
            status: 404,
            reason: "Not Found".to_string(),
        });
        assert!(!remote.is_missing_field());
    }

    #[test]
    fn test_parameter_missing_names_parameter() {
        let error = ResourceError::ParameterMissing {
            name: "configTemplateId",
        };
        assert_eq!(error.to_string(), "Parameter 'configTemplateId' is required.");
    }

    #[test]
    fn test_remote_failure_converts() {
        let error: ResourceError = RemoteFailure {
            status: 500,
            reason: "Internal Server Error".to_string(),
        }
        .into();
        assert!(error.to_string().contains("500"));
    }
}
