//! HTTP response types for the Meraki Dashboard API client.
//!
//! [`HttpResponse`] is the raw transport-level response. [`ApiResponse`] is
//! what resource operations hand back to callers: either the decoded JSON
//! body, or a [`RemoteFailure`] record for non-2xx statuses.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A structured record of a non-2xx response.
///
/// Serializes to the `{"status": <code>, "reason": <text>}` shape.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::clients::RemoteFailure;
///
/// let failure = RemoteFailure { status: 404, reason: "Not Found".to_string() };
/// assert_eq!(
///     serde_json::to_value(&failure).unwrap(),
///     serde_json::json!({"status": 404, "reason": "Not Found"})
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("Dashboard API returned {status} {reason}")]
pub struct RemoteFailure {
    /// The HTTP status code.
    pub status: u16,
    /// The reason phrase for the status code.
    pub reason: String,
}

/// The outcome of a Dashboard API call that reached the server.
///
/// A non-2xx status is data, not an error: callers inspect the variant.
/// Use [`ApiResponse::into_result`] to fold failures into a `Result`.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    /// 2xx response with its decoded JSON body.
    Success(serde_json::Value),
    /// Non-2xx response.
    Failure(RemoteFailure),
}

impl ApiResponse {
    /// Returns `true` for [`ApiResponse::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns the decoded body of a successful response.
    #[must_use]
    pub const fn body(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Success(body) => Some(body),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure record of an unsuccessful response.
    #[must_use]
    pub const fn failure(&self) -> Option<&RemoteFailure> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Renders the response as one JSON value: the body on success, or
    /// `{"status": .., "reason": ..}` on failure.
    #[must_use]
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            Self::Success(body) => body.clone(),
            Self::Failure(failure) => serde_json::json!({
                "status": failure.status,
                "reason": failure.reason,
            }),
        }
    }

    /// Converts the response into a `Result`, treating failures as errors.
    ///
    /// # Errors
    ///
    /// Returns the [`RemoteFailure`] for a non-2xx response.
    pub fn into_result(self) -> Result<serde_json::Value, RemoteFailure> {
        match self {
            Self::Success(body) => Ok(body),
            Self::Failure(failure) => Err(failure),
        }
    }
}

impl fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

/// A raw HTTP response from the Dashboard API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The reason phrase for the status code.
    pub reason: String,
    /// Response headers (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    ///
    /// The reason phrase is derived from the status code.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: serde_json::Value) -> Self {
        let reason = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or("Unknown Status")
            .to_string();

        Self {
            code,
            reason,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Converts into the caller-facing [`ApiResponse`].
    #[must_use]
    pub fn into_api_response(self) -> ApiResponse {
        if self.is_ok() {
            ApiResponse::Success(self.body)
        } else {
            ApiResponse::Failure(RemoteFailure {
                status: self.code,
                reason: self.reason,
            })
        }
    }
}
