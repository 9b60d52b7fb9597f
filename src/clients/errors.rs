//! HTTP-specific error types for the Meraki Dashboard API client.
//!
//! # Error Handling
//!
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all transport-level errors
//!
//! A non-2xx response is *not* an error at this layer. It is returned as
//! [`ApiResponse::Failure`](crate::clients::ApiResponse::Failure).
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::clients::{HttpError, ApiResponse};
//!
//! match client.request(request).await {
//!     Ok(response) => match response.into_api_response() {
//!         ApiResponse::Success(body) => println!("{body}"),
//!         ApiResponse::Failure(failure) => println!("{} {}", failure.status, failure.reason),
//!     },
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation.
///
/// This error is raised before a request is sent.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::EmptySegment { position: 1 };
/// assert_eq!(error.to_string(), "Path segment 1 is empty.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request has no path segments at all.
    #[error("Cannot build a request without path segments.")]
    NoSegments,

    /// One of the path segments is an empty string.
    #[error("Path segment {position} is empty.")]
    EmptySegment {
        /// Zero-based index of the offending segment.
        position: usize,
    },

    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request body could not be serialized to JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The underlying HTTP client could not be constructed.
    #[error("Failed to create HTTP client: {0}")]
    Client(String),
}
