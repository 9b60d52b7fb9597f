//! HTTP client types for Dashboard API communication.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP client holding the connection context
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A raw response from the API
//! - [`ApiResponse`]: Decoded body on success, [`RemoteFailure`] otherwise
//! - [`QueryParams`]: Ordered query string parameters
//! - [`rest::RestClient`]: `get`/`post`/`put`/`delete` over path segments
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::DashboardConfig;
//! use meraki_dashboard::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let config = DashboardConfig::from_api_key("my-api-key")?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, ["organizations"])
//!     .build()
//!     .unwrap();
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Each call is exactly one request; rate limiting (429) is reported to
//! the caller as a [`RemoteFailure`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_request::{append_query, build_url, HttpMethod, HttpRequest, HttpRequestBuilder, QueryParams};
pub use http_response::{ApiResponse, HttpResponse, RemoteFailure};

pub use rest::RestClient;
