//! REST transport for the Dashboard API.
//!
//! This module provides the [`RestClient`] type: `get`, `post`, `put` and
//! `delete` over ordered path segments, returning an [`ApiResponse`].

use serde::Serialize;

use crate::clients::{ApiResponse, HttpClient, HttpError, HttpMethod, HttpRequest, QueryParams};
use crate::config::DashboardConfig;

/// REST API client for the Dashboard API.
///
/// A non-2xx response is returned as [`ApiResponse::Failure`], not as an
/// error. Only validation and connection problems produce `Err`.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use meraki_dashboard::DashboardConfig;
/// use meraki_dashboard::clients::{RestClient, QueryParams};
///
/// let config = DashboardConfig::from_api_key("my-api-key")?;
/// let client = RestClient::new(&config)?;
///
/// // GET request
/// let response = client.get(&["organizations"], None).await?;
///
/// // GET with query parameters
/// let query = QueryParams::new().with("timespan", 7200);
/// let response = client.get(&["networks", "N_1", "traffic"], Some(query)).await?;
///
/// // PUT request with body
/// let body = serde_json::json!({"name": "Branch"});
/// let response = client.put(&["networks", "N_1"], &body).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the HTTP client cannot be built.
    pub fn new(config: &DashboardConfig) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths and network failures.
    pub async fn get(
        &self,
        segments: &[&str],
        query: Option<QueryParams>,
    ) -> Result<ApiResponse, HttpError> {
        self.make_request(HttpMethod::Get, segments, None, query)
            .await
    }

    /// Sends a POST request with a JSON body to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, unserializable bodies and
    /// network failures.
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse, HttpError> {
        let body = serde_json::to_value(body)?;
        self.make_request(HttpMethod::Post, segments, Some(body), None)
            .await
    }

    /// Sends a PUT request with a JSON body to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths, unserializable bodies and
    /// network failures.
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<ApiResponse, HttpError> {
        let body = serde_json::to_value(body)?;
        self.make_request(HttpMethod::Put, segments, Some(body), None)
            .await
    }

    /// Sends a DELETE request to the given path.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid paths and network failures.
    pub async fn delete(&self, segments: &[&str]) -> Result<ApiResponse, HttpError> {
        self.make_request(HttpMethod::Delete, segments, None, None)
            .await
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        segments: &[&str],
        body: Option<serde_json::Value>,
        query: Option<QueryParams>,
    ) -> Result<ApiResponse, HttpError> {
        let mut builder = HttpRequest::builder(method, segments.iter().copied());

        if let Some(body_value) = body {
            builder = builder.body(body_value);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build()?;

        let response = self.http_client.request(request).await?;
        if !response.is_ok() {
            tracing::debug!(
                status = response.code,
                request_id = response.request_id().unwrap_or("-"),
                "Dashboard API call failed"
            );
        }
        Ok(response.into_api_response())
    }
}
