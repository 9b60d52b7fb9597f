//! HTTP client for Dashboard API communication.
//!
//! This module provides the [`HttpClient`] type, which owns the shared
//! connection context (the `reqwest` client and the default headers) for
//! one API key.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::DashboardConfig;

/// Header carrying the Dashboard API key.
pub const API_KEY_HEADER: &str = "X-Cisco-Meraki-API-Key";

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to the Dashboard API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and the API key
/// - JSON decoding of response bodies
///
/// Every call to [`request`](Self::request) is exactly one round trip. There
/// are no retries.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use meraki_dashboard::DashboardConfig;
/// use meraki_dashboard::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = DashboardConfig::from_api_key("my-api-key")?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, ["organizations"]).build()?;
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.meraki.com/api/v0`).
    base_uri: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Client`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &DashboardConfig) -> Result<Self, HttpError> {
        let base_uri = config.base_url().as_ref().to_string();

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Meraki Dashboard API Library v{SDK_VERSION} | Rust {rust_version}"
        );

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert(
            API_KEY_HEADER.to_string(),
            config.api_key().as_ref().to_string(),
        );

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if config.accept_invalid_certs() {
            tracing::warn!(
                "TLS certificate verification is disabled for {}",
                config.base_url().host_name()
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let client = builder
            .build()
            .map_err(|e| HttpError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_uri,
            default_headers,
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Dashboard API.
    ///
    /// A 2xx body is decoded as JSON. An empty or undecodable body becomes
    /// `{}`. Non-2xx responses are returned as-is; use
    /// [`HttpResponse::into_api_response`] to turn them into a failure record.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs, including a body cut off mid-read (`Network`)
    /// - A 2xx response carries a non-empty body that is not JSON (`Serialization`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = request.url(&self.base_uri)?;
        tracing::debug!(method = %request.http_method, url = %url, "Dashboard API request");

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let success = (200..300).contains(&code);
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            match serde_json::from_str(&body_text) {
                Ok(value) => value,
                Err(e) if success => {
                    tracing::warn!("Dashboard API returned a non-JSON body for {url}: {e}");
                    return Err(HttpError::Serialization(e));
                }
                Err(_) => serde_json::json!({}),
            }
        };

        tracing::debug!(status = code, url = %url, "Dashboard API response");

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
