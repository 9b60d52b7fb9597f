//! HTTP request types for the Meraki Dashboard API client.
//!
//! This module provides the [`HttpRequest`] type and its builder, the ordered
//! [`QueryParams`] map, and the URL helpers [`build_url`] and [`append_query`].

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods supported by the Dashboard API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Query string parameters that keep their insertion order.
///
/// Inserting a key that is already present replaces its value in place.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::clients::QueryParams;
///
/// let params = QueryParams::new().with("timespan", 3600).with("perPage", 30);
/// assert_eq!(params.get("timespan"), Some("3600"));
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Sets `key` to `value`, keeping the original position of an existing key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.0.push((key, value)),
        }
    }

    /// Builder-style variant of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for QueryParams {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Joins `segments` onto `base` as `<base>/<s1>/<s2>/...`.
///
/// Each segment is percent-encoded. Alphanumerics and `-_.~` are left as-is.
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::NoSegments`] if `segments` is empty, or
/// [`InvalidHttpRequestError::EmptySegment`] if any segment is empty.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::clients::build_url;
///
/// let url = build_url("https://api.meraki.com/api/v0", &["networks", "N_123", "ssids"]).unwrap();
/// assert_eq!(url, "https://api.meraki.com/api/v0/networks/N_123/ssids");
/// ```
pub fn build_url<S: AsRef<str>>(base: &str, segments: &[S]) -> Result<String, InvalidHttpRequestError> {
    if segments.is_empty() {
        return Err(InvalidHttpRequestError::NoSegments);
    }

    let mut url = base.trim_end_matches('/').to_string();
    for (position, segment) in segments.iter().enumerate() {
        let segment = segment.as_ref();
        if segment.is_empty() {
            return Err(InvalidHttpRequestError::EmptySegment { position });
        }
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    Ok(url)
}

/// Appends `params` to `url` as `?k1=v1&k2=v2`, in insertion order.
///
/// Returns `url` unchanged when `params` is empty.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::clients::{append_query, QueryParams};
///
/// let params = QueryParams::new().with("a", 1).with("b", 2);
/// assert_eq!(append_query("https://x/y", &params), "https://x/y?a=1&b=2");
/// ```
#[must_use]
pub fn append_query(url: &str, params: &QueryParams) -> String {
    if params.is_empty() {
        return url.to_string();
    }

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{url}?{query}")
}

/// An HTTP request to be sent to the Dashboard API.
///
/// Use [`HttpRequest::builder`] to construct requests with the builder pattern.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, ["networks", "N_1", "traffic"])
///     .query_param("timespan", 7200)
///     .build()
///     .unwrap();
///
/// let put_request = HttpRequest::builder(HttpMethod::Put, ["networks", "N_1"])
///     .body(json!({"name": "Branch"}))
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// Ordered path segments below the base URL.
    pub segments: Vec<String>,
    /// Query parameters to append to the URL.
    pub query: QueryParams,
    /// The JSON request body, if any.
    pub body: Option<serde_json::Value>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder<I, S>(method: HttpMethod, segments: I) -> HttpRequestBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HttpRequestBuilder::new(method, segments)
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - there are no path segments, or one of them is empty
    /// - `http_method` is `Post` or `Put` but `body` is `None`
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.segments.is_empty() {
            return Err(InvalidHttpRequestError::NoSegments);
        }

        if let Some(position) = self.segments.iter().position(String::is_empty) {
            return Err(InvalidHttpRequestError::EmptySegment { position });
        }

        if matches!(self.http_method, HttpMethod::Post | HttpMethod::Put) && self.body.is_none() {
            return Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            });
        }

        Ok(())
    }

    /// Returns the full URL for this request below `base`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the path segments are invalid.
    pub fn url(&self, base: &str) -> Result<String, InvalidHttpRequestError> {
        let url = build_url(base, &self.segments)?;
        Ok(append_query(&url, &self.query))
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    segments: Vec<String>,
    query: QueryParams,
    body: Option<serde_json::Value>,
}

impl HttpRequestBuilder {
    fn new<I, S>(method: HttpMethod, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            http_method: method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: QueryParams::new(),
            body: None,
        }
    }

    /// Appends one path segment.
    #[must_use]
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Sets all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Adds a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.insert(key, value);
        self
    }

    /// Sets the JSON request body.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Builds the request, validating it first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if validation fails.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            segments: self.segments,
            query: self.query,
            body: self.body,
        };
        request.verify()?;
        Ok(request)
    }
}
