//! Configuration types for the Meraki Dashboard API client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`DashboardConfig`]: The configuration struct holding all client settings
//! - [`DashboardConfigBuilder`]: A builder for constructing [`DashboardConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`BaseUrl`]: A validated base URL for API requests
//!
//! # Example
//!
//! ```rust
//! use meraki_dashboard::{DashboardConfig, ApiKey, BaseUrl};
//!
//! let config = DashboardConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://n42.meraki.com/api/v0").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// Configuration for the Meraki Dashboard API client.
///
/// # Thread Safety
///
/// `DashboardConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # TLS Verification
///
/// Peer certificates are verified unless [`DashboardConfigBuilder::accept_invalid_certs`]
/// is explicitly enabled.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::{DashboardConfig, ApiKey};
///
/// let config = DashboardConfig::builder()
///     .api_key(ApiKey::new("your-api-key").unwrap())
///     .user_agent_prefix("NetOps/2.1")
///     .build()
///     .unwrap();
///
/// assert!(!config.accept_invalid_certs());
/// ```
#[derive(Clone, Debug)]
pub struct DashboardConfig {
    api_key: ApiKey,
    base_url: BaseUrl,
    accept_invalid_certs: bool,
    user_agent_prefix: Option<String>,
}

impl DashboardConfig {
    /// Creates a new builder for constructing a `DashboardConfig`.
    #[must_use]
    pub fn builder() -> DashboardConfigBuilder {
        DashboardConfigBuilder::new()
    }

    /// Creates a configuration with default settings for the given key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn from_api_key(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder().api_key(ApiKey::new(api_key)?).build()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns whether TLS peer verification is disabled.
    #[must_use]
    pub const fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify DashboardConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DashboardConfig>();
};

/// Builder for constructing [`DashboardConfig`] instances.
///
/// `api_key` is required. All other fields have defaults.
///
/// # Defaults
///
/// - `base_url`: `https://api.meraki.com/api/v0`
/// - `accept_invalid_certs`: `false`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct DashboardConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    accept_invalid_certs: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl DashboardConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Overrides the base URL, e.g. to talk to a shard host directly.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Disables TLS peer verification.
    ///
    /// Only use this against hosts you trust, such as a lab proxy with a
    /// self-signed certificate.
    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = Some(accept);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`DashboardConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` is not set.
    pub fn build(self) -> Result<DashboardConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        Ok(DashboardConfig {
            api_key,
            base_url: self.base_url.unwrap_or_default(),
            accept_invalid_certs: self.accept_invalid_certs.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
