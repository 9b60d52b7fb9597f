//! Error types for the Meraki Dashboard API client.
//!
//! This module contains the configuration errors raised while building a
//! client, and the top-level [`DashboardError`] returned by the facade.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Errors raised by resource operations are described
//! in [`ResourceError`](crate::resources::ResourceError).
//!
//! # Example
//!
//! ```rust
//! use meraki_dashboard::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::resources::ResourceError;

/// Errors that can occur during client configuration.
///
/// Each variant provides a clear, actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("Meraki API Key missing. Please provide a valid Dashboard API key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL (e.g., 'https://api.meraki.com/api/v0').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// Unified error type for the [`Dashboard`](crate::Dashboard) facade.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::{Dashboard, DashboardError};
///
/// let dashboard = Dashboard::new("my-api-key").unwrap();
/// let result = dashboard.module("firewalls");
/// assert!(matches!(result, Err(DashboardError::UnknownModule { .. })));
/// ```
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The client could not be configured.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The HTTP transport could not be built.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// No resource module is registered under the requested name.
    #[error("module meraki has no attribute '{name}'")]
    UnknownModule {
        /// The name that was requested.
        name: String,
    },

    /// A resource operation failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
