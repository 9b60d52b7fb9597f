//! # Meraki Dashboard API client
//!
//! An async Rust client for the Cisco Meraki Dashboard REST API (v0).
//!
//! ## Overview
//!
//! This crate provides:
//! - A [`Dashboard`] entry point built from an API key
//! - Resource modules for organizations, networks, devices, clients, SSIDs
//!   and admins in [`resources`]
//! - Type-safe configuration via [`DashboardConfig`] and [`DashboardConfigBuilder`]
//! - Validated newtypes for the API key and base URL
//! - A small REST transport over `reqwest` in [`clients`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use meraki_dashboard::Dashboard;
//!
//! let dashboard = Dashboard::new("your-api-key")?;
//!
//! let response = dashboard.networks().list("N_1").await?;
//! match response.into_result() {
//!     Ok(network) => println!("{}", network["name"]),
//!     Err(failure) => eprintln!("{failure}"),
//! }
//! ```
//!
//! ## Configuration
//!
//! ```rust
//! use meraki_dashboard::{ApiKey, BaseUrl, DashboardConfig};
//!
//! let config = DashboardConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .base_url(BaseUrl::new("https://n42.meraki.com/api/v0").unwrap())
//!     .user_agent_prefix("NetOps/2.1")
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Responses and Errors
//!
//! Every operation returns `Result<ApiResponse, ResourceError>`:
//!
//! - `Err` means nothing useful reached the API: a required identifier was
//!   missing, or the connection failed.
//! - `Ok(ApiResponse::Success(value))` carries the decoded JSON body.
//! - `Ok(ApiResponse::Failure(failure))` carries the status and reason of a
//!   non-2xx response. Use [`ApiResponse::into_result`] to turn it into an
//!   error.
//!
//! ## Logging
//!
//! The crate emits [`tracing`](https://docs.rs/tracing) events and installs no
//! subscriber. Requests are logged at `debug`; insecure TLS and undecodable
//! response bodies at `warn`.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and identifiers are checked before sending
//! - **Thread-safe**: All client types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{ApiKey, BaseUrl, DashboardConfig, DashboardConfigBuilder};
pub use dashboard::{Dashboard, ResourceKind, ResourceModule};
pub use error::{ConfigError, DashboardError};

// Re-export HTTP client types
pub use clients::{
    ApiResponse, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    InvalidHttpRequestError, QueryParams, RemoteFailure, RestClient,
};

pub use resources::{ResourceError, TimeWindow};
