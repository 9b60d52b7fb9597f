//! REST transport for the Dashboard API.
//!
//! [`RestClient`] is the layer resource modules talk to. It exposes the four
//! operations of the API (`get`, `post`, `put`, `delete`) over ordered path
//! segments and returns an [`ApiResponse`](crate::clients::ApiResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::DashboardConfig;
//! use meraki_dashboard::clients::RestClient;
//!
//! let config = DashboardConfig::from_api_key("my-api-key")?;
//! let client = RestClient::new(&config)?;
//!
//! let response = client.get(&["organizations"], None).await?;
//! println!("{response}");
//! ```

mod client;

pub use client::RestClient;
