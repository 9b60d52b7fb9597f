//! Dashboard API resource modules.
//!
//! Each module maps one area of the API onto typed async methods:
//!
//! - [`Organizations`]: organizations, inventory, licensing, SNMP and VPN peers
//! - [`Networks`]: networks, templates, site-to-site VPN and analytics
//! - [`Devices`]: devices within a network
//! - [`Clients`]: clients seen by a network or by one device
//! - [`Ssids`]: wireless SSIDs of a network
//! - [`Admins`]: administrators of an organization
//!
//! Required identifiers are validated before anything is sent; a missing one
//! yields the matching [`ResourceError`] variant. Every other outcome is an
//! [`ApiResponse`](crate::clients::ApiResponse).
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::Dashboard;
//! use meraki_dashboard::resources::TimeWindow;
//!
//! let dashboard = Dashboard::new("my-api-key")?;
//!
//! let devices = dashboard.devices().list("N_1", None).await?;
//! let latency = dashboard
//!     .clients()
//!     .latency_history("N_1", "k74272e", TimeWindow::Timespan(86_400))
//!     .await?;
//! ```

use std::sync::Arc;

use crate::clients::RestClient;

mod common;
mod errors;

pub mod admins;
pub mod clients;
pub mod devices;
pub mod networks;
pub mod organizations;
pub mod ssids;

pub use common::{clamp_timespan, DevicePolicy, TimeWindow, DEFAULT_PER_PAGE, DEFAULT_TIMESPAN, MAX_TIMESPAN};
pub use errors::ResourceError;

pub use admins::{AdminParams, Admins, NetworkAccess, TagAccess};
pub use clients::{ClientProvision, Clients, ClientsParent};
pub use devices::{DeviceUpdate, Devices, LossAndLatencyQuery};
pub use networks::{
    Alert, AlertDestinations, AlertSettingsUpdate, BluetoothClientsQuery, BluetoothSettingsUpdate,
    MajorMinorAssignmentMode, NetworkCreate, NetworkUpdate, Networks, StsVpnHub, StsVpnSubnet,
    StsVpnUpdate,
};
pub use organizations::{OrganizationClaim, Organizations, SnmpSettingsUpdate, VpnPeer};
pub use ssids::Ssids;

/// Shared behavior of resource modules.
pub trait Resource {
    /// The name the module is registered under, which is also its root path
    /// segment where it has one.
    const NAME: &'static str;

    /// The REST client the module sends requests through.
    fn client(&self) -> &Arc<RestClient>;
}
