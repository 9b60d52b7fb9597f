//! Networks resource.
//!
//! Covers network lifecycle, template binding, site-to-site VPN, traffic
//! analytics, Bluetooth and alert settings. Devices, clients and SSIDs of a
//! network are reached through [`Networks::devices`], [`Networks::clients`]
//! and [`Networks::ssids`].
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::Dashboard;
//! use meraki_dashboard::resources::{BluetoothSettingsUpdate, MajorMinorAssignmentMode};
//!
//! let dashboard = Dashboard::new("my-api-key")?;
//! let networks = dashboard.networks();
//!
//! let current = networks.bluetooth_settings("N_1").await?;
//!
//! let update = BluetoothSettingsUpdate {
//!     scanning_enabled: true,
//!     advertising_enabled: true,
//!     uuid: Some("00000000-0000-0000-0000-000000000000".to_string()),
//!     major_minor_assignment_mode: Some(MajorMinorAssignmentMode::NonUnique { major: 1, minor: 2 }),
//! };
//! let updated = networks.update_bluetooth_settings("N_1", &update).await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{ApiResponse, QueryParams, RestClient};
use crate::resources::common::{
    clamp_timespan, optional_space_joined, space_joined, DEFAULT_PER_PAGE, DEFAULT_TIMESPAN,
};
use crate::resources::errors::{require, ResourceError};
use crate::resources::{Clients, ClientsParent, Devices, Resource, Ssids};

const DEFAULT_TIME_ZONE: &str = "America/Los_Angeles";

/// Parameters for creating a network.
///
/// `network_type` and `tags` are sent as space-separated strings.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCreate {
    /// Name of the new network.
    pub name: String,

    /// Product types: `wireless`, `appliance`, `switch`, `phone`,
    /// `systemsManager` or `camera`. Several make a combined network.
    #[serde(rename = "type", serialize_with = "space_joined")]
    pub network_type: Vec<String>,

    /// Tags applied to the network.
    #[serde(serialize_with = "space_joined")]
    pub tags: Vec<String>,

    /// Time zone, defaults to `America/Los_Angeles`.
    pub time_zone: String,

    /// Network to copy configuration from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_from_network_id: Option<String>,

    /// Disables the local device status pages.
    pub disable_my_meraki_com: bool,

    /// Disables the device status page on the LAN IP.
    pub disable_remote_status_page: bool,
}

impl Default for NetworkCreate {
    fn default() -> Self {
        Self {
            name: String::new(),
            network_type: Vec::new(),
            tags: Vec::new(),
            time_zone: DEFAULT_TIME_ZONE.to_string(),
            copy_from_network_id: None,
            disable_my_meraki_com: false,
            disable_remote_status_page: false,
        }
    }
}

/// Fields of a network to change. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkUpdate {
    /// New name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// New time zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,

    /// Replacement tags, sent space-separated.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_space_joined"
    )]
    pub tags: Option<Vec<String>>,

    /// Disables the local device status pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_my_meraki_com: Option<bool>,

    /// Disables the device status page on the LAN IP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_remote_status_page: Option<bool>,
}

/// A hub in a site-to-site VPN configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StsVpnHub {
    /// Network ID of the hub.
    pub hub_id: String,
    /// Whether to route all traffic through the hub.
    pub use_default_route: bool,
}

/// A local subnet in a site-to-site VPN configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StsVpnSubnet {
    /// CIDR of the subnet.
    pub local_subnet: String,
    /// Whether the subnet takes part in the VPN.
    pub use_vpn: bool,
}

/// Site-to-site VPN settings of an MX network.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StsVpnUpdate {
    /// `none`, `spoke` or `hub`.
    pub mode: String,
    /// Hubs, in priority order. Only used in `spoke` mode.
    pub hubs: Vec<StsVpnHub>,
    /// Local subnets.
    pub subnets: Vec<StsVpnSubnet>,
}

/// How beacon major and minor numbers are assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MajorMinorAssignmentMode {
    /// Dashboard assigns unique values per node.
    Unique,
    /// Every node uses the same values.
    NonUnique {
        /// Beacon major number.
        major: u16,
        /// Beacon minor number.
        minor: u16,
    },
}

impl MajorMinorAssignmentMode {
    /// Returns the wire representation of the mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unique => "Unique",
            Self::NonUnique { .. } => "Non-unique",
        }
    }
}

/// Bluetooth settings of a wireless network.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BluetoothSettingsUpdate {
    /// Whether APs scan for Bluetooth clients.
    pub scanning_enabled: bool,
    /// Whether APs advertise beacons.
    pub advertising_enabled: bool,
    /// UUID used in the beacon identifier.
    pub uuid: Option<String>,
    /// Major/minor assignment. `major` and `minor` are only sent in
    /// non-unique mode.
    pub major_minor_assignment_mode: Option<MajorMinorAssignmentMode>,
}

impl BluetoothSettingsUpdate {
    /// Builds the request body.
    #[must_use]
    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        body.insert("scanningEnabled".into(), self.scanning_enabled.into());
        body.insert("advertisingEnabled".into(), self.advertising_enabled.into());
        if let Some(uuid) = &self.uuid {
            body.insert("uuid".into(), uuid.clone().into());
        }
        if let Some(mode) = &self.major_minor_assignment_mode {
            body.insert("majorMinorAssignmentMode".into(), mode.as_str().into());
            if let MajorMinorAssignmentMode::NonUnique { major, minor } = mode {
                body.insert("major".into(), (*major).into());
                body.insert("minor".into(), (*minor).into());
            }
        }
        Value::Object(body)
    }
}

/// Where alerts are delivered.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AlertDestinations {
    /// Email recipients.
    pub emails: Vec<String>,
    /// Whether all network admins receive emails.
    pub all_admins: bool,
    /// Whether an SNMP trap is sent.
    pub snmp: bool,
}

/// Configuration of one alert type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// The alert type, e.g. `gatewayDown`.
    #[serde(rename = "type")]
    pub alert_type: String,
    /// Whether the alert is on.
    pub enabled: bool,
    /// Destinations overriding the network defaults.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_destinations: Option<AlertDestinations>,
    /// Alert-specific filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<Map<String, Value>>,
}

/// Alert configuration of a network.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AlertSettingsUpdate {
    /// Network-wide destinations for all alerts.
    pub default_destinations: AlertDestinations,
    /// Per-type configuration.
    pub alerts: Vec<Alert>,
}

/// Query for Bluetooth clients seen by a network.
///
/// With `client` set, one client is returned and `timespan` becomes its
/// connectivity history window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BluetoothClientsQuery {
    /// A single Bluetooth client to look up.
    pub client: Option<String>,
    /// Seconds to look back. Capped at 30 days.
    pub timespan: u64,
    /// Whether to include connectivity history.
    pub include_connectivity_history: bool,
    /// Page size when listing.
    pub per_page: u32,
}

impl Default for BluetoothClientsQuery {
    fn default() -> Self {
        Self {
            client: None,
            timespan: DEFAULT_TIMESPAN,
            include_connectivity_history: false,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Operations on `/networks`.
#[derive(Debug, Clone)]
pub struct Networks {
    client: Arc<RestClient>,
}

impl Resource for Networks {
    const NAME: &'static str = "networks";

    fn client(&self) -> &Arc<RestClient> {
        &self.client
    }
}

impl Networks {
    /// Creates the module over a shared REST client.
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Clients seen by a network.
    #[must_use]
    pub fn clients(&self) -> Clients {
        Clients::new(Arc::clone(&self.client), ClientsParent::Networks)
    }

    /// Devices in a network.
    #[must_use]
    pub fn devices(&self) -> Devices {
        Devices::new(Arc::clone(&self.client))
    }

    /// SSIDs of a network.
    #[must_use]
    pub fn ssids(&self) -> Ssids {
        Ssids::new(Arc::clone(&self.client))
    }

    /// Returns a network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn list(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        Ok(self.client.get(&[Self::NAME, id], None).await?)
    }

    /// Creates a network in an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `organization_id`
    /// is empty, or [`ResourceError::ParameterMissing`] without a name or type.
    pub async fn create(
        &self,
        organization_id: &str,
        network: &NetworkCreate,
    ) -> Result<ApiResponse, ResourceError> {
        let organization_id = require(organization_id, ResourceError::OrganizationIdMissing)?;
        require(&network.name, ResourceError::ParameterMissing { name: "name" })?;
        if network.network_type.is_empty() {
            return Err(ResourceError::ParameterMissing { name: "type" });
        }
        Ok(self
            .client
            .post(&["organizations", organization_id, Self::NAME], network)
            .await?)
    }

    /// Updates a network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn update(
        &self,
        id: &str,
        update: &NetworkUpdate,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        Ok(self.client.put(&[Self::NAME, id], update).await?)
    }

    /// Deletes a network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn delete(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        Ok(self.client.delete(&[Self::NAME, id]).await?)
    }

    /// Binds a network to a configuration template.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] or
    /// [`ResourceError::ParameterMissing`] for missing arguments.
    pub async fn bind_template(
        &self,
        id: &str,
        template_id: &str,
        auto_bind: bool,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        let template_id = require(
            template_id,
            ResourceError::ParameterMissing {
                name: "configTemplateId",
            },
        )?;
        let body = serde_json::json!({
            "configTemplateId": template_id,
            "autoBind": auto_bind,
        });
        Ok(self.client.post(&[Self::NAME, id, "bind"], &body).await?)
    }

    /// Unbinds a network from its template.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn unbind_template(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        Ok(self
            .client
            .post(&[Self::NAME, id, "unbind"], &Map::new())
            .await?)
    }

    /// Returns the site-to-site VPN settings. MX networks only.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn sts_vpn(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "siteToSiteVpn", None).await
    }

    /// Updates the site-to-site VPN settings. MX networks in NAT mode only.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty, or
    /// [`ResourceError::ParameterMissing`] without a mode.
    pub async fn update_sts_vpn(
        &self,
        id: &str,
        settings: &StsVpnUpdate,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        require(&settings.mode, ResourceError::ParameterMissing { name: "mode" })?;
        Ok(self
            .client
            .put(&[Self::NAME, id, "siteToSiteVpn"], settings)
            .await?)
    }

    /// Returns traffic analysis data. Requires hostname visibility.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn traffic(&self, id: &str, timespan: u64) -> Result<ApiResponse, ResourceError> {
        let query = QueryParams::new().with("timespan", clamp_timespan(timespan));
        self.get_action(id, "traffic", Some(query)).await
    }

    /// Lists the access policies. MS networks only.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn access_policies(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "accessPolicies", None).await
    }

    /// Lists Air Marshal scan results.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn air_marshal(&self, id: &str, timespan: u64) -> Result<ApiResponse, ResourceError> {
        let query = QueryParams::new().with("timespan", clamp_timespan(timespan));
        self.get_action(id, "airMarshal", Some(query)).await
    }

    /// Returns the Bluetooth settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn bluetooth_settings(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "bluetoothSettings", None).await
    }

    /// Updates the Bluetooth settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn update_bluetooth_settings(
        &self,
        id: &str,
        settings: &BluetoothSettingsUpdate,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        Ok(self
            .client
            .put(&[Self::NAME, id, "bluetoothSettings"], &settings.to_body())
            .await?)
    }

    /// Returns the alert configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn alert_settings(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "alertSettings", None).await
    }

    /// Updates the alert configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn update_alert_settings(
        &self,
        id: &str,
        settings: &AlertSettingsUpdate,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        Ok(self
            .client
            .put(&[Self::NAME, id, "alertSettings"], settings)
            .await?)
    }

    /// Lists Bluetooth clients, or returns one when `query.client` is set.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty, or
    /// [`ResourceError::ClientIdMissing`] if `query.client` is set but blank.
    pub async fn bluetooth_clients(
        &self,
        id: &str,
        query: &BluetoothClientsQuery,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        let timespan = clamp_timespan(query.timespan);

        let response = match query.client.as_deref() {
            Some(client) => {
                let client = require(client, ResourceError::ClientIdMissing)?;
                let params = QueryParams::new()
                    .with("includeConnectivityHistory", query.include_connectivity_history)
                    .with("connectivityHistoryTimespan", timespan);
                self.client
                    .get(&[Self::NAME, id, "bluetoothClients", client], Some(params))
                    .await?
            }
            None => {
                let params = QueryParams::new()
                    .with("timespan", timespan)
                    .with("includeConnectivityHistory", query.include_connectivity_history)
                    .with("perPage", query.per_page);
                self.client
                    .get(&[Self::NAME, id, "bluetoothClients"], Some(params))
                    .await?
            }
        };
        Ok(response)
    }

    /// Lists splash login attempts, optionally for one SSID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `id` is empty.
    pub async fn splash_login_attempts(
        &self,
        id: &str,
        ssid: Option<u8>,
        timespan: u64,
    ) -> Result<ApiResponse, ResourceError> {
        let mut query = QueryParams::new().with("timespan", clamp_timespan(timespan));
        if let Some(ssid) = ssid {
            query.insert("ssidNumber", ssid);
        }
        self.get_action(id, "splashLoginAttempts", Some(query)).await
    }

    async fn get_action(
        &self,
        id: &str,
        action: &str,
        query: Option<QueryParams>,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::NetworkIdMissing)?;
        Ok(self.client.get(&[Self::NAME, id, action], query).await?)
    }
}
