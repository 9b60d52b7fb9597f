//! Devices resource.
//!
//! Devices are always addressed through their network:
//! `networks/{network}/devices/{serial}/...`.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Map;

use crate::clients::{ApiResponse, QueryParams, RestClient};
use crate::resources::common::{clamp_timespan, optional_space_joined, TimeWindow};
use crate::resources::errors::{require, ResourceError};
use crate::resources::{Clients, ClientsParent, Resource};

const PARENT: &str = "networks";
const DEFAULT_RESOLUTION: u32 = 60;
const DEFAULT_UPLINK: &str = "wan1";

/// Attributes of a device to change. Unset fields are left alone.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    /// Device name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Tags, sent space-separated.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_space_joined"
    )]
    pub tags: Option<Vec<String>>,

    /// Latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,

    /// Street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// Free-form notes, up to 255 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Whether to place the map marker from `address`. Ignored when `lat`
    /// and `lng` are set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub move_map_marker: Option<bool>,
}

/// Query for a device's uplink loss and latency history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LossAndLatencyQuery {
    /// Destination IP the stats are measured against. Required.
    pub ip: String,
    /// Uplink to query, `wan1` or `wan2`.
    pub uplink: String,
    /// Sample resolution in seconds.
    pub resolution: u32,
    /// Period covered.
    pub window: TimeWindow,
}

impl LossAndLatencyQuery {
    /// Creates a query against `ip` with the default uplink, resolution and
    /// window.
    #[must_use]
    pub fn new(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Self::default()
        }
    }

    fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new()
            .with("resolution", self.resolution)
            .with("uplink", &self.uplink)
            .with("ip", &self.ip);
        self.window.apply(&mut params);
        params
    }
}

impl Default for LossAndLatencyQuery {
    fn default() -> Self {
        Self {
            ip: String::new(),
            uplink: DEFAULT_UPLINK.to_string(),
            resolution: DEFAULT_RESOLUTION,
            window: TimeWindow::default(),
        }
    }
}

/// Operations on `networks/{network}/devices`.
#[derive(Debug, Clone)]
pub struct Devices {
    client: Arc<RestClient>,
}

impl Resource for Devices {
    const NAME: &'static str = "devices";

    fn client(&self) -> &Arc<RestClient> {
        &self.client
    }
}

impl Devices {
    /// Creates the module over a shared REST client.
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Clients seen by a device.
    #[must_use]
    pub fn clients(&self) -> Clients {
        Clients::new(Arc::clone(&self.client), ClientsParent::Devices)
    }

    /// Lists the devices in a network, or returns one when `serial` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `network` is empty, or
    /// [`ResourceError::SerialMissing`] if `serial` is given but empty.
    pub async fn list(
        &self,
        network: &str,
        serial: Option<&str>,
    ) -> Result<ApiResponse, ResourceError> {
        let network = require(network, ResourceError::NetworkIdMissing)?;
        let response = match serial {
            Some(serial) => {
                let serial = require(serial, ResourceError::SerialMissing)?;
                self.client
                    .get(&[PARENT, network, Self::NAME, serial], None)
                    .await?
            }
            None => self.client.get(&[PARENT, network, Self::NAME], None).await?,
        };
        Ok(response)
    }

    /// Updates the attributes of a device.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] or
    /// [`ResourceError::SerialMissing`] for missing identifiers.
    pub async fn update(
        &self,
        network: &str,
        serial: &str,
        update: &DeviceUpdate,
    ) -> Result<ApiResponse, ResourceError> {
        let (network, serial) = Self::identify(network, serial)?;
        Ok(self
            .client
            .put(&[PARENT, network, Self::NAME, serial], update)
            .await?)
    }

    /// Returns the performance score of a primary MX.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] or
    /// [`ResourceError::SerialMissing`] for missing identifiers.
    pub async fn performance(&self, network: &str, serial: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(network, serial, "performance", None).await
    }

    /// Returns the uplink information of a device.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] or
    /// [`ResourceError::SerialMissing`] for missing identifiers.
    pub async fn uplink(&self, network: &str, serial: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(network, serial, "uplink", None).await
    }

    /// Claims a device into a network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] or
    /// [`ResourceError::SerialMissing`] for missing identifiers.
    pub async fn claim(&self, network: &str, serial: &str) -> Result<ApiResponse, ResourceError> {
        let (network, serial) = Self::identify(network, serial)?;
        let body = serde_json::json!({ "serial": serial });
        Ok(self
            .client
            .post(&[PARENT, network, Self::NAME, "claim"], &body)
            .await?)
    }

    /// Removes a device from its network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] or
    /// [`ResourceError::SerialMissing`] for missing identifiers.
    pub async fn remove(&self, network: &str, serial: &str) -> Result<ApiResponse, ResourceError> {
        let (network, serial) = Self::identify(network, serial)?;
        Ok(self
            .client
            .post(&[PARENT, network, Self::NAME, serial, "remove"], &Map::new())
            .await?)
    }

    /// Lists LLDP and CDP information.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] or
    /// [`ResourceError::SerialMissing`] for missing identifiers.
    pub async fn lldp_cdp(
        &self,
        network: &str,
        serial: &str,
        timespan: u64,
    ) -> Result<ApiResponse, ResourceError> {
        let query = QueryParams::new().with("timespan", clamp_timespan(timespan));
        self.get_action(network, serial, "lldp_cdp", Some(query)).await
    }

    /// Returns uplink loss percentage and latency for a wired device.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`],
    /// [`ResourceError::SerialMissing`] or [`ResourceError::IpMissing`] for
    /// missing arguments.
    pub async fn loss_and_latency(
        &self,
        network: &str,
        serial: &str,
        query: &LossAndLatencyQuery,
    ) -> Result<ApiResponse, ResourceError> {
        let (network, serial) = Self::identify(network, serial)?;
        require(&query.ip, ResourceError::IpMissing)?;
        Ok(self
            .client
            .get(
                &[PARENT, network, Self::NAME, serial, "lossAndLatencyHistory"],
                Some(query.to_query()),
            )
            .await?)
    }

    fn identify<'a>(network: &'a str, serial: &'a str) -> Result<(&'a str, &'a str), ResourceError> {
        let network = require(network, ResourceError::NetworkIdMissing)?;
        let serial = require(serial, ResourceError::SerialMissing)?;
        Ok((network, serial))
    }

    async fn get_action(
        &self,
        network: &str,
        serial: &str,
        action: &str,
        query: Option<QueryParams>,
    ) -> Result<ApiResponse, ResourceError> {
        let (network, serial) = Self::identify(network, serial)?;
        Ok(self
            .client
            .get(&[PARENT, network, Self::NAME, serial, action], query)
            .await?)
    }
}
