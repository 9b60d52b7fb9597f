//! Clients resource.
//!
//! Clients are listed either per network (`networks/{id}/clients`) or per
//! device (`devices/{serial}/clients`). The parent decides which identifier
//! the owner argument carries and which error reports it missing.
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::Dashboard;
//! use meraki_dashboard::resources::{ClientProvision, DevicePolicy};
//!
//! let dashboard = Dashboard::new("my-api-key")?;
//!
//! // Clients of one device over the last day
//! let seen = dashboard.devices().clients().list("Q2XX-XXXX-XXXX", 86_400).await?;
//!
//! // Provision a client on a network before it associates
//! let provision = ClientProvision {
//!     mac: "00:11:22:33:44:55".to_string(),
//!     name: "Lobby printer".to_string(),
//!     device_policy: Some(DevicePolicy::Whitelisted),
//!     group_policy_id: None,
//! };
//! let response = dashboard.clients().provision("N_1", &provision).await?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::{ApiResponse, QueryParams, RestClient};
use crate::resources::common::{clamp_timespan, DevicePolicy, TimeWindow};
use crate::resources::errors::{require, ResourceError};
use crate::resources::Resource;

/// The resource clients are listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientsParent {
    /// `networks/{network_id}/clients`
    Networks,
    /// `devices/{serial}/clients`
    Devices,
}

impl ClientsParent {
    /// Returns the path segment of the parent.
    #[must_use]
    pub const fn segment(&self) -> &'static str {
        match self {
            Self::Networks => "networks",
            Self::Devices => "devices",
        }
    }

    const fn owner_missing(self) -> ResourceError {
        match self {
            Self::Networks => ResourceError::NetworkIdMissing,
            Self::Devices => ResourceError::SerialMissing,
        }
    }
}

/// A client to provision with a name and policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientProvision {
    /// MAC address of the client. Required.
    pub mac: String,
    /// Display name, up to 255 bytes.
    pub name: String,
    /// Policy to apply. Required.
    pub device_policy: Option<DevicePolicy>,
    /// Group policy ID. Only sent with [`DevicePolicy::GroupPolicy`].
    pub group_policy_id: Option<String>,
}

impl ClientProvision {
    fn to_body(&self) -> Result<Value, ResourceError> {
        let mac = require(&self.mac, ResourceError::MacAddressMissing)?;
        let policy = self.device_policy.ok_or(ResourceError::DevicePolicyMissing)?;

        let mut body = Map::new();
        body.insert("mac".into(), mac.into());
        body.insert("name".into(), self.name.clone().into());
        insert_policy(&mut body, policy, self.group_policy_id.as_deref())?;
        Ok(Value::Object(body))
    }
}

/// Writes `devicePolicy`, and `groupPolicyId` for group policies.
fn insert_policy(
    body: &mut Map<String, Value>,
    policy: DevicePolicy,
    group_policy_id: Option<&str>,
) -> Result<(), ResourceError> {
    body.insert("devicePolicy".into(), policy.as_str().into());
    if policy == DevicePolicy::GroupPolicy {
        let group_policy_id = require(
            group_policy_id.unwrap_or_default(),
            ResourceError::ParameterMissing {
                name: "groupPolicyId",
            },
        )?;
        body.insert("groupPolicyId".into(), group_policy_id.into());
    }
    Ok(())
}

/// Operations on `<parent>/{owner}/clients`.
#[derive(Debug, Clone)]
pub struct Clients {
    client: Arc<RestClient>,
    parent: ClientsParent,
}

impl Resource for Clients {
    const NAME: &'static str = "clients";

    fn client(&self) -> &Arc<RestClient> {
        &self.client
    }
}

impl Clients {
    /// Creates the module over a shared REST client.
    #[must_use]
    pub const fn new(client: Arc<RestClient>, parent: ClientsParent) -> Self {
        Self { client, parent }
    }

    /// Returns the parent resource.
    #[must_use]
    pub const fn parent(&self) -> ClientsParent {
        self.parent
    }

    /// Lists clients seen in the last `timespan` seconds. Usage is in
    /// kilobytes.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error if `owner` is empty.
    pub async fn list(&self, owner: &str, timespan: u64) -> Result<ApiResponse, ResourceError> {
        let owner = self.owner(owner)?;
        let query = QueryParams::new().with("timespan", clamp_timespan(timespan));
        Ok(self
            .client
            .get(&[self.parent.segment(), owner, Self::NAME], Some(query))
            .await?)
    }

    /// Returns a client by ID, MAC or IP.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::ClientIdMissing`].
    pub async fn get(&self, owner: &str, client: &str) -> Result<ApiResponse, ResourceError> {
        let owner = self.owner(owner)?;
        let client = require(client, ResourceError::ClientIdMissing)?;
        Ok(self
            .client
            .get(&[self.parent.segment(), owner, Self::NAME, client], None)
            .await?)
    }

    /// Provisions a client before it associates.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error,
    /// [`ResourceError::MacAddressMissing`] or
    /// [`ResourceError::DevicePolicyMissing`].
    pub async fn provision(
        &self,
        owner: &str,
        provision: &ClientProvision,
    ) -> Result<ApiResponse, ResourceError> {
        let owner = self.owner(owner)?;
        let body = provision.to_body()?;
        Ok(self
            .client
            .post(&[self.parent.segment(), owner, Self::NAME, "provision"], &body)
            .await?)
    }

    /// Returns daily usage history in kilobytes.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::ClientIdMissing`].
    pub async fn usage_history(&self, owner: &str, client: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(owner, client, "usageHistory", None).await
    }

    /// Returns traffic data over time. Requires detailed traffic analysis.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::ClientIdMissing`].
    pub async fn traffic_history(
        &self,
        owner: &str,
        client: &str,
        per_page: u32,
    ) -> Result<ApiResponse, ResourceError> {
        let query = QueryParams::new().with("perPage", per_page);
        self.get_action(owner, client, "trafficHistory", Some(query)).await
    }

    /// Returns the events of a client.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::ClientIdMissing`].
    pub async fn events(
        &self,
        owner: &str,
        client: &str,
        per_page: u32,
    ) -> Result<ApiResponse, ResourceError> {
        let query = QueryParams::new().with("perPage", per_page);
        self.get_action(owner, client, "events", Some(query)).await
    }

    /// Returns the security events of a client.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::ClientIdMissing`].
    pub async fn security_events(
        &self,
        owner: &str,
        client: &str,
        timespan: u64,
        per_page: u32,
    ) -> Result<ApiResponse, ResourceError> {
        let query = QueryParams::new()
            .with("timespan", clamp_timespan(timespan))
            .with("perPage", per_page);
        self.get_action(owner, client, "securityEvents", Some(query)).await
    }

    /// Returns latency histograms per traffic category.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::ClientIdMissing`].
    pub async fn latency_history(
        &self,
        owner: &str,
        client: &str,
        window: TimeWindow,
    ) -> Result<ApiResponse, ResourceError> {
        let mut query = QueryParams::new();
        window.apply(&mut query);
        self.get_action(owner, client, "latencyHistory", Some(query)).await
    }

    /// Returns the policy assigned to a client.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::MacAddressMissing`].
    pub async fn policy(
        &self,
        owner: &str,
        client: &str,
        timespan: u64,
    ) -> Result<ApiResponse, ResourceError> {
        let (owner, client) = self.owner_and_mac(owner, client)?;
        let query = QueryParams::new().with("timespan", clamp_timespan(timespan));
        Ok(self
            .client
            .get(
                &[self.parent.segment(), owner, Self::NAME, client, "policy"],
                Some(query),
            )
            .await?)
    }

    /// Assigns a policy to a client.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error,
    /// [`ResourceError::MacAddressMissing`], or
    /// [`ResourceError::ParameterMissing`] for a group policy without an ID.
    pub async fn update_policy(
        &self,
        owner: &str,
        client: &str,
        policy: DevicePolicy,
        group_policy_id: Option<&str>,
    ) -> Result<ApiResponse, ResourceError> {
        let (owner, client) = self.owner_and_mac(owner, client)?;
        let mut body = Map::new();
        insert_policy(&mut body, policy, group_policy_id)?;
        Ok(self
            .client
            .put(
                &[self.parent.segment(), owner, Self::NAME, client, "policy"],
                &body,
            )
            .await?)
    }

    /// Returns the splash authorization of a client for each SSID.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::MacAddressMissing`].
    pub async fn splash_auth_status(
        &self,
        owner: &str,
        client: &str,
    ) -> Result<ApiResponse, ResourceError> {
        let (owner, client) = self.owner_and_mac(owner, client)?;
        Ok(self
            .client
            .get(
                &[
                    self.parent.segment(),
                    owner,
                    Self::NAME,
                    client,
                    "splashAuthorizationStatus",
                ],
                None,
            )
            .await?)
    }

    /// Sets the splash authorization of a client on one SSID.
    ///
    /// # Errors
    ///
    /// Returns the parent's missing-owner error or
    /// [`ResourceError::MacAddressMissing`].
    pub async fn update_splash_auth_status(
        &self,
        owner: &str,
        client: &str,
        ssid: u8,
        is_authorized: bool,
    ) -> Result<ApiResponse, ResourceError> {
        let (owner, client) = self.owner_and_mac(owner, client)?;
        let ssids = HashMap::from([(
            ssid.to_string(),
            serde_json::json!({ "isAuthorized": is_authorized }),
        )]);
        let body = serde_json::json!({ "ssids": ssids });
        Ok(self
            .client
            .put(
                &[
                    self.parent.segment(),
                    owner,
                    Self::NAME,
                    client,
                    "splashAuthorizationStatus",
                ],
                &body,
            )
            .await?)
    }

    fn owner<'a>(&self, owner: &'a str) -> Result<&'a str, ResourceError> {
        require(owner, self.parent.owner_missing())
    }

    fn owner_and_mac<'a>(
        &self,
        owner: &'a str,
        client: &'a str,
    ) -> Result<(&'a str, &'a str), ResourceError> {
        let owner = self.owner(owner)?;
        let client = require(client, ResourceError::MacAddressMissing)?;
        Ok((owner, client))
    }

    async fn get_action(
        &self,
        owner: &str,
        client: &str,
        action: &str,
        query: Option<QueryParams>,
    ) -> Result<ApiResponse, ResourceError> {
        let owner = self.owner(owner)?;
        let client = require(client, ResourceError::ClientIdMissing)?;
        Ok(self
            .client
            .get(
                &[self.parent.segment(), owner, Self::NAME, client, action],
                query,
            )
            .await?)
    }
}
