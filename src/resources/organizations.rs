//! Organizations resource.
//!
//! Organizations are the top of the Dashboard hierarchy: they own networks,
//! inventory, licenses and administrators.
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::Dashboard;
//!
//! let dashboard = Dashboard::new("my-api-key")?;
//! let organizations = dashboard.organizations();
//!
//! // Every organization the key has access to
//! let all = organizations.list(None).await?;
//!
//! // The networks of one organization
//! let networks = organizations.networks("549236").await?;
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, RestClient};
use crate::resources::errors::{require, ResourceError};
use crate::resources::{Admins, Resource};

/// Devices, orders or a license key to claim into an organization.
///
/// At least one of `order`, `serial` or `license_key` must be set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationClaim {
    /// The order number to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,

    /// The serial of a device to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    /// The license key to claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,

    /// Either `renew` or `addDevices`. Only used together with `license_key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_mode: Option<String>,
}

/// SNMP settings for an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SnmpSettingsUpdate {
    /// Whether SNMP v2c is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v2c_enabled: Option<bool>,

    /// Whether SNMP v3 is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3_enabled: Option<bool>,

    /// `MD5` or `SHA`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3_auth_mode: Option<String>,

    /// SNMP v3 authentication password, at least 8 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3_auth_pass: Option<String>,

    /// `DES` or `AES128`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3_priv_mode: Option<String>,

    /// SNMP v3 privacy password, at least 8 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub v3_priv_pass: Option<String>,

    /// Semicolon-separated IPs allowed to query SNMP.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer_ips: Option<String>,
}

/// A third-party (non-Meraki) VPN peer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VpnPeer {
    /// Name of the peer.
    pub name: String,

    /// Public IP of the peer.
    pub public_ip: String,

    /// Subnets reachable behind the peer, in CIDR notation.
    pub private_subnets: Vec<String>,

    /// Shared secret.
    pub secret: String,

    /// Custom IPsec policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipsec_policies: Option<serde_json::Value>,

    /// A named IPsec policy preset, e.g. `default` or `aws`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipsec_policies_preset: Option<String>,

    /// Network tags the peer applies to. Defaults to `all`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_tags: Option<Vec<String>>,
}

/// Operations on `/organizations`.
#[derive(Debug, Clone)]
pub struct Organizations {
    client: Arc<RestClient>,
}

impl Resource for Organizations {
    const NAME: &'static str = "organizations";

    fn client(&self) -> &Arc<RestClient> {
        &self.client
    }
}

impl Organizations {
    /// Creates the module over a shared REST client.
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Administrators of an organization.
    #[must_use]
    pub fn admins(&self) -> Admins {
        Admins::new(Arc::clone(&self.client))
    }

    /// Lists the organizations the key has privileges on, or returns one
    /// organization when `id` is given.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Http`] on transport failures.
    pub async fn list(&self, id: Option<&str>) -> Result<ApiResponse, ResourceError> {
        let response = match id {
            Some(id) => {
                let id = require(id, ResourceError::OrganizationIdMissing)?;
                self.client.get(&[Self::NAME, id], None).await?
            }
            None => self.client.get(&[Self::NAME], None).await?,
        };
        Ok(response)
    }

    /// Creates a new organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ParameterMissing`] if `name` is empty.
    pub async fn create(&self, name: &str) -> Result<ApiResponse, ResourceError> {
        let name = require(name, ResourceError::ParameterMissing { name: "name" })?;
        let body = serde_json::json!({ "name": name });
        Ok(self.client.post(&[Self::NAME], &body).await?)
    }

    /// Renames an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] or
    /// [`ResourceError::ParameterMissing`] for missing arguments.
    pub async fn update(&self, id: &str, name: &str) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::OrganizationIdMissing)?;
        let name = require(name, ResourceError::ParameterMissing { name: "name" })?;
        let body = serde_json::json!({ "name": name });
        Ok(self.client.put(&[Self::NAME, id], &body).await?)
    }

    /// Creates a new organization by cloning `id` (`organizations/{id}/clone`).
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] or
    /// [`ResourceError::ParameterMissing`] for missing arguments.
    pub async fn clone_organization(&self, id: &str, name: &str) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::OrganizationIdMissing)?;
        let name = require(name, ResourceError::ParameterMissing { name: "name" })?;
        let body = serde_json::json!({ "name": name });
        Ok(self.client.post(&[Self::NAME, id, "clone"], &body).await?)
    }

    /// Claims devices, an order or a license key into the organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ParameterMissing`] if the claim names nothing.
    pub async fn claim(
        &self,
        id: &str,
        claim: &OrganizationClaim,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::OrganizationIdMissing)?;
        let missing = || ResourceError::ParameterMissing {
            name: "order, serial or licenseKey",
        };
        if [&claim.order, &claim.serial, &claim.license_key]
            .into_iter()
            .all(|value| require(value.as_deref().unwrap_or_default(), missing()).is_err())
        {
            return Err(missing());
        }
        Ok(self.client.post(&[Self::NAME, id, "claim"], claim).await?)
    }

    /// Returns the license state.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn license_state(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "licenseState").await
    }

    /// Returns the device inventory.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn inventory(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "inventory").await
    }

    /// Returns the status of every device.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn device_statuses(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "deviceStatuses").await
    }

    /// Returns the SNMP settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn snmp(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "snmp").await
    }

    /// Updates the SNMP settings.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn update_snmp(
        &self,
        id: &str,
        settings: &SnmpSettingsUpdate,
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::OrganizationIdMissing)?;
        Ok(self.client.put(&[Self::NAME, id, "snmp"], settings).await?)
    }

    /// Returns the third-party VPN peers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn third_party_vpn_peers(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "thirdPartyVPNPeers").await
    }

    /// Replaces the third-party VPN peers.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn update_third_party_vpn_peers(
        &self,
        id: &str,
        peers: &[VpnPeer],
    ) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::OrganizationIdMissing)?;
        let body = serde_json::json!({ "peers": peers });
        Ok(self
            .client
            .put(&[Self::NAME, id, "thirdPartyVPNPeers"], &body)
            .await?)
    }

    /// Lists the networks in an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `id` is empty.
    pub async fn networks(&self, id: &str) -> Result<ApiResponse, ResourceError> {
        self.get_action(id, "networks").await
    }

    async fn get_action(&self, id: &str, action: &str) -> Result<ApiResponse, ResourceError> {
        let id = require(id, ResourceError::OrganizationIdMissing)?;
        Ok(self.client.get(&[Self::NAME, id, action], None).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::tests::test_client;

    #[tokio::test]
    async fn test_missing_organization_id_is_rejected() {
        let organizations = Organizations::new(test_client());

        assert!(matches!(
            organizations.inventory("").await,
            Err(ResourceError::OrganizationIdMissing)
        ));
        assert!(matches!(
            organizations.list(Some("")).await,
            Err(ResourceError::OrganizationIdMissing)
        ));
        assert!(matches!(
            organizations.update_snmp("", &SnmpSettingsUpdate::default()).await,
            Err(ResourceError::OrganizationIdMissing)
        ));
    }

    #[tokio::test]
    async fn test_create_requires_name() {
        let organizations = Organizations::new(test_client());
        assert!(matches!(
            organizations.create("").await,
            Err(ResourceError::ParameterMissing { name: "name" })
        ));
    }

    #[tokio::test]
    async fn test_empty_claim_is_rejected() {
        let organizations = Organizations::new(test_client());
        let result = organizations
            .claim("549236", &OrganizationClaim::default())
            .await;
        assert!(matches!(result, Err(ResourceError::ParameterMissing { .. })));
    }

    #[tokio::test]
    async fn test_claim_with_only_blank_fields_is_rejected() {
        let organizations = Organizations::new(test_client());
        let claim = OrganizationClaim {
            order: Some(String::new()),
            serial: Some("  ".to_string()),
            license_key: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            organizations.claim("549236", &claim).await,
            Err(ResourceError::ParameterMissing {
                name: "order, serial or licenseKey"
            })
        ));
    }

    #[tokio::test]
    async fn test_clone_organization_requires_name() {
        let organizations = Organizations::new(test_client());
        // Derived Clone stays callable with method syntax.
        let copy = organizations.clone();
        assert!(Arc::ptr_eq(copy.client(), organizations.client()));
        assert!(matches!(
            copy.clone_organization("549236", " ").await,
            Err(ResourceError::ParameterMissing { name: "name" })
        ));
    }

    #[test]
    fn test_claim_serializes_only_set_fields() {
        let claim = OrganizationClaim {
            license_key: Some("Z2XXXXXXXXXX".to_string()),
            license_mode: Some("addDevices".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&claim).unwrap(),
            serde_json::json!({"licenseKey": "Z2XXXXXXXXXX", "licenseMode": "addDevices"})
        );
    }

    #[test]
    fn test_snmp_settings_wire_names() {
        let settings = SnmpSettingsUpdate {
            v2c_enabled: Some(false),
            v3_enabled: Some(true),
            v3_auth_mode: Some("SHA".to_string()),
            peer_ips: Some("10.0.0.1;10.0.0.2".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            serde_json::json!({
                "v2cEnabled": false,
                "v3Enabled": true,
                "v3AuthMode": "SHA",
                "peerIps": "10.0.0.1;10.0.0.2"
            })
        );
    }

    #[test]
    fn test_vpn_peer_wire_names() {
        let peer = VpnPeer {
            name: "HQ".to_string(),
            public_ip: "203.0.113.10".to_string(),
            private_subnets: vec!["10.10.0.0/16".to_string()],
            secret: "s3cr3t".to_string(),
            ipsec_policies_preset: Some("default".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&peer).unwrap(),
            serde_json::json!({
                "name": "HQ",
                "publicIp": "203.0.113.10",
                "privateSubnets": ["10.10.0.0/16"],
                "secret": "s3cr3t",
                "ipsecPoliciesPreset": "default"
            })
        );
    }
}
