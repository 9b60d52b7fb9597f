//! The [`Dashboard`] entry point.
//!
//! A `Dashboard` owns one [`RestClient`] and hands out resource modules that
//! share it. Modules can be obtained through typed accessors or resolved by
//! name with [`Dashboard::module`].
//!
//! # Example
//!
//! ```rust,ignore
//! use meraki_dashboard::{Dashboard, ResourceModule};
//!
//! let dashboard = Dashboard::new("my-api-key")?;
//!
//! let organizations = dashboard.organizations().list(None).await?;
//!
//! if let ResourceModule::Networks(networks) = dashboard.module("networks")? {
//!     let network = networks.list("N_1").await?;
//! }
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::clients::RestClient;
use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::resources::{
    Admins, Clients, ClientsParent, Devices, Networks, Organizations, Resource, Ssids,
};

/// Names of the resource modules a [`Dashboard`] can resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// [`Organizations`]
    Organizations,
    /// [`Networks`]
    Networks,
    /// [`Devices`]
    Devices,
    /// [`Clients`]
    Clients,
    /// [`Ssids`]
    Ssids,
    /// [`Admins`]
    Admins,
}

impl ResourceKind {
    /// Every registered module.
    pub const ALL: [Self; 6] = [
        Self::Organizations,
        Self::Networks,
        Self::Devices,
        Self::Clients,
        Self::Ssids,
        Self::Admins,
    ];

    /// Returns the registered name of the module.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Organizations => Organizations::NAME,
            Self::Networks => Networks::NAME,
            Self::Devices => Devices::NAME,
            Self::Clients => Clients::NAME,
            Self::Ssids => Ssids::NAME,
            Self::Admins => Admins::NAME,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DashboardError::UnknownModule {
                name: s.to_string(),
            })
    }
}

/// A resource module resolved by name.
#[derive(Debug, Clone)]
pub enum ResourceModule {
    /// Organizations module.
    Organizations(Organizations),
    /// Networks module.
    Networks(Networks),
    /// Devices module, rooted at networks.
    Devices(Devices),
    /// Clients module, rooted at networks.
    Clients(Clients),
    /// SSIDs module, rooted at networks.
    Ssids(Ssids),
    /// Admins module, rooted at organizations.
    Admins(Admins),
}

impl ResourceModule {
    /// Returns which module this is.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Organizations(_) => ResourceKind::Organizations,
            Self::Networks(_) => ResourceKind::Networks,
            Self::Devices(_) => ResourceKind::Devices,
            Self::Clients(_) => ResourceKind::Clients,
            Self::Ssids(_) => ResourceKind::Ssids,
            Self::Admins(_) => ResourceKind::Admins,
        }
    }
}

/// Entry point to the Dashboard API.
///
/// Cloning is cheap; clones share the same connection pool.
///
/// # Example
///
/// ```rust
/// use meraki_dashboard::{ConfigError, Dashboard, DashboardError};
///
/// let result = Dashboard::new("");
/// assert!(matches!(result, Err(DashboardError::Config(ConfigError::EmptyApiKey))));
/// ```
#[derive(Debug, Clone)]
pub struct Dashboard {
    client: Arc<RestClient>,
}

// Verify Dashboard is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dashboard>();
};

impl Dashboard {
    /// Creates a client for `api_key` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Config`] if the key is empty, or
    /// [`DashboardError::Http`] if the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>) -> Result<Self, DashboardError> {
        let config = DashboardConfig::from_api_key(api_key)?;
        Self::with_config(&config)
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Http`] if the HTTP client cannot be built.
    pub fn with_config(config: &DashboardConfig) -> Result<Self, DashboardError> {
        let client = RestClient::new(config)?;
        tracing::debug!(base_url = %config.base_url(), "Dashboard client created");
        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Returns the shared REST client.
    #[must_use]
    pub const fn rest_client(&self) -> &Arc<RestClient> {
        &self.client
    }

    /// Organizations module.
    #[must_use]
    pub fn organizations(&self) -> Organizations {
        Organizations::new(Arc::clone(&self.client))
    }

    /// Networks module.
    #[must_use]
    pub fn networks(&self) -> Networks {
        Networks::new(Arc::clone(&self.client))
    }

    /// Devices module, rooted at networks.
    #[must_use]
    pub fn devices(&self) -> Devices {
        Devices::new(Arc::clone(&self.client))
    }

    /// Clients module, rooted at networks.
    #[must_use]
    pub fn clients(&self) -> Clients {
        Clients::new(Arc::clone(&self.client), ClientsParent::Networks)
    }

    /// SSIDs module, rooted at networks.
    #[must_use]
    pub fn ssids(&self) -> Ssids {
        Ssids::new(Arc::clone(&self.client))
    }

    /// Admins module, rooted at organizations.
    #[must_use]
    pub fn admins(&self) -> Admins {
        Admins::new(Arc::clone(&self.client))
    }

    /// Resolves a module by its registered name.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::UnknownModule`] if no module has that name.
    pub fn module(&self, name: &str) -> Result<ResourceModule, DashboardError> {
        let module = match name.parse::<ResourceKind>()? {
            ResourceKind::Organizations => ResourceModule::Organizations(self.organizations()),
            ResourceKind::Networks => ResourceModule::Networks(self.networks()),
            ResourceKind::Devices => ResourceModule::Devices(self.devices()),
            ResourceKind::Clients => ResourceModule::Clients(self.clients()),
            ResourceKind::Ssids => ResourceModule::Ssids(self.ssids()),
            ResourceKind::Admins => ResourceModule::Admins(self.admins()),
        };
        Ok(module)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_new_rejects_empty_key() {
        assert!(matches!(
            Dashboard::new(""),
            Err(DashboardError::Config(ConfigError::EmptyApiKey))
        ));
    }

    #[test]
    fn test_module_resolves_every_registered_name() {
        let dashboard = Dashboard::new("abc").unwrap();
        for kind in ResourceKind::ALL {
            let module = dashboard.module(kind.as_str()).unwrap();
            assert_eq!(module.kind(), kind);
        }
    }

    #[test]
    fn test_module_rejects_unknown_name() {
        let dashboard = Dashboard::new("abc").unwrap();
        let error = dashboard.module("switchPorts").unwrap_err();
        assert!(matches!(
            error,
            DashboardError::UnknownModule { ref name } if name == "switchPorts"
        ));
    }

    #[test]
    fn test_resource_kind_names_are_case_sensitive() {
        assert!("Networks".parse::<ResourceKind>().is_err());
        assert_eq!("ssids".parse::<ResourceKind>().unwrap(), ResourceKind::Ssids);
        assert_eq!(ResourceKind::Admins.to_string(), "admins");
    }

    #[test]
    fn test_modules_share_one_client() {
        let dashboard = Dashboard::new("abc").unwrap();
        let networks = dashboard.networks();
        let admins = dashboard.admins();
        assert!(Arc::ptr_eq(networks.client(), dashboard.rest_client()));
        assert!(Arc::ptr_eq(admins.client(), dashboard.rest_client()));
    }

    #[test]
    fn test_missing_network_id_through_facade() {
        let dashboard = Dashboard::new("abc").unwrap();
        let result = tokio_test::block_on(dashboard.networks().list(""));
        assert!(matches!(
            result,
            Err(crate::resources::ResourceError::NetworkIdMissing)
        ));
    }

    #[test]
    fn test_clients_accessor_is_rooted_at_networks() {
        let dashboard = Dashboard::new("abc").unwrap();
        assert_eq!(dashboard.clients().parent(), ClientsParent::Networks);
        assert_eq!(dashboard.devices().clients().parent(), ClientsParent::Devices);
    }
}
