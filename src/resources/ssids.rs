//! SSIDs resource.
//!
//! SSIDs are numbered 0 through 14 within a network. Their attributes are
//! passed through as free-form JSON.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::clients::{ApiResponse, RestClient};
use crate::resources::errors::{require, ResourceError};
use crate::resources::Resource;

const PARENT: &str = "networks";

/// Operations on `networks/{network}/ssids`.
#[derive(Debug, Clone)]
pub struct Ssids {
    client: Arc<RestClient>,
}

impl Resource for Ssids {
    const NAME: &'static str = "ssids";

    fn client(&self) -> &Arc<RestClient> {
        &self.client
    }
}

impl Ssids {
    /// Creates the module over a shared REST client.
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists the SSIDs of a network.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `network` is empty.
    pub async fn list(&self, network: &str) -> Result<ApiResponse, ResourceError> {
        let network = require(network, ResourceError::NetworkIdMissing)?;
        Ok(self.client.get(&[PARENT, network, Self::NAME], None).await?)
    }

    /// Returns one SSID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `network` is empty.
    pub async fn get(&self, network: &str, number: u8) -> Result<ApiResponse, ResourceError> {
        let network = require(network, ResourceError::NetworkIdMissing)?;
        let number = number.to_string();
        Ok(self
            .client
            .get(&[PARENT, network, Self::NAME, number.as_str()], None)
            .await?)
    }

    /// Updates the attributes of an SSID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `network` is empty.
    pub async fn update(
        &self,
        network: &str,
        number: u8,
        attributes: &Map<String, Value>,
    ) -> Result<ApiResponse, ResourceError> {
        let network = require(network, ResourceError::NetworkIdMissing)?;
        let number = number.to_string();
        Ok(self
            .client
            .put(&[PARENT, network, Self::NAME, number.as_str()], attributes)
            .await?)
    }

    /// Returns the splash page settings of an SSID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `network` is empty.
    pub async fn splash_settings(&self, network: &str, number: u8) -> Result<ApiResponse, ResourceError> {
        let network = require(network, ResourceError::NetworkIdMissing)?;
        let number = number.to_string();
        Ok(self
            .client
            .get(&[PARENT, network, Self::NAME, number.as_str(), "splashSettings"], None)
            .await?)
    }

    /// Updates the splash page settings of an SSID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::NetworkIdMissing`] if `network` is empty.
    pub async fn update_splash_settings(
        &self,
        network: &str,
        number: u8,
        settings: &Map<String, Value>,
    ) -> Result<ApiResponse, ResourceError> {
        let network = require(network, ResourceError::NetworkIdMissing)?;
        let number = number.to_string();
        Ok(self
            .client
            .put(&[PARENT, network, Self::NAME, number.as_str(), "splashSettings"], settings)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::tests::test_client;

    #[tokio::test]
    async fn test_missing_network_is_rejected() {
        let ssids = Ssids::new(test_client());
        assert!(matches!(ssids.list("").await, Err(ResourceError::NetworkIdMissing)));
        assert!(matches!(ssids.get("", 0).await, Err(ResourceError::NetworkIdMissing)));
        assert!(matches!(
            ssids.update_splash_settings("", 3, &Map::new()).await,
            Err(ResourceError::NetworkIdMissing)
        ));
    }
}
