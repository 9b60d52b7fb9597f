//! Admins resource.
//!
//! Dashboard administrators belong to an organization:
//! `organizations/{org}/admins/{admin}`.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiResponse, RestClient};
use crate::resources::errors::{require, ResourceError};
use crate::resources::Resource;

const PARENT: &str = "organizations";

/// Access granted on networks carrying a tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagAccess {
    /// The network tag.
    pub tag: String,
    /// `full`, `read-only`, `guest-ambassador` or `monitor-only`.
    pub access: String,
}

/// Access granted on one network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NetworkAccess {
    /// The network ID.
    pub id: String,
    /// `full`, `read-only`, `guest-ambassador` or `monitor-only`.
    pub access: String,
}

/// Attributes of an administrator. Unset fields are left out.
///
/// Creating an admin requires `email`, `name` and `org_access`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AdminParams {
    /// Email address, which is also the login.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Organization-wide privilege: `full`, `read-only` or `none`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_access: Option<String>,

    /// Privileges on tagged networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagAccess>>,

    /// Privileges on individual networks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<NetworkAccess>>,
}

/// Operations on `organizations/{org}/admins`.
#[derive(Debug, Clone)]
pub struct Admins {
    client: Arc<RestClient>,
}

impl Resource for Admins {
    const NAME: &'static str = "admins";

    fn client(&self) -> &Arc<RestClient> {
        &self.client
    }
}

impl Admins {
    /// Creates the module over a shared REST client.
    #[must_use]
    pub const fn new(client: Arc<RestClient>) -> Self {
        Self { client }
    }

    /// Lists the administrators of an organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `org` is empty.
    pub async fn list(&self, org: &str) -> Result<ApiResponse, ResourceError> {
        let org = require(org, ResourceError::OrganizationIdMissing)?;
        Ok(self.client.get(&[PARENT, org, Self::NAME], None).await?)
    }

    /// Creates an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] if `org` is empty, or
    /// [`ResourceError::ParameterMissing`] without an email, name or
    /// organization access level.
    pub async fn create(&self, org: &str, admin: &AdminParams) -> Result<ApiResponse, ResourceError> {
        let org = require(org, ResourceError::OrganizationIdMissing)?;
        for (value, name) in [
            (&admin.email, "email"),
            (&admin.name, "name"),
            (&admin.org_access, "orgAccess"),
        ] {
            require(value.as_deref().unwrap_or_default(), ResourceError::ParameterMissing { name })?;
        }
        Ok(self.client.post(&[PARENT, org, Self::NAME], admin).await?)
    }

    /// Updates an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] or
    /// [`ResourceError::AdminIdMissing`] for missing identifiers.
    pub async fn update(
        &self,
        org: &str,
        admin_id: &str,
        admin: &AdminParams,
    ) -> Result<ApiResponse, ResourceError> {
        let (org, admin_id) = Self::identify(org, admin_id)?;
        Ok(self
            .client
            .put(&[PARENT, org, Self::NAME, admin_id], admin)
            .await?)
    }

    /// Revokes all access of an administrator within the organization.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OrganizationIdMissing`] or
    /// [`ResourceError::AdminIdMissing`] for missing identifiers.
    pub async fn delete(&self, org: &str, admin_id: &str) -> Result<ApiResponse, ResourceError> {
        let (org, admin_id) = Self::identify(org, admin_id)?;
        Ok(self.client.delete(&[PARENT, org, Self::NAME, admin_id]).await?)
    }

    fn identify<'a>(org: &'a str, admin_id: &'a str) -> Result<(&'a str, &'a str), ResourceError> {
        let org = require(org, ResourceError::OrganizationIdMissing)?;
        let admin_id = require(admin_id, ResourceError::AdminIdMissing)?;
        Ok((org, admin_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::tests::test_client;

    fn complete_admin() -> AdminParams {
        AdminParams {
            email: Some("miles@example.com".to_string()),
            name: Some("Miles".to_string()),
            org_access: Some("none".to_string()),
            tags: Some(vec![TagAccess {
                tag: "west".to_string(),
                access: "read-only".to_string(),
            }]),
            networks: None,
        }
    }

    #[tokio::test]
    async fn test_missing_identifiers() {
        let admins = Admins::new(test_client());
        assert!(matches!(
            admins.list("").await,
            Err(ResourceError::OrganizationIdMissing)
        ));
        assert!(matches!(
            admins.delete("549236", "").await,
            Err(ResourceError::AdminIdMissing)
        ));
        assert!(matches!(
            admins.update("", "212406", &AdminParams::default()).await,
            Err(ResourceError::OrganizationIdMissing)
        ));
    }

    #[tokio::test]
    async fn test_create_requires_email_name_and_org_access() {
        let admins = Admins::new(test_client());

        let admin = AdminParams {
            email: None,
            ..complete_admin()
        };
        assert!(matches!(
            admins.create("549236", &admin).await,
            Err(ResourceError::ParameterMissing { name: "email" })
        ));

        let admin = AdminParams {
            org_access: Some(String::new()),
            ..complete_admin()
        };
        assert!(matches!(
            admins.create("549236", &admin).await,
            Err(ResourceError::ParameterMissing { name: "orgAccess" })
        ));
    }

    #[test]
    fn test_admin_params_wire_names() {
        assert_eq!(
            serde_json::to_value(complete_admin()).unwrap(),
            serde_json::json!({
                "email": "miles@example.com",
                "name": "Miles",
                "orgAccess": "none",
                "tags": [{"tag": "west", "access": "read-only"}]
            })
        );
    }
}
