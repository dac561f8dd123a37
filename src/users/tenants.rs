//! Tenant memberships from the user side.

use crate::tenants::TenantAssociation;
use crate::transport::{path_segment, HttpTransport};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTenantsForUserResponse {
    #[serde(default)]
    pub items: Vec<TenantAssociation>,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub response_type: String,
}

#[derive(Serialize)]
struct TenantsBody<'a> {
    tenants: &'a [TenantAssociation],
}

#[derive(Serialize)]
struct AddToTenantBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<&'a serde_json::Value>,
}

/// Client for a user's tenant memberships.
pub struct UserTenantsClient {
    transport: Arc<HttpTransport>,
}

impl UserTenantsClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Add the user to several tenants at once.
    pub async fn add_multiple(&self, user_id: &str, tenants: &[TenantAssociation]) -> Result<()> {
        self.transport
            .put_empty(
                &format!("/users/{}/tenants", path_segment(user_id)),
                Some(&TenantsBody { tenants }),
            )
            .await
    }

    /// Add the user to a single tenant, optionally with a tenant-scoped
    /// profile.
    pub async fn add(
        &self,
        user_id: &str,
        tenant_id: &str,
        profile: Option<&serde_json::Value>,
    ) -> Result<()> {
        self.transport
            .put_empty(
                &format!(
                    "/users/{}/tenants/{}",
                    path_segment(user_id),
                    path_segment(tenant_id)
                ),
                Some(&AddToTenantBody { profile }),
            )
            .await
    }

    /// Remove the user from every tenant.
    pub async fn remove_all(&self, user_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/users/{}/tenants", path_segment(user_id)))
            .await
    }

    /// Remove the user from a single tenant.
    pub async fn remove(&self, user_id: &str, tenant_id: &str) -> Result<()> {
        self.transport
            .delete(&format!(
                "/users/{}/tenants/{}",
                path_segment(user_id),
                path_segment(tenant_id)
            ))
            .await
    }

    /// Page through the tenants the user belongs to.
    pub async fn list(
        &self,
        user_id: &str,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<ListTenantsForUserResponse> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport
            .get(&format!("/users/{}/tenants", path_segment(user_id)), &query)
            .await
    }
}
