use super::types::{
    ListUsersForTenantResponse, PutDefaultPreferencesParams, PutTenantParams, Tenant,
    TenantListResponse,
};
use crate::transport::{path_segment, HttpTransport};
use crate::Result;
use std::sync::Arc;

/// Client for tenants.
pub struct TenantsClient {
    transport: Arc<HttpTransport>,
}

impl TenantsClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create or replace a tenant.
    pub async fn put(&self, tenant_id: &str, params: &PutTenantParams) -> Result<Tenant> {
        self.transport
            .put(&format!("/tenants/{}", path_segment(tenant_id)), params)
            .await
    }

    pub async fn get(&self, tenant_id: &str) -> Result<Tenant> {
        self.transport
            .get(&format!("/tenants/{}", path_segment(tenant_id)), &[])
            .await
    }

    pub async fn list(
        &self,
        limit: Option<u32>,
        cursor: Option<&str>,
        parent_tenant_id: Option<&str>,
    ) -> Result<TenantListResponse> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        if let Some(parent) = parent_tenant_id {
            query.push(("parent_tenant_id", parent.to_string()));
        }
        self.transport.get("/tenants", &query).await
    }

    pub async fn delete(&self, tenant_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/tenants/{}", path_segment(tenant_id)))
            .await
    }

    /// Page through the users associated with a tenant.
    pub async fn get_users(
        &self,
        tenant_id: &str,
        limit: Option<u32>,
        cursor: Option<&str>,
    ) -> Result<ListUsersForTenantResponse> {
        let mut query = Vec::new();
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport
            .get(&format!("/tenants/{}/users", path_segment(tenant_id)), &query)
            .await
    }

    /// Create or replace the tenant-wide default preference for a topic.
    pub async fn put_default_preferences(
        &self,
        tenant_id: &str,
        topic_id: &str,
        params: &PutDefaultPreferencesParams,
    ) -> Result<()> {
        self.transport
            .put_empty(
                &format!(
                    "/tenants/{}/default_preferences/items/{}",
                    path_segment(tenant_id),
                    path_segment(topic_id)
                ),
                Some(params),
            )
            .await
    }

    /// Remove the tenant-wide default preference for a topic.
    pub async fn delete_default_preferences(
        &self,
        tenant_id: &str,
        topic_id: &str,
    ) -> Result<()> {
        self.transport
            .delete(&format!(
                "/tenants/{}/default_preferences/items/{}",
                path_segment(tenant_id),
                path_segment(topic_id)
            ))
            .await
    }
}
