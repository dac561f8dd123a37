use super::types::{
    Audience, AudienceListResponse, AudienceMemberListResponse, AudienceUpdateResponse,
    PutAudienceParams,
};
use crate::transport::{path_segment, HttpTransport};
use crate::Result;
use std::sync::Arc;

/// Client for audiences.
pub struct AudiencesClient {
    transport: Arc<HttpTransport>,
}

impl AudiencesClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, audience_id: &str) -> Result<Audience> {
        self.transport
            .get(&format!("/audiences/{}", path_segment(audience_id)), &[])
            .await
    }

    /// Create or update an audience. Member recalculation is asynchronous on
    /// Courier's side.
    pub async fn update(
        &self,
        audience_id: &str,
        params: &PutAudienceParams,
    ) -> Result<AudienceUpdateResponse> {
        self.transport
            .put(&format!("/audiences/{}", path_segment(audience_id)), params)
            .await
    }

    pub async fn delete(&self, audience_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/audiences/{}", path_segment(audience_id)))
            .await
    }

    /// Page through current audience members.
    pub async fn list_members(
        &self,
        audience_id: &str,
        cursor: Option<&str>,
    ) -> Result<AudienceMemberListResponse> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport
            .get(&format!("/audiences/{}/members", path_segment(audience_id)), &query)
            .await
    }

    pub async fn list(&self, cursor: Option<&str>) -> Result<AudienceListResponse> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport.get("/audiences", &query).await
    }
}
