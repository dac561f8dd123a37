use super::types::{
    GetProfileListSubscriptionsResponse, GetProfileResponse, ProfileUpdateResponse,
    SubscribeToListsEntry,
};
use crate::transport::{path_segment, HttpTransport};
use crate::types::patch::PatchOperation;
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Client for user profiles.
pub struct ProfilesClient {
    transport: Arc<HttpTransport>,
}

#[derive(Serialize)]
struct ProfileBody<'a> {
    profile: &'a serde_json::Value,
}

#[derive(Serialize)]
struct PatchBody<'a> {
    patch: &'a [PatchOperation],
}

#[derive(Serialize)]
struct ListsBody<'a> {
    lists: &'a [SubscribeToListsEntry],
}

impl ProfilesClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, user_id: &str) -> Result<GetProfileResponse> {
        self.transport
            .get(&format!("/profiles/{}", path_segment(user_id)), &[])
            .await
    }

    /// Merge the given fields into the stored profile.
    pub async fn create(
        &self,
        user_id: &str,
        profile: &serde_json::Value,
    ) -> Result<ProfileUpdateResponse> {
        self.transport
            .post(&format!("/profiles/{}", path_segment(user_id)), &ProfileBody { profile })
            .await
    }

    /// Replace the stored profile entirely.
    pub async fn replace(
        &self,
        user_id: &str,
        profile: &serde_json::Value,
    ) -> Result<ProfileUpdateResponse> {
        self.transport
            .put(&format!("/profiles/{}", path_segment(user_id)), &ProfileBody { profile })
            .await
    }

    /// Apply JSON-patch style operations to the stored profile.
    pub async fn merge_patch(&self, user_id: &str, patch: &[PatchOperation]) -> Result<()> {
        self.transport
            .patch_empty(&format!("/profiles/{}", path_segment(user_id)), &PatchBody { patch })
            .await
    }

    pub async fn delete(&self, user_id: &str) -> Result<()> {
        self.transport
            .delete(&format!("/profiles/{}", path_segment(user_id)))
            .await
    }

    /// Page through the lists this profile subscribes to.
    pub async fn get_list_subscriptions(
        &self,
        user_id: &str,
        cursor: Option<&str>,
    ) -> Result<GetProfileListSubscriptionsResponse> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport
            .get(&format!("/profiles/{}/lists", path_segment(user_id)), &query)
            .await
    }

    /// Subscribe the profile to the given lists.
    pub async fn subscribe_to_lists(
        &self,
        user_id: &str,
        lists: &[SubscribeToListsEntry],
    ) -> Result<ProfileUpdateResponse> {
        self.transport
            .post(&format!("/profiles/{}/lists", path_segment(user_id)), &ListsBody { lists })
            .await
    }

    /// Remove the profile from every list it subscribes to.
    pub async fn delete_list_subscriptions(&self, user_id: &str) -> Result<ProfileUpdateResponse> {
        self.transport
            .delete_json(&format!("/profiles/{}/lists", path_segment(user_id)))
            .await
    }
}
