//! Per-user subscription topic preferences.

use crate::transport::{path_segment, HttpTransport};
use crate::types::paging::Paging;
use crate::types::preference::{ChannelClassification, PreferenceStatus, TopicPreference};
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferencesListResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
    pub items: Vec<TopicPreference>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferencesGetResponse {
    pub topic: TopicPreference,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferencesUpdateResponse {
    pub message: String,
}

/// The caller-settable part of a topic preference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicPreferenceUpdate {
    pub status: PreferenceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_custom_routing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_routing: Option<Vec<ChannelClassification>>,
}

impl TopicPreferenceUpdate {
    pub fn new(status: PreferenceStatus) -> Self {
        Self {
            status,
            has_custom_routing: None,
            custom_routing: None,
        }
    }

    pub fn with_custom_routing(mut self, routing: Vec<ChannelClassification>) -> Self {
        self.has_custom_routing = Some(true);
        self.custom_routing = Some(routing);
        self
    }
}

#[derive(Serialize)]
struct TopicBody<'a> {
    topic: &'a TopicPreferenceUpdate,
}

/// Client for user preferences.
pub struct UserPreferencesClient {
    transport: Arc<HttpTransport>,
}

impl UserPreferencesClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List every topic preference of a user. `tenant_id` scopes the lookup
    /// to preferences within that tenant.
    pub async fn list(
        &self,
        user_id: &str,
        tenant_id: Option<&str>,
    ) -> Result<UserPreferencesListResponse> {
        let mut query = Vec::new();
        if let Some(tenant_id) = tenant_id {
            query.push(("tenant_id", tenant_id.to_string()));
        }
        self.transport
            .get(&format!("/users/{}/preferences", path_segment(user_id)), &query)
            .await
    }

    /// Fetch the preference for one topic.
    pub async fn get_topic(
        &self,
        user_id: &str,
        topic_id: &str,
    ) -> Result<UserPreferencesGetResponse> {
        self.transport
            .get(
                &format!(
                    "/users/{}/preferences/{}",
                    path_segment(user_id),
                    path_segment(topic_id)
                ),
                &[],
            )
            .await
    }

    /// Create or replace the preference for one topic.
    pub async fn update_topic(
        &self,
        user_id: &str,
        topic_id: &str,
        topic: &TopicPreferenceUpdate,
    ) -> Result<UserPreferencesUpdateResponse> {
        self.transport
            .put(
                &format!(
                    "/users/{}/preferences/{}",
                    path_segment(user_id),
                    path_segment(topic_id)
                ),
                &TopicBody { topic },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_body_nests_under_topic() {
        let update = TopicPreferenceUpdate::new(PreferenceStatus::OptedIn)
            .with_custom_routing(vec![ChannelClassification::Sms]);
        let body = serde_json::to_value(TopicBody { topic: &update }).unwrap();
        assert_eq!(body["topic"]["status"], "OPTED_IN");
        assert_eq!(body["topic"]["has_custom_routing"], true);
        assert_eq!(body["topic"]["custom_routing"][0], "sms");
    }
}
