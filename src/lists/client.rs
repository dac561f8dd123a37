use super::types::{
    List, ListGetAllResponse, ListGetSubscriptionsResponse, ListPutParams,
    PutSubscriptionsRecipient,
};
use crate::transport::{path_segment, HttpTransport};
use crate::types::preference::RecipientPreferences;
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Client for lists and list subscriptions.
pub struct ListsClient {
    transport: Arc<HttpTransport>,
}

#[derive(Serialize)]
struct SubscriptionsBody<'a> {
    recipients: &'a [PutSubscriptionsRecipient],
}

#[derive(Serialize)]
struct SubscribeUserBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    preferences: Option<&'a RecipientPreferences>,
}

impl ListsClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List lists, optionally filtered by an id pattern.
    pub async fn list(
        &self,
        pattern: Option<&str>,
        cursor: Option<&str>,
    ) -> Result<ListGetAllResponse> {
        let mut query = Vec::new();
        if let Some(pattern) = pattern {
            query.push(("pattern", pattern.to_string()));
        }
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport.get("/lists", &query).await
    }

    pub async fn get(&self, list_id: &str) -> Result<List> {
        self.transport.get(&format!("/lists/{}", path_segment(list_id)), &[]).await
    }

    /// Create or replace a list.
    pub async fn update(&self, list_id: &str, params: &ListPutParams) -> Result<List> {
        self.transport
            .put(&format!("/lists/{}", path_segment(list_id)), params)
            .await
    }

    /// Delete (archive) a list.
    pub async fn delete(&self, list_id: &str) -> Result<()> {
        self.transport.delete(&format!("/lists/{}", path_segment(list_id))).await
    }

    /// Restore a previously deleted list.
    pub async fn restore(&self, list_id: &str) -> Result<()> {
        self.transport
            .put_empty::<serde_json::Value>(&format!("/lists/{}/restore", path_segment(list_id)), None)
            .await
    }

    /// Page through the subscribers of a list.
    pub async fn get_subscribers(
        &self,
        list_id: &str,
        cursor: Option<&str>,
    ) -> Result<ListGetSubscriptionsResponse> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport
            .get(&format!("/lists/{}/subscriptions", path_segment(list_id)), &query)
            .await
    }

    /// Replace the full subscriber set of a list.
    pub async fn update_subscribers(
        &self,
        list_id: &str,
        recipients: &[PutSubscriptionsRecipient],
    ) -> Result<()> {
        self.transport
            .put_empty(
                &format!("/lists/{}/subscriptions", path_segment(list_id)),
                Some(&SubscriptionsBody { recipients }),
            )
            .await
    }

    /// Subscribe additional recipients without touching existing ones.
    pub async fn add_subscribers(
        &self,
        list_id: &str,
        recipients: &[PutSubscriptionsRecipient],
    ) -> Result<()> {
        self.transport
            .post_empty(
                &format!("/lists/{}/subscriptions", path_segment(list_id)),
                Some(&SubscriptionsBody { recipients }),
            )
            .await
    }

    /// Subscribe a single user, optionally with preferences.
    pub async fn subscribe(
        &self,
        list_id: &str,
        user_id: &str,
        preferences: Option<&RecipientPreferences>,
    ) -> Result<()> {
        self.transport
            .put_empty(
                &format!(
                    "/lists/{}/subscriptions/{}",
                    path_segment(list_id),
                    path_segment(user_id)
                ),
                Some(&SubscribeUserBody { preferences }),
            )
            .await
    }

    /// Remove a single user from a list.
    pub async fn unsubscribe(&self, list_id: &str, user_id: &str) -> Result<()> {
        self.transport
            .delete(&format!(
                "/lists/{}/subscriptions/{}",
                path_segment(list_id),
                path_segment(user_id)
            ))
            .await
    }
}
