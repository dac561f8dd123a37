use super::types::{
    ListMessagesParams, ListMessagesResponse, MessageContentResponse, MessageDetails,
    MessageHistoryResponse,
};
use crate::transport::{path_segment, HttpTransport};
use crate::Result;
use std::sync::Arc;

/// Client for the message log.
pub struct MessagesClient {
    transport: Arc<HttpTransport>,
}

impl MessagesClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List messages matching the given filters.
    pub async fn list(&self, params: &ListMessagesParams) -> Result<ListMessagesResponse> {
        self.transport.get("/messages", &params.to_query()).await
    }

    /// Fetch a single message by id.
    pub async fn get(&self, message_id: &str) -> Result<MessageDetails> {
        self.transport
            .get(&format!("/messages/{}", path_segment(message_id)), &[])
            .await
    }

    /// Cancel a message that has not yet been sent.
    pub async fn cancel(&self, message_id: &str) -> Result<MessageDetails> {
        self.transport
            .post(
                &format!("/messages/{}/cancel", path_segment(message_id)),
                &serde_json::json!({}),
            )
            .await
    }

    /// Fetch the delivery history of a message. `event_type` narrows the
    /// history to one event kind (e.g. `"DELIVERED"`).
    pub async fn get_history(
        &self,
        message_id: &str,
        event_type: Option<&str>,
    ) -> Result<MessageHistoryResponse> {
        let mut query = Vec::new();
        if let Some(event_type) = event_type {
            query.push(("type", event_type.to_string()));
        }
        self.transport
            .get(
                &format!("/messages/{}/history", path_segment(message_id)),
                &query,
            )
            .await
    }

    /// Fetch the rendered per-channel output of a message.
    pub async fn get_content(&self, message_id: &str) -> Result<MessageContentResponse> {
        self.transport
            .get(&format!("/messages/{}/output", path_segment(message_id)), &[])
            .await
    }

    /// Archive every message created by the given send request.
    pub async fn archive(&self, request_id: &str) -> Result<()> {
        self.transport
            .put_empty::<serde_json::Value>(
                &format!("/requests/{}/archive", path_segment(request_id)),
                None,
            )
            .await
    }
}
