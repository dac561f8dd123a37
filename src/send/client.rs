use super::types::SendMessageResponse;
use crate::transport::HttpTransport;
use crate::types::message::Message;
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Client for message submission.
pub struct SendClient {
    transport: Arc<HttpTransport>,
}

#[derive(Serialize)]
struct SendBody<'a> {
    message: &'a Message,
}

impl SendClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Submit a message for delivery.
    pub async fn message(&self, message: Message) -> Result<SendMessageResponse> {
        self.transport
            .post("/send", &SendBody { message: &message })
            .await
    }

    /// Submit a message with a caller-supplied idempotency key. Resubmitting
    /// with the same key within Courier's dedup window returns the original
    /// request id instead of sending again.
    pub async fn message_with_idempotency_key(
        &self,
        message: Message,
        idempotency_key: &str,
    ) -> Result<SendMessageResponse> {
        self.transport
            .post_with_idempotency(
                "/send",
                &SendBody { message: &message },
                Some(idempotency_key),
            )
            .await
    }

    /// Submit a message with a freshly generated idempotency key, returned
    /// alongside the response so callers can retry safely.
    pub async fn message_idempotent(
        &self,
        message: Message,
    ) -> Result<(SendMessageResponse, String)> {
        let key = uuid::Uuid::new_v4().to_string();
        let resp = self
            .message_with_idempotency_key(message, &key)
            .await?;
        Ok((resp, key))
    }
}
