use crate::types::message::Message;
use crate::types::paging::Paging;
use crate::types::preference::RecipientPreferences;
use crate::types::recipient::UserRecipient;
use serde::{Deserialize, Serialize};

/// The message template of a bulk job.
///
/// Either a v2 message (content or template, no `to` — recipients come from
/// the ingested users) or the legacy event-keyed shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InboundBulkMessage {
    V2(Message),
    V1(InboundBulkEventMessage),
}

/// Legacy bulk message keyed by event id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InboundBulkEventMessage {
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub r#override: Option<serde_json::Value>,
}

/// A user ingested into a bulk job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundBulkMessageUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<RecipientPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<UserRecipient>,
}

impl InboundBulkMessageUser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn with_profile(mut self, profile: serde_json::Value) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_to(mut self, to: UserRecipient) -> Self {
        self.to = Some(to);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulkJobStatus {
    Created,
    Processing,
    Completed,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BulkJobUserStatus {
    Pending,
    Enqueued,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkCreateJobResponse {
    #[serde(rename = "jobId")]
    pub job_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkIngestUsersResponse {
    pub total: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<BulkIngestError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkIngestError {
    pub user: serde_json::Value,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkJob {
    pub definition: InboundBulkMessage,
    pub enqueued: u64,
    pub failures: u64,
    pub received: u64,
    pub status: BulkJobStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkGetJobResponse {
    pub job: BulkJob,
}

/// An ingested user plus its processing state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkMessageUserResponse {
    #[serde(flatten)]
    pub user: InboundBulkMessageUser,
    pub status: BulkJobUserStatus,
    #[serde(rename = "messageId", skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkGetJobUsersResponse {
    pub items: Vec<BulkMessageUserResponse>,
    pub paging: Paging,
}
