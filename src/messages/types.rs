use crate::types::paging::Paging;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a message in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageStatus {
    Canceled,
    Clicked,
    Delayed,
    Delivered,
    Digested,
    Enqueued,
    Filtered,
    Opened,
    Routed,
    Sent,
    Simulated,
    Throttled,
    Undeliverable,
    Unmapped,
    Unroutable,
}

/// Why a message ended up undeliverable or filtered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    Bounced,
    Failed,
    Filtered,
    NoChannels,
    NoProviders,
    OptedOut,
    ProviderError,
    Unpublished,
    Unsubscribed,
}

/// A message log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDetails {
    pub id: String,
    pub status: MessageStatus,
    /// Millisecond epoch timestamps for each lifecycle transition; zero when
    /// the transition has not happened.
    #[serde(default)]
    pub enqueued: u64,
    #[serde(default)]
    pub sent: u64,
    #[serde(default)]
    pub delivered: u64,
    #[serde(default)]
    pub opened: u64,
    #[serde(default)]
    pub clicked: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

/// Filters for `GET /messages`.
#[derive(Debug, Clone, Default)]
pub struct ListMessagesParams {
    pub archived: Option<bool>,
    pub cursor: Option<String>,
    pub event: Option<String>,
    pub list_id: Option<String>,
    pub message_id: Option<String>,
    pub notification: Option<String>,
    pub statuses: Vec<String>,
    pub tags: Vec<String>,
    pub enqueued_after: Option<String>,
}

impl ListMessagesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = Some(archived);
        self
    }

    pub fn with_cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn with_event(mut self, event: impl Into<String>) -> Self {
        self.event = Some(event.into());
        self
    }

    pub fn with_list_id(mut self, list_id: impl Into<String>) -> Self {
        self.list_id = Some(list_id.into());
        self
    }

    pub fn with_message_id(mut self, message_id: impl Into<String>) -> Self {
        self.message_id = Some(message_id.into());
        self
    }

    pub fn with_notification(mut self, notification: impl Into<String>) -> Self {
        self.notification = Some(notification.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.statuses.push(status.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_enqueued_after(mut self, enqueued_after: impl Into<String>) -> Self {
        self.enqueued_after = Some(enqueued_after.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(archived) = self.archived {
            query.push(("archived", archived.to_string()));
        }
        if let Some(ref cursor) = self.cursor {
            query.push(("cursor", cursor.clone()));
        }
        if let Some(ref event) = self.event {
            query.push(("event", event.clone()));
        }
        if let Some(ref list_id) = self.list_id {
            query.push(("list", list_id.clone()));
        }
        if let Some(ref message_id) = self.message_id {
            query.push(("messageId", message_id.clone()));
        }
        if let Some(ref notification) = self.notification {
            query.push(("notification", notification.clone()));
        }
        for status in &self.statuses {
            query.push(("status", status.clone()));
        }
        for tag in &self.tags {
            query.push(("tag", tag.clone()));
        }
        if let Some(ref enqueued_after) = self.enqueued_after {
            query.push(("enqueued_after", enqueued_after.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessagesResponse {
    pub paging: Paging,
    pub results: Vec<MessageDetails>,
}

/// History events are heterogeneous records; shape varies by event type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageHistoryResponse {
    pub results: Vec<serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageContentResponse {
    pub results: Vec<RenderedMessageOutput>,
}

/// Rendered output for one channel of a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedMessageOutput {
    pub channel: String,
    pub channel_id: String,
    pub content: RenderedMessageContent,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderedMessageContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<serde_json::Value>>,
}
