use crate::types::message::RoutingMethod;
use crate::types::paging::Paging;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A stored notification template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<NotificationRouting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRouting {
    pub method: RoutingMethod,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationListResponse {
    pub paging: Paging,
    pub results: Vec<Notification>,
}

/// Published or draft content of a notification template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotificationContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<Vec<NotificationBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<NotificationChannelContent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<NotificationBlockContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<HashMap<String, NotificationBlockContent>>,
}

/// Block content: plain text or a parent/children pair (e.g. list blocks).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationBlockContent {
    Text(String),
    ChildrenParent {
        #[serde(skip_serializing_if = "Option::is_none")]
        children: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        parent: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Action,
    Divider,
    Image,
    Jsonnet,
    List,
    Markdown,
    Quote,
    Template,
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationChannelContent {
    pub id: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ChannelContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locales: Option<HashMap<String, ChannelContent>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Resolved,
    Failed,
    Pending,
}

/// A submission check as stored by Courier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    pub id: String,
    pub status: CheckStatus,
    #[serde(rename = "type")]
    pub check_type: String,
    /// Millisecond epoch of the last update.
    pub updated: u64,
}

/// The caller-supplied part of a check, used when replacing checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseCheck {
    pub id: String,
    pub status: CheckStatus,
    #[serde(rename = "type")]
    pub check_type: String,
}

impl BaseCheck {
    pub fn custom(id: impl Into<String>, status: CheckStatus) -> Self {
        Self {
            id: id.into(),
            status,
            check_type: "custom".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionChecksResponse {
    pub checks: Vec<Check>,
}
