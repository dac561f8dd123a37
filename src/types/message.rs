//! Message shapes accepted by `POST /send`.

use super::content::Content;
use super::recipient::MessageRecipient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A message is either inline content or a reference to a stored template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Template(TemplateMessage),
    Content(ContentMessage),
}

impl From<TemplateMessage> for Message {
    fn from(m: TemplateMessage) -> Self {
        Message::Template(m)
    }
}

impl From<ContentMessage> for Message {
    fn from(m: ContentMessage) -> Self {
        Message::Content(m)
    }
}

/// Message carrying inline Elemental content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentMessage {
    pub content: Content,
    #[serde(flatten)]
    pub base: BaseMessage,
}

impl ContentMessage {
    pub fn new(content: impl Into<Content>) -> Self {
        Self {
            content: content.into(),
            base: BaseMessage::default(),
        }
    }

    pub fn with_to(mut self, to: impl Into<MessageRecipient>) -> Self {
        self.base.to = Some(to.into());
        self
    }

    pub fn with_brand_id(mut self, brand_id: impl Into<String>) -> Self {
        self.base.brand_id = Some(brand_id.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.base.data = Some(data);
        self
    }

    pub fn with_channels(mut self, channels: HashMap<String, MessageChannel>) -> Self {
        self.base.channels = Some(channels);
        self
    }

    pub fn with_providers(mut self, providers: HashMap<String, MessageProvider>) -> Self {
        self.base.providers = Some(providers);
        self
    }

    pub fn with_routing(mut self, routing: Routing) -> Self {
        self.base.routing = Some(routing);
        self
    }

    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.base.metadata = Some(metadata);
        self
    }

    pub fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.base.timeout = Some(timeout);
        self
    }

    pub fn with_delay(mut self, delay: Delay) -> Self {
        self.base.delay = Some(delay);
        self
    }

    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.base.expiry = Some(expiry);
        self
    }

    pub fn with_preferences(mut self, preferences: MessagePreferences) -> Self {
        self.base.preferences = Some(preferences);
        self
    }

    pub fn with_context(mut self, context: MessageContext) -> Self {
        self.base.context = Some(context);
        self
    }
}

/// Message referencing a stored notification template by id or alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMessage {
    pub template: String,
    #[serde(flatten)]
    pub base: BaseMessage,
}

impl TemplateMessage {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            base: BaseMessage::default(),
        }
    }

    pub fn with_to(mut self, to: impl Into<MessageRecipient>) -> Self {
        self.base.to = Some(to.into());
        self
    }

    pub fn with_brand_id(mut self, brand_id: impl Into<String>) -> Self {
        self.base.brand_id = Some(brand_id.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.base.data = Some(data);
        self
    }

    pub fn with_channels(mut self, channels: HashMap<String, MessageChannel>) -> Self {
        self.base.channels = Some(channels);
        self
    }

    pub fn with_providers(mut self, providers: HashMap<String, MessageProvider>) -> Self {
        self.base.providers = Some(providers);
        self
    }

    pub fn with_routing(mut self, routing: Routing) -> Self {
        self.base.routing = Some(routing);
        self
    }

    pub fn with_metadata(mut self, metadata: MessageMetadata) -> Self {
        self.base.metadata = Some(metadata);
        self
    }

    pub fn with_timeout(mut self, timeout: Timeout) -> Self {
        self.base.timeout = Some(timeout);
        self
    }

    pub fn with_delay(mut self, delay: Delay) -> Self {
        self.base.delay = Some(delay);
        self
    }

    pub fn with_expiry(mut self, expiry: Expiry) -> Self {
        self.base.expiry = Some(expiry);
        self
    }

    pub fn with_preferences(mut self, preferences: MessagePreferences) -> Self {
        self.base.preferences = Some(preferences);
        self
    }

    pub fn with_context(mut self, context: MessageContext) -> Self {
        self.base.context = Some(context);
        self
    }
}

/// Fields shared by both message shapes, flattened into the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BaseMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<MessageRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<HashMap<String, MessageChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<MessageContext>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry: Option<Expiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageMetadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<MessagePreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<HashMap<String, MessageProvider>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing: Option<Routing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<Timeout>,
}

/// Per-channel configuration override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Provider-specific payload passthrough.
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub r#override: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_method: Option<RoutingMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<MessageChannelTimeouts>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageChannelTimeouts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<u64>,
}

/// Per-provider configuration override.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageProvider {
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(rename = "override", skip_serializing_if = "Option::is_none")]
    pub r#override: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeouts: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageContext {
    /// Tenant whose brand and default preferences apply to this send.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
}

/// Routing across channels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routing {
    pub method: RoutingMethod,
    pub channels: Vec<RoutingChannel>,
}

impl Routing {
    pub fn single(channels: Vec<RoutingChannel>) -> Self {
        Self {
            method: RoutingMethod::Single,
            channels,
        }
    }

    pub fn all(channels: Vec<RoutingChannel>) -> Self {
        Self {
            method: RoutingMethod::All,
            channels,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMethod {
    All,
    Single,
}

/// A routing entry: a plain channel/provider name or a nested strategy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoutingChannel {
    Name(String),
    Strategy(RoutingStrategyChannel),
}

impl From<&str> for RoutingChannel {
    fn from(name: &str) -> Self {
        RoutingChannel::Name(name.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingStrategyChannel {
    pub channel: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<RoutingMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub providers: Option<Vec<String>>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
}

/// Send-time metadata attached to the message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub utm: Option<Utm>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Utm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
}

/// Delivery timeout configuration, in milliseconds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<HashMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<HashMap<String, u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub criteria: Option<TimeoutCriteria>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeoutCriteria {
    NoEscalation,
    Delivered,
    Viewed,
    Engaged,
}

/// Defer delivery by a duration (ms) or until an ISO 8601 timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Delay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expiry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<ExpiresIn>,
}

/// Either an ISO 8601 duration string or milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpiresIn {
    Duration(String),
    Milliseconds(u64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagePreferences {
    /// Topic governing whether the recipient has opted in to this send.
    pub subscription_topic_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::recipient::UserRecipient;

    #[test]
    fn template_message_flattens_base_fields() {
        let msg = TemplateMessage::new("TEMPLATE_ID")
            .with_to(UserRecipient::new().with_email("ada@example.com"))
            .with_brand_id("brand-1");
        let json = serde_json::to_value(Message::Template(msg)).unwrap();
        assert_eq!(json["template"], "TEMPLATE_ID");
        assert_eq!(json["brand_id"], "brand-1");
        assert_eq!(json["to"]["email"], "ada@example.com");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn message_union_dispatches_on_shape() {
        let template: Message =
            serde_json::from_str(r#"{"template":"T1","to":{"user_id":"u-1"}}"#).unwrap();
        assert!(matches!(template, Message::Template(_)));

        let content: Message = serde_json::from_str(
            r#"{"content":{"title":"Hi","body":"There"},"to":{"user_id":"u-1"}}"#,
        )
        .unwrap();
        assert!(matches!(content, Message::Content(_)));
    }

    #[test]
    fn routing_channels_accept_names_and_strategies() {
        let routing: Routing = serde_json::from_str(
            r#"{
                "method": "single",
                "channels": ["email", {"channel": "sms", "providers": ["twilio"]}]
            }"#,
        )
        .unwrap();
        assert_eq!(routing.method, RoutingMethod::Single);
        assert!(matches!(&routing.channels[0], RoutingChannel::Name(n) if n == "email"));
        assert!(
            matches!(&routing.channels[1], RoutingChannel::Strategy(s) if s.channel == "sms")
        );
    }

    #[test]
    fn timeout_criteria_uses_kebab_case() {
        let json = serde_json::to_string(&TimeoutCriteria::NoEscalation).unwrap();
        assert_eq!(json, r#""no-escalation""#);
    }

    #[test]
    fn expires_in_accepts_string_or_millis() {
        let s: ExpiresIn = serde_json::from_str(r#""1 day""#).unwrap();
        assert!(matches!(s, ExpiresIn::Duration(_)));
        let n: ExpiresIn = serde_json::from_str("86400000").unwrap();
        assert!(matches!(n, ExpiresIn::Milliseconds(86_400_000)));
    }
}
