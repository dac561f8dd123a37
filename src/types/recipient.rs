//! Recipient shapes accepted by the `to` field of a message.

use serde::{Deserialize, Serialize};

/// The `to` field of a message: one recipient or a list of recipients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageRecipient {
    One(Recipient),
    Many(Vec<Recipient>),
}

impl From<Recipient> for MessageRecipient {
    fn from(r: Recipient) -> Self {
        MessageRecipient::One(r)
    }
}

impl From<Vec<Recipient>> for MessageRecipient {
    fn from(rs: Vec<Recipient>) -> Self {
        MessageRecipient::Many(rs)
    }
}

impl From<UserRecipient> for MessageRecipient {
    fn from(r: UserRecipient) -> Self {
        MessageRecipient::One(Recipient::User(r))
    }
}

/// A single recipient shape, resolved by payload inspection.
///
/// Variant order matters for untagged dispatch: [`UserRecipient`] has only
/// optional fields and therefore matches any object, so it must come last.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Recipient {
    Audience(AudienceRecipient),
    List(ListRecipient),
    ListPattern(ListPatternRecipient),
    Slack(SlackRecipient),
    MsTeams(MsTeamsRecipient),
    Pagerduty(PagerdutyRecipient),
    Webhook(WebhookRecipient),
    User(UserRecipient),
}

/// Send to every member of an audience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceRecipient {
    pub audience_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl AudienceRecipient {
    pub fn new(audience_id: impl Into<String>) -> Self {
        Self {
            audience_id: audience_id.into(),
            data: None,
        }
    }
}

/// Send to every subscriber of a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRecipient {
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ListRecipient {
    pub fn new(list_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            data: None,
        }
    }
}

/// Send to the subscribers of every list matching a pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPatternRecipient {
    pub list_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ListPatternRecipient {
    pub fn new(list_pattern: impl Into<String>) -> Self {
        Self {
            list_pattern: list_pattern.into(),
            data: None,
        }
    }
}

/// An individual user. All fields optional; identity may come from
/// `user_id`, `email`, or `phone_number`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserRecipient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<serde_json::Value>,
}

impl UserRecipient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn with_tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Deliver directly to Slack.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlackRecipient {
    pub slack: Slack,
}

/// Slack destination: channel name, member email, or member id, each paired
/// with a bot access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Slack {
    Channel { access_token: String, channel: String },
    Email { access_token: String, email: String },
    UserId { access_token: String, user_id: String },
}

/// Deliver directly to Microsoft Teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MsTeamsRecipient {
    pub ms_teams: MsTeams,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MsTeams {
    UserId {
        tenant_id: String,
        service_url: String,
        user_id: String,
    },
    Email {
        tenant_id: String,
        service_url: String,
        user_email: String,
    },
    Channel {
        tenant_id: String,
        service_url: String,
        channel_id: String,
    },
    Conversation {
        tenant_id: String,
        service_url: String,
        conversation_id: String,
    },
}

/// Deliver to an arbitrary webhook endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRecipient {
    pub webhook: WebhookProfile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookProfile {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<WebhookMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<std::collections::HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<WebhookAuthentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<WebhookProfileType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WebhookMethod {
    Post,
    Put,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WebhookProfileType {
    Limited,
    Expanded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum WebhookAuthentication {
    None,
    Basic { username: String, password: String },
    Bearer { token: String },
}

/// Deliver to PagerDuty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagerdutyRecipient {
    pub pagerduty: Pagerduty,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagerduty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routing_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}
