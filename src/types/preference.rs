//! Preference models shared by users, tenants, and list subscriptions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PreferenceStatus {
    OptedIn,
    OptedOut,
    Required,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelClassification {
    DirectMessage,
    Email,
    Push,
    Sms,
    Webhook,
    Inbox,
}

/// Time-bounded override rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    pub until: String,
}

/// A preference value for one notification or category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preference {
    pub status: PreferenceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Rule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_preferences: Option<Vec<ChannelPreference>>,
}

impl Preference {
    pub fn new(status: PreferenceStatus) -> Self {
        Self {
            status,
            rules: None,
            channel_preferences: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelPreference {
    pub channel: ChannelClassification,
}

/// Preference sets keyed by notification/category id, used when
/// subscribing recipients to lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipientPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<std::collections::HashMap<String, Preference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<std::collections::HashMap<String, Preference>>,
}

/// A user's preference for a subscription topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicPreference {
    /// Channels the user chose, in priority order. Only honored when
    /// `has_custom_routing` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_routing: Option<Vec<ChannelClassification>>,
    pub default_status: PreferenceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_custom_routing: Option<bool>,
    pub status: PreferenceStatus,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&PreferenceStatus::OptedIn).unwrap(),
            r#""OPTED_IN""#
        );
        let status: PreferenceStatus = serde_json::from_str(r#""OPTED_OUT""#).unwrap();
        assert_eq!(status, PreferenceStatus::OptedOut);
    }

    #[test]
    fn classification_uses_snake_case() {
        assert_eq!(
            serde_json::to_string(&ChannelClassification::DirectMessage).unwrap(),
            r#""direct_message""#
        );
    }

    #[test]
    fn topic_preference_round_trip() {
        let json = r#"{
            "custom_routing": ["inbox", "email"],
            "default_status": "OPTED_IN",
            "has_custom_routing": true,
            "status": "OPTED_IN",
            "topic_id": "W952NVFW9599MZHHGQ87HQ0AWKEM",
            "topic_name": "Billing"
        }"#;
        let pref: TopicPreference = serde_json::from_str(json).unwrap();
        assert_eq!(pref.topic_id, "W952NVFW9599MZHHGQ87HQ0AWKEM");
        assert_eq!(
            pref.custom_routing.as_deref(),
            Some(&[ChannelClassification::Inbox, ChannelClassification::Email][..])
        );
    }
}
