use crate::types::preference::{ChannelClassification, PreferenceStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tenant {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_preferences: Option<DefaultPreferences>,
    /// Arbitrary account-defined properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    /// Profile fields merged into every member's profile at send time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
}

/// Topic defaults applied to members who have not set their own preference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultPreferences {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SubscriptionTopic>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionTopic {
    pub id: String,
    pub status: PreferenceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_custom_routing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_routing: Option<Vec<ChannelClassification>>,
}

/// Body of `PUT /tenants/{tenant_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutTenantParams {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_tenant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_preferences: Option<DefaultPreferences>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
}

impl PutTenantParams {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_tenant_id: None,
            default_preferences: None,
            properties: None,
            user_profile: None,
            brand_id: None,
        }
    }

    pub fn with_parent_tenant_id(mut self, parent: impl Into<String>) -> Self {
        self.parent_tenant_id = Some(parent.into());
        self
    }

    pub fn with_default_preferences(mut self, prefs: DefaultPreferences) -> Self {
        self.default_preferences = Some(prefs);
        self
    }

    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        self.properties = Some(properties);
        self
    }

    pub fn with_user_profile(mut self, user_profile: serde_json::Value) -> Self {
        self.user_profile = Some(user_profile);
        self
    }

    pub fn with_brand_id(mut self, brand_id: impl Into<String>) -> Self {
        self.brand_id = Some(brand_id.into());
        self
    }
}

/// Tenant collection responses use an envelope rather than `Paging`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantListResponse {
    pub items: Vec<Tenant>,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub response_type: String,
}

/// A user's membership in a tenant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenantAssociation {
    pub tenant_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub association_type: Option<String>,
    /// Tenant-scoped profile fields for this user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
}

impl TenantAssociation {
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            user_id: None,
            association_type: None,
            profile: None,
        }
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_profile(mut self, profile: serde_json::Value) -> Self {
        self.profile = Some(profile);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListUsersForTenantResponse {
    #[serde(default)]
    pub items: Vec<TenantAssociation>,
    pub has_more: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    pub url: String,
    #[serde(rename = "type")]
    pub response_type: String,
}

/// Body of `PUT /tenants/{id}/default_preferences/items/{topic_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutDefaultPreferencesParams {
    pub status: PreferenceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_custom_routing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_routing: Option<Vec<ChannelClassification>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tenant_list_envelope_fixture() {
        let json = r#"{
            "items": [{"id": "tenant-1", "name": "Acme"}],
            "has_more": false,
            "url": "/tenants",
            "type": "list"
        }"#;
        let resp: TenantListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.items[0].id, "tenant-1");
        assert_eq!(resp.response_type, "list");
    }

    #[test]
    fn default_preferences_serialize() {
        let params = PutDefaultPreferencesParams {
            status: PreferenceStatus::OptedIn,
            has_custom_routing: Some(true),
            custom_routing: Some(vec![ChannelClassification::Inbox]),
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["status"], "OPTED_IN");
        assert_eq!(json["custom_routing"][0], "inbox");
    }
}
