use crate::types::paging::Paging;
use crate::types::preference::RecipientPreferences;
use serde::{Deserialize, Serialize};

/// A subscriber list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct List {
    pub id: String,
    pub name: String,
    /// Millisecond epoch timestamps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<u64>,
}

/// Body of `PUT /lists/{list_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPutParams {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGetAllResponse {
    pub paging: Paging,
    pub items: Vec<List>,
}

/// A recipient's membership in a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListSubscription {
    #[serde(rename = "recipientId")]
    pub recipient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<RecipientPreferences>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGetSubscriptionsResponse {
    pub paging: Paging,
    pub items: Vec<ListSubscription>,
}

/// A recipient to subscribe, used by the bulk subscription endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutSubscriptionsRecipient {
    #[serde(rename = "recipientId")]
    pub recipient_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<RecipientPreferences>,
}

impl PutSubscriptionsRecipient {
    pub fn new(recipient_id: impl Into<String>) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            preferences: None,
        }
    }

    pub fn with_preferences(mut self, preferences: RecipientPreferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}
