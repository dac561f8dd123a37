use crate::lists::List;
use crate::types::paging::Paging;
use crate::types::preference::RecipientPreferences;
use serde::{Deserialize, Serialize};

/// Response of `GET /profiles/{user_id}`.
///
/// Profiles are free-form JSON merged from every update the account has
/// made, so the body stays untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileResponse {
    pub profile: serde_json::Value,
}

/// Response of the mutating profile endpoints, e.g. `{"status": "SUCCESS"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdateResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetProfileListSubscriptionsResponse {
    pub paging: Paging,
    pub results: Vec<List>,
}

/// A list to subscribe a profile to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscribeToListsEntry {
    #[serde(rename = "listId")]
    pub list_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<RecipientPreferences>,
}

impl SubscribeToListsEntry {
    pub fn new(list_id: impl Into<String>) -> Self {
        Self {
            list_id: list_id.into(),
            preferences: None,
        }
    }
}
