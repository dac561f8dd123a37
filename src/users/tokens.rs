//! Push/device token registration for users.

use crate::transport::{path_segment, HttpTransport};
use crate::types::patch::PatchOperation;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Push provider the token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderKey {
    #[serde(rename = "firebase-fcm")]
    FirebaseFcm,
    #[serde(rename = "apn")]
    Apn,
    #[serde(rename = "expo")]
    Expo,
    #[serde(rename = "onesignal")]
    OneSignal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenStatus {
    Active,
    Unknown,
    Failed,
    Revoked,
}

/// Token expiration: an ISO 8601 timestamp, or `false` to never expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenExpiry {
    Timestamp(String),
    Never(bool),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub provider_key: ProviderKey,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<TokenExpiry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,
}

impl UserToken {
    pub fn new(provider_key: ProviderKey) -> Self {
        Self {
            token: None,
            provider_key,
            expiry_date: None,
            properties: None,
            device: None,
            tracking: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = Some(device);
        self
    }

    pub fn with_tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = Some(tracking);
        self
    }
}

/// Information about the device the token was issued for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Device {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracking {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
}

/// A stored token plus Courier's view of its validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserTokenResponse {
    #[serde(flatten)]
    pub token: UserToken,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TokenStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_reason: Option<String>,
}

#[derive(Serialize)]
struct TokensBody<'a> {
    tokens: &'a [UserToken],
}

#[derive(Serialize)]
struct PatchBody<'a> {
    patch: &'a [PatchOperation],
}

/// Client for user tokens.
pub struct UserTokensClient {
    transport: Arc<HttpTransport>,
}

impl UserTokensClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Replace every token registered for the user.
    pub async fn add_multiple(&self, user_id: &str, tokens: &[UserToken]) -> Result<()> {
        self.transport
            .put_empty(
                &format!("/users/{}/tokens", path_segment(user_id)),
                Some(&TokensBody { tokens }),
            )
            .await
    }

    /// Register (or replace) a single token.
    pub async fn add(&self, user_id: &str, token: &str, body: &UserToken) -> Result<()> {
        self.transport
            .put_empty(
                &format!(
                    "/users/{}/tokens/{}",
                    path_segment(user_id),
                    path_segment(token)
                ),
                Some(body),
            )
            .await
    }

    /// Apply JSON-patch style operations to a stored token.
    pub async fn update(
        &self,
        user_id: &str,
        token: &str,
        patch: &[PatchOperation],
    ) -> Result<()> {
        self.transport
            .patch_empty(
                &format!(
                    "/users/{}/tokens/{}",
                    path_segment(user_id),
                    path_segment(token)
                ),
                &PatchBody { patch },
            )
            .await
    }

    pub async fn get(&self, user_id: &str, token: &str) -> Result<GetUserTokenResponse> {
        self.transport
            .get(
                &format!(
                    "/users/{}/tokens/{}",
                    path_segment(user_id),
                    path_segment(token)
                ),
                &[],
            )
            .await
    }

    /// List every token registered for the user.
    pub async fn list(&self, user_id: &str) -> Result<Vec<GetUserTokenResponse>> {
        self.transport
            .get(&format!("/users/{}/tokens", path_segment(user_id)), &[])
            .await
    }

    pub async fn delete(&self, user_id: &str, token: &str) -> Result<()> {
        self.transport
            .delete(&format!(
                "/users/{}/tokens/{}",
                path_segment(user_id),
                path_segment(token)
            ))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_key_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProviderKey::FirebaseFcm).unwrap(),
            r#""firebase-fcm""#
        );
        assert_eq!(
            serde_json::to_string(&ProviderKey::OneSignal).unwrap(),
            r#""onesignal""#
        );
    }

    #[test]
    fn expiry_accepts_timestamp_or_false() {
        let ts: TokenExpiry = serde_json::from_str(r#""2024-01-01T00:00:00Z""#).unwrap();
        assert!(matches!(ts, TokenExpiry::Timestamp(_)));
        let never: TokenExpiry = serde_json::from_str("false").unwrap();
        assert!(matches!(never, TokenExpiry::Never(false)));
    }

    #[test]
    fn get_response_flattens_token_fields() {
        let json = r#"{
            "token": "abc",
            "provider_key": "apn",
            "status": "active",
            "device": {"platform": "ios"}
        }"#;
        let resp: GetUserTokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.token.token.as_deref(), Some("abc"));
        assert_eq!(resp.token.provider_key, ProviderKey::Apn);
        assert_eq!(resp.status, Some(TokenStatus::Active));
    }
}
