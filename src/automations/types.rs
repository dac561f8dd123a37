use crate::types::message::Message;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ad-hoc automation: an ordered list of steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Automation {
    /// Token that a later `cancel` invocation can match against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelation_token: Option<String>,
    pub steps: Vec<AutomationStep>,
}

impl Automation {
    pub fn new(steps: Vec<AutomationStep>) -> Self {
        Self {
            cancelation_token: None,
            steps,
        }
    }

    pub fn with_cancelation_token(mut self, token: impl Into<String>) -> Self {
        self.cancelation_token = Some(token.into());
        self
    }
}

/// A single automation step, dispatched on the `action` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum AutomationStep {
    Cancel(AutomationCancelStep),
    Delay(AutomationDelayStep),
    FetchData(AutomationFetchDataStep),
    Invoke(AutomationInvokeStep),
    Send(AutomationSendStep),
    SendList(AutomationSendListStep),
    UpdateProfile(AutomationUpdateProfileStep),
}

/// Cancel a previously started run by cancelation token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomationCancelStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelation_token: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

/// Pause the run for a human-readable duration or until a timestamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomationDelayStep {
    /// e.g. `"20 minutes"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// ISO 8601 timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

/// Fetch external data into the run context before later steps execute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationFetchDataStep {
    pub webhook: AutomationFetchDataWebhook,
    pub merge_strategy: MergeAlgorithm,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_expiry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationFetchDataWebhook {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

/// Start another automation template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationInvokeStep {
    pub template: String,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

/// Send a message to a single recipient.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomationSendStep {
    /// Full v2 message; takes precedence over the legacy fields below.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

/// Send a message to every subscriber of a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationSendListStep {
    pub list: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

/// Merge data into the recipient's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationUpdateProfileStep {
    pub recipient_id: String,
    pub profile: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<MergeAlgorithm>,
    #[serde(rename = "if", skip_serializing_if = "Option::is_none")]
    pub r#if: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub r#ref: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeAlgorithm {
    Replace,
    None,
    Overwrite,
    SoftMerge,
}

/// Run-level context shared by both invocation forms.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutomationInvokeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl AutomationInvokeParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_profile(mut self, profile: serde_json::Value) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Response of both invocation endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutomationInvokeResponse {
    #[serde(rename = "runId")]
    pub run_id: String,
}
