//! Ad-hoc and template automation invocation.

mod client;
mod types;

pub use client::AutomationsClient;
pub use types::{
    Automation, AutomationCancelStep, AutomationDelayStep, AutomationFetchDataStep,
    AutomationFetchDataWebhook, AutomationInvokeParams, AutomationInvokeResponse,
    AutomationInvokeStep, AutomationSendListStep, AutomationSendStep, AutomationStep,
    AutomationUpdateProfileStep, MergeAlgorithm,
};
