use super::types::{Automation, AutomationInvokeParams, AutomationInvokeResponse};
use crate::transport::{path_segment, HttpTransport};
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Client for automation invocation.
pub struct AutomationsClient {
    transport: Arc<HttpTransport>,
}

#[derive(Serialize)]
struct AdHocInvokeBody<'a> {
    automation: &'a Automation,
    #[serde(flatten)]
    params: &'a AutomationInvokeParams,
}

impl AutomationsClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Invoke an ad-hoc automation defined inline.
    pub async fn invoke(
        &self,
        automation: &Automation,
        params: &AutomationInvokeParams,
    ) -> Result<AutomationInvokeResponse> {
        self.transport
            .post("/automations/invoke", &AdHocInvokeBody { automation, params })
            .await
    }

    /// Invoke an ad-hoc automation with an idempotency key. Re-invoking with
    /// the same key within Courier's dedup window returns the original run id
    /// instead of starting another run.
    pub async fn invoke_with_idempotency_key(
        &self,
        automation: &Automation,
        params: &AutomationInvokeParams,
        idempotency_key: &str,
    ) -> Result<AutomationInvokeResponse> {
        self.transport
            .post_with_idempotency(
                "/automations/invoke",
                &AdHocInvokeBody { automation, params },
                Some(idempotency_key),
            )
            .await
    }

    /// Invoke a stored automation template.
    pub async fn invoke_template(
        &self,
        template_id: &str,
        params: &AutomationInvokeParams,
    ) -> Result<AutomationInvokeResponse> {
        self.transport
            .post(
                &format!("/automations/{}/invoke", path_segment(template_id)),
                params,
            )
            .await
    }

    /// Invoke a stored automation template with an idempotency key.
    pub async fn invoke_template_with_idempotency_key(
        &self,
        template_id: &str,
        params: &AutomationInvokeParams,
        idempotency_key: &str,
    ) -> Result<AutomationInvokeResponse> {
        self.transport
            .post_with_idempotency(
                &format!("/automations/{}/invoke", path_segment(template_id)),
                params,
                Some(idempotency_key),
            )
            .await
    }
}
