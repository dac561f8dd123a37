use super::types::{
    BaseCheck, NotificationContent, NotificationListResponse, SubmissionChecksResponse,
};
use crate::transport::{path_segment, HttpTransport};
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Client for notification templates.
pub struct NotificationsClient {
    transport: Arc<HttpTransport>,
}

#[derive(Serialize)]
struct ChecksBody<'a> {
    checks: &'a [BaseCheck],
}

impl NotificationsClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List notification templates.
    pub async fn list(
        &self,
        cursor: Option<&str>,
        notes: Option<bool>,
    ) -> Result<NotificationListResponse> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        if let Some(notes) = notes {
            query.push(("notes", notes.to_string()));
        }
        self.transport.get("/notifications", &query).await
    }

    /// Fetch the published content of a template.
    pub async fn get_content(&self, notification_id: &str) -> Result<NotificationContent> {
        self.transport
            .get(&format!("/notifications/{}/content", path_segment(notification_id)), &[])
            .await
    }

    /// Fetch the draft content of a template.
    pub async fn get_draft_content(&self, notification_id: &str) -> Result<NotificationContent> {
        self.transport
            .get(
                &format!(
                    "/notifications/{}/draft/content",
                    path_segment(notification_id)
                ),
                &[],
            )
            .await
    }

    /// Fetch the checks of a submission.
    pub async fn get_submission_checks(
        &self,
        notification_id: &str,
        submission_id: &str,
    ) -> Result<SubmissionChecksResponse> {
        self.transport
            .get(
                &format!(
                    "/notifications/{}/{}/checks",
                    path_segment(notification_id),
                    path_segment(submission_id)
                ),
                &[],
            )
            .await
    }

    /// Replace the checks of a submission.
    pub async fn replace_submission_checks(
        &self,
        notification_id: &str,
        submission_id: &str,
        checks: &[BaseCheck],
    ) -> Result<SubmissionChecksResponse> {
        self.transport
            .put(
                &format!(
                    "/notifications/{}/{}/checks",
                    path_segment(notification_id),
                    path_segment(submission_id)
                ),
                &ChecksBody { checks },
            )
            .await
    }

    /// Cancel a submission by deleting its checks.
    pub async fn cancel_submission(
        &self,
        notification_id: &str,
        submission_id: &str,
    ) -> Result<()> {
        self.transport
            .delete(&format!(
                "/notifications/{}/{}/checks",
                path_segment(notification_id),
                path_segment(submission_id)
            ))
            .await
    }
}
