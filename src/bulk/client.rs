use super::types::{
    BulkCreateJobResponse, BulkGetJobResponse, BulkGetJobUsersResponse, BulkIngestUsersResponse,
    InboundBulkMessage, InboundBulkMessageUser,
};
use crate::transport::{path_segment, HttpTransport};
use crate::Result;
use serde::Serialize;
use std::sync::Arc;

/// Client for bulk jobs.
pub struct BulkClient {
    transport: Arc<HttpTransport>,
}

#[derive(Serialize)]
struct CreateJobBody<'a> {
    message: &'a InboundBulkMessage,
}

#[derive(Serialize)]
struct IngestUsersBody<'a> {
    users: &'a [InboundBulkMessageUser],
}

impl BulkClient {
    pub(crate) fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Create a bulk job from a message definition.
    pub async fn create_job(&self, message: &InboundBulkMessage) -> Result<BulkCreateJobResponse> {
        self.transport
            .post("/bulk", &CreateJobBody { message })
            .await
    }

    /// Ingest users into an existing job.
    pub async fn ingest_users(
        &self,
        job_id: &str,
        users: &[InboundBulkMessageUser],
    ) -> Result<BulkIngestUsersResponse> {
        self.transport
            .post(&format!("/bulk/{}", path_segment(job_id)), &IngestUsersBody { users })
            .await
    }

    /// Start processing an ingested job.
    pub async fn run_job(&self, job_id: &str) -> Result<()> {
        self.transport
            .post_empty::<serde_json::Value>(&format!("/bulk/{}/run", path_segment(job_id)), None)
            .await
    }

    /// Fetch job definition and progress counters.
    pub async fn get_job(&self, job_id: &str) -> Result<BulkGetJobResponse> {
        self.transport
            .get(&format!("/bulk/{}", path_segment(job_id)), &[])
            .await
    }

    /// Page through the users of a job.
    pub async fn get_job_users(
        &self,
        job_id: &str,
        cursor: Option<&str>,
    ) -> Result<BulkGetJobUsersResponse> {
        let mut query = Vec::new();
        if let Some(cursor) = cursor {
            query.push(("cursor", cursor.to_string()));
        }
        self.transport
            .get(&format!("/bulk/{}/users", path_segment(job_id)), &query)
            .await
    }
}
