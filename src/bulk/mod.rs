//! Bulk job lifecycle: create, ingest users, run, inspect.

mod client;
mod types;

pub use client::BulkClient;
pub use types::{
    BulkCreateJobResponse, BulkGetJobResponse, BulkGetJobUsersResponse, BulkIngestError,
    BulkIngestUsersResponse, BulkJob, BulkJobStatus, BulkJobUserStatus, BulkMessageUserResponse,
    InboundBulkEventMessage, InboundBulkMessage, InboundBulkMessageUser,
};
