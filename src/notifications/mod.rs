//! Notification templates: listing, content inspection, submission checks.

mod client;
mod types;

pub use client::NotificationsClient;
pub use types::{
    BaseCheck, BlockType, ChannelContent, Check, CheckStatus, Notification, NotificationBlock,
    NotificationBlockContent, NotificationChannelContent, NotificationContent,
    NotificationListResponse, NotificationRouting, SubmissionChecksResponse,
};
