//! Message log: listing, details, cancelation, history, rendered output.

mod client;
mod types;

pub use client::MessagesClient;
pub use types::{
    ListMessagesParams, ListMessagesResponse, MessageContentResponse, MessageDetails,
    MessageHistoryResponse, MessageStatus, Reason, RenderedMessageContent, RenderedMessageOutput,
};
