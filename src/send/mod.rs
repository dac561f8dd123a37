//! Message submission (`POST /send`).

mod client;
mod types;

pub use client::SendClient;
pub use types::SendMessageResponse;
