use serde::{Deserialize, Serialize};

/// Response of `POST /send`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessageResponse {
    /// Courier-assigned id for the accepted request. Deliveries derived from
    /// it show up in the message log.
    #[serde(rename = "requestId")]
    pub request_id: String,
}
