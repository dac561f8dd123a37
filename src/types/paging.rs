use serde::{Deserialize, Serialize};

/// Cursor-based paging block shared by all list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    pub more: bool,
}
