use serde::{Deserialize, Serialize};

/// Body returned by a successful DELETE
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub message: Option<String>,
}
