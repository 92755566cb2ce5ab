use serde::{Deserialize, Serialize};

/// Query string shared by every resource endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiParams {
    pub resource: Option<String>,
    pub id: Option<String>,
    #[serde(alias = "jobId")]
    pub job_id: Option<String>,
    #[serde(alias = "userId")]
    pub user_id: Option<String>,
    #[serde(alias = "senderId")]
    pub sender_id: Option<String>,
    #[serde(alias = "receiverId")]
    pub receiver_id: Option<String>,
    #[serde(alias = "employerId")]
    pub employer_id: Option<String>,
}

/// Body used by delete requests that carry the target id in JSON.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdPayload {
    #[serde(deserialize_with = "super::lenient_string")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
