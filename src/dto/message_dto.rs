use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::message::{Conversation, CreateMessage, Message};
use crate::utils::validation::{non_blank, required};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SendMessagePayload {
    #[serde(alias = "senderId")]
    pub sender_id: Option<Uuid>,
    #[serde(alias = "receiverId")]
    pub receiver_id: Option<Uuid>,
    #[serde(alias = "jobId", deserialize_with = "super::lenient_string")]
    pub job_id: Option<String>,
    #[serde(alias = "messageText")]
    #[validate(length(min = 1, message = "message_text is required"))]
    pub message_text: String,
}

impl SendMessagePayload {
    pub fn into_create(self) -> Result<CreateMessage> {
        Ok(CreateMessage {
            sender_id: required(self.sender_id, "sender_id")?,
            receiver_id: required(self.receiver_id, "receiver_id")?,
            job_id: non_blank(self.job_id),
            message_text: self.message_text,
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkReadPayload {
    pub id: Option<Uuid>,
    #[serde(alias = "isRead")]
    pub is_read: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub job_id: Option<String>,
    pub message_text: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationResponse {
    #[serde(flatten)]
    pub message: MessageResponse,
    pub other_user_id: Uuid,
    pub unread_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageListResponse {
    pub messages: Vec<MessageResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationListResponse {
    pub conversations: Vec<ConversationResponse>,
}

impl From<Message> for MessageResponse {
    fn from(value: Message) -> Self {
        Self {
            id: value.id,
            sender_id: value.sender_id,
            receiver_id: value.receiver_id,
            job_id: value.job_id,
            message_text: value.message_text,
            is_read: value.is_read,
            created_at: value.created_at,
        }
    }
}

impl From<Conversation> for ConversationResponse {
    fn from(value: Conversation) -> Self {
        Self {
            message: value.last_message.into(),
            other_user_id: value.peer_id,
            unread_count: value.unread_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn conversation_is_flattened_with_peer() {
        let me = Uuid::new_v4();
        let peer = Uuid::new_v4();
        let conv = Conversation {
            peer_id: peer,
            last_message: Message {
                id: Uuid::new_v4(),
                sender_id: peer,
                receiver_id: me,
                job_id: None,
                message_text: "hi".into(),
                is_read: false,
                created_at: Utc::now(),
            },
            unread_count: 2,
        };
        let value = serde_json::to_value(ConversationResponse::from(conv)).unwrap();
        assert_eq!(value["otherUserId"], json!(peer));
        assert_eq!(value["messageText"], "hi");
        assert_eq!(value["unreadCount"], 2);
        assert_eq!(value["jobId"], serde_json::Value::Null);
    }

    #[test]
    fn sender_and_receiver_are_required() {
        let payload: SendMessagePayload =
            serde_json::from_value(json!({ "message_text": "hello" })).unwrap();
        assert!(payload.into_create().is_err());
    }

    #[test]
    fn blank_job_id_is_dropped() {
        let payload: SendMessagePayload = serde_json::from_value(json!({
            "senderId": Uuid::new_v4(),
            "receiverId": Uuid::new_v4(),
            "jobId": "",
            "messageText": "hello"
        }))
        .unwrap();
        assert_eq!(payload.into_create().unwrap().job_id, None);
    }
}
