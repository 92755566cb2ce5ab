use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const MESSAGE_COLUMNS: &str =
    "id, sender_id, receiver_id, job_id, message_text, is_read, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub job_id: Option<String>,
    pub message_text: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMessage {
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub job_id: Option<String>,
    pub message_text: String,
}

/// Latest message exchanged with one peer, as seen by a single user.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub peer_id: Uuid,
    pub last_message: Message,
    pub unread_count: i64,
}

/// One row of the windowed conversation query: the peer's latest message plus
/// the unread count over the whole exchange.
#[derive(Debug, Clone, FromRow)]
pub struct ConversationRow {
    #[sqlx(flatten)]
    pub message: Message,
    pub peer_id: Uuid,
    pub unread_count: i64,
}

impl From<ConversationRow> for Conversation {
    fn from(row: ConversationRow) -> Self {
        Self {
            peer_id: row.peer_id,
            last_message: row.message,
            unread_count: row.unread_count,
        }
    }
}
