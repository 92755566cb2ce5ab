use sqlx::PgPool;
use uuid::Uuid;
use crate::error::Result;
use crate::models::message::{
    Conversation, ConversationRow, CreateMessage, Message, MESSAGE_COLUMNS,
};

#[derive(Clone)]
pub struct MessageService {
    pool: PgPool,
}

impl MessageService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, msg: CreateMessage) -> Result<Message> {
        let sql = format!(
            r#"
            INSERT INTO messages (sender_id, receiver_id, job_id, message_text, is_read)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING {}
            "#,
            MESSAGE_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let message = sqlx::query_as::<_, Message>(&sql)
            .bind(msg.sender_id)
            .bind(msg.receiver_id)
            .bind(&msg.job_id)
            .bind(&msg.message_text)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(message)
    }

    /// Every message between the two users regardless of direction, oldest first.
    pub async fn thread(&self, a: Uuid, b: Uuid, job_id: Option<&str>) -> Result<Vec<Message>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM messages
            WHERE ((sender_id = $1 AND receiver_id = $2)
                OR (sender_id = $2 AND receiver_id = $1))
              AND ($3::text IS NULL OR job_id = $3)
            ORDER BY created_at ASC, id ASC
            "#,
            MESSAGE_COLUMNS
        );
        let messages = sqlx::query_as::<_, Message>(&sql)
            .bind(a)
            .bind(b)
            .bind(job_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(messages)
    }

    /// Latest message per peer, newest first. Mirrors
    /// [`latest_per_peer`](crate::services::conversation::latest_per_peer)
    /// but only ships one row per peer out of the database.
    pub async fn conversations(&self, user_id: Uuid) -> Result<Vec<Conversation>> {
        let rows = sqlx::query_as::<_, ConversationRow>(
            r#"
            WITH exchanged AS (
                SELECT id, sender_id, receiver_id, job_id, message_text, is_read, created_at,
                       CASE WHEN sender_id = $1 THEN receiver_id ELSE sender_id END AS peer_id
                FROM messages
                WHERE sender_id = $1 OR receiver_id = $1
            ),
            ranked AS (
                SELECT exchanged.*,
                       ROW_NUMBER() OVER (
                           PARTITION BY peer_id ORDER BY created_at DESC, id DESC
                       ) AS recency_rank,
                       COUNT(*) FILTER (
                           WHERE receiver_id = $1 AND sender_id <> $1 AND NOT is_read
                       ) OVER (PARTITION BY peer_id) AS unread_count
                FROM exchanged
            )
            SELECT id, sender_id, receiver_id, job_id, message_text, is_read, created_at,
                   peer_id, unread_count
            FROM ranked
            WHERE recency_rank = 1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Conversation::from).collect())
    }

    /// Sets the read flag. Repeating the same call is harmless.
    pub async fn set_read(&self, id: Uuid, is_read: bool) -> Result<Option<Message>> {
        let sql = format!(
            r#"
            UPDATE messages
            SET is_read = $1
            WHERE id = $2
            RETURNING {}
            "#,
            MESSAGE_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let message = sqlx::query_as::<_, Message>(&sql)
            .bind(is_read)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(message)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}
