use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const APPLICATION_COLUMNS: &str = "id, job_id, user_id, user_name, user_email, \
    user_phone, user_age, cover_letter, status, created_at, updated_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: Uuid,
    pub job_id: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_age: i32,
    pub cover_letter: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: String,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub user_age: i32,
    pub cover_letter: String,
    pub status: String,
}
