use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const INTERVIEW_COLUMNS: &str = "id, user_id, job_id, user_name, user_email, user_age, \
    job_title, interview_date, location, notes, created_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub id: i64,
    pub user_id: Uuid,
    pub job_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_age: i32,
    pub job_title: String,
    pub interview_date: DateTime<Utc>,
    pub location: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInterview {
    pub user_id: Uuid,
    pub job_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_age: i32,
    pub job_title: String,
    pub interview_date: DateTime<Utc>,
    pub location: String,
    pub notes: String,
}
