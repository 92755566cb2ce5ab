use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobResponse {
    pub id: i64,
    pub user_id: String,
    pub job_id: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_age: Option<i32>,
    pub job_title: Option<String>,
    pub test_score: Option<i32>,
    pub test_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJobResponse {
    pub user_id: String,
    pub job_id: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_age: Option<i32>,
    pub job_title: Option<String>,
    pub test_score: Option<i32>,
    pub test_date: Option<DateTime<Utc>>,
}
