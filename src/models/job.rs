use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const JOB_COLUMNS: &str = "id, title, company, location, type AS job_type, salary, \
    description, requirements, employer_id, employer_email, age_range, category, \
    latitude, longitude, is_premium, responsibilities, conditions, contact_phone, \
    contact_email, created_at, updated_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub employer_id: Option<String>,
    pub employer_email: Option<String>,
    pub age_range: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_premium: bool,
    pub responsibilities: Vec<String>,
    pub conditions: Vec<String>,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fully-resolved job fields written on insert and on update. Defaults have
/// already been applied by the time this is built.
#[derive(Debug, Clone, PartialEq)]
pub struct JobFields {
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub employer_id: Option<String>,
    pub employer_email: Option<String>,
    pub age_range: String,
    pub category: String,
    pub latitude: f64,
    pub longitude: f64,
    pub is_premium: bool,
    pub responsibilities: Vec<String>,
    pub conditions: Vec<String>,
    pub contact_phone: String,
    pub contact_email: String,
}
