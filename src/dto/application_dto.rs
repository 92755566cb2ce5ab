use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::application::{Application, NewApplication};
use crate::utils::validation::{non_blank, not_blank, required};

pub const DEFAULT_STATUS: &str = "pending";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct CreateApplicationPayload {
    #[serde(alias = "jobId", deserialize_with = "super::lenient_string")]
    pub job_id: Option<String>,
    #[serde(alias = "userId")]
    pub user_id: Option<Uuid>,
    #[serde(alias = "userName")]
    pub user_name: String,
    #[serde(alias = "userEmail")]
    pub user_email: String,
    #[serde(alias = "userPhone")]
    pub user_phone: String,
    #[serde(alias = "userAge")]
    #[validate(range(min = 0, max = 120))]
    pub user_age: Option<i32>,
    #[serde(alias = "coverLetter")]
    pub cover_letter: String,
    pub status: Option<String>,
}

impl CreateApplicationPayload {
    pub fn into_new(self) -> Result<NewApplication> {
        Ok(NewApplication {
            job_id: required(non_blank(self.job_id), "job_id")?,
            user_id: required(self.user_id, "user_id")?,
            user_name: self.user_name,
            user_email: self.user_email,
            user_phone: self.user_phone,
            user_age: self.user_age.unwrap_or(0),
            cover_letter: self.cover_letter,
            status: non_blank(self.status).unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateApplicationStatusPayload {
    pub id: Option<Uuid>,
    #[validate(custom(function = "not_blank", message = "status is required"))]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
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

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationResponse>,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            job_id: value.job_id,
            user_id: value.user_id,
            user_name: value.user_name,
            user_email: value.user_email,
            user_phone: value.user_phone,
            user_age: value.user_age,
            cover_letter: value.cover_letter,
            status: value.status,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;

    #[test]
    fn status_defaults_to_pending() {
        let payload: CreateApplicationPayload = serde_json::from_value(json!({
            "job_id": "12",
            "user_id": "2cd84131-6e83-4c98-91ba-f9b9a5f0a06c",
            "user_name": "Ivan"
        }))
        .unwrap();
        let new = payload.into_new().unwrap();
        assert_eq!(new.status, DEFAULT_STATUS);
        assert_eq!(new.job_id, "12");
        assert_eq!(new.user_age, 0);
    }

    #[test]
    fn camel_case_keys_and_numeric_job_ids_work() {
        let payload: CreateApplicationPayload = serde_json::from_value(json!({
            "jobId": 12,
            "userId": "2cd84131-6e83-4c98-91ba-f9b9a5f0a06c",
            "coverLetter": "Hello"
        }))
        .unwrap();
        assert_eq!(payload.job_id.as_deref(), Some("12"));
        assert_eq!(payload.cover_letter, "Hello");
    }

    #[test]
    fn job_and_user_are_required() {
        let payload = CreateApplicationPayload::default();
        match payload.into_new() {
            Err(Error::BadRequest(msg)) => assert!(msg.contains("job_id")),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn blank_status_fails_validation() {
        let payload: UpdateApplicationStatusPayload = serde_json::from_value(json!({
            "id": "2cd84131-6e83-4c98-91ba-f9b9a5f0a06c",
            "status": "   "
        }))
        .unwrap();
        assert!(payload.validate().unwrap_err().field_errors().contains_key("status"));
    }
}
