use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::{Error, Result};
use crate::models::interview::{Interview, NewInterview};
use crate::utils::time::{parse_flexible_datetime, to_epoch_millis};
use crate::utils::validation::{non_blank, required};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateInterviewPayload {
    #[serde(alias = "user_id")]
    pub user_id: Option<Uuid>,
    #[serde(alias = "job_id", deserialize_with = "super::lenient_string")]
    pub job_id: Option<String>,
    #[serde(alias = "user_name")]
    pub user_name: String,
    #[serde(alias = "user_email")]
    pub user_email: String,
    #[serde(alias = "user_age")]
    #[validate(range(min = 0, max = 120))]
    pub user_age: Option<i32>,
    #[serde(alias = "job_title")]
    pub job_title: String,
    #[serde(alias = "interview_date")]
    #[validate(length(min = 1, message = "date is required"))]
    pub date: String,
    pub location: String,
    pub notes: String,
}

impl CreateInterviewPayload {
    pub fn into_new(self) -> Result<NewInterview> {
        let interview_date = parse_flexible_datetime(&self.date)
            .ok_or_else(|| Error::BadRequest(format!("Invalid interview date: {}", self.date)))?;
        Ok(NewInterview {
            user_id: required(self.user_id, "userId")?,
            job_id: required(non_blank(self.job_id), "jobId")?,
            user_name: self.user_name,
            user_email: self.user_email,
            user_age: self.user_age.unwrap_or(0),
            job_title: self.job_title,
            interview_date,
            location: self.location,
            notes: self.notes,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub job_id: String,
    pub user_name: String,
    pub user_email: String,
    pub user_age: i32,
    pub job_title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub notes: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewCreatedResponse {
    pub id: i64,
    pub user_id: Uuid,
    pub job_id: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewListResponse {
    pub interviews: Vec<InterviewResponse>,
}

impl From<Interview> for InterviewResponse {
    fn from(value: Interview) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            job_id: value.job_id,
            user_name: value.user_name,
            user_email: value.user_email,
            user_age: value.user_age,
            job_title: value.job_title,
            date: value.interview_date,
            location: value.location,
            notes: value.notes,
            timestamp: to_epoch_millis(value.created_at),
        }
    }
}

impl From<Interview> for InterviewCreatedResponse {
    fn from(value: Interview) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            job_id: value.job_id,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_must_parse() {
        let payload: CreateInterviewPayload = serde_json::from_value(json!({
            "userId": Uuid::new_v4(),
            "jobId": 3,
            "date": "someday"
        }))
        .unwrap();
        assert!(matches!(payload.into_new(), Err(Error::BadRequest(_))));
    }

    #[test]
    fn builds_new_interview() {
        let user = Uuid::new_v4();
        let payload: CreateInterviewPayload = serde_json::from_value(json!({
            "userId": user,
            "jobId": 3,
            "userName": "Oleg",
            "userAge": 17,
            "date": "2025-06-01T12:00",
            "location": "Офис"
        }))
        .unwrap();
        let new = payload.into_new().unwrap();
        assert_eq!(new.user_id, user);
        assert_eq!(new.job_id, "3");
        assert_eq!(new.user_age, 17);
        assert_eq!(new.interview_date.to_rfc3339(), "2025-06-01T12:00:00+00:00");
    }
}
