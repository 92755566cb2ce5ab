use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::job_response::{JobResponse, NewJobResponse};
use crate::utils::time::{parse_flexible_datetime, to_epoch_millis};
use crate::utils::validation::{non_blank, required};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordResponsePayload {
    #[serde(alias = "user_id", deserialize_with = "super::lenient_string")]
    pub user_id: Option<String>,
    #[serde(alias = "job_id", deserialize_with = "super::lenient_string")]
    pub job_id: Option<String>,
    #[serde(alias = "user_name")]
    pub user_name: Option<String>,
    #[serde(alias = "user_email")]
    pub user_email: Option<String>,
    #[serde(alias = "user_age")]
    pub user_age: Option<i32>,
    #[serde(alias = "job_title")]
    pub job_title: Option<String>,
    #[serde(alias = "test_score")]
    pub test_score: Option<i32>,
    #[serde(alias = "test_date")]
    pub test_date: Option<String>,
}

impl RecordResponsePayload {
    pub fn into_new(self) -> Result<NewJobResponse> {
        let test_date = match non_blank(self.test_date) {
            Some(raw) => Some(
                parse_flexible_datetime(&raw)
                    .ok_or_else(|| Error::BadRequest(format!("Invalid test date: {}", raw)))?,
            ),
            None => None,
        };
        Ok(NewJobResponse {
            user_id: required(non_blank(self.user_id), "userId")?,
            job_id: required(non_blank(self.job_id), "jobId")?,
            user_name: self.user_name,
            user_email: self.user_email,
            user_age: self.user_age,
            job_title: self.job_title,
            test_score: self.test_score,
            test_date,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponseItem {
    pub user_id: String,
    pub job_id: String,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub user_age: Option<i32>,
    pub job_title: Option<String>,
    pub test_score: Option<i32>,
    pub test_date: Option<DateTime<Utc>>,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponseListResponse {
    pub responses: Vec<JobResponseItem>,
}

/// `id` is `None` when the (user, job) pair had already been recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponseRecorded {
    pub success: bool,
    pub id: Option<i64>,
}

impl From<JobResponse> for JobResponseItem {
    fn from(value: JobResponse) -> Self {
        Self {
            user_id: value.user_id,
            job_id: value.job_id,
            user_name: value.user_name,
            user_email: value.user_email,
            user_age: value.user_age,
            job_title: value.job_title,
            test_score: value.test_score,
            test_date: value.test_date,
            timestamp: to_epoch_millis(value.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_may_be_numbers() {
        let payload: RecordResponsePayload = serde_json::from_value(json!({
            "userId": 5,
            "jobId": "abc",
            "testScore": 80,
            "testDate": "2025-01-02"
        }))
        .unwrap();
        let new = payload.into_new().unwrap();
        assert_eq!(new.user_id, "5");
        assert_eq!(new.test_score, Some(80));
        assert!(new.test_date.is_some());
    }

    #[test]
    fn user_is_required() {
        let payload: RecordResponsePayload =
            serde_json::from_value(json!({ "jobId": "abc" })).unwrap();
        assert!(payload.into_new().is_err());
    }
}
