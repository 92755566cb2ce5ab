use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::job::{Job, JobFields};
use crate::utils::validation::{check_coordinates, non_blank, not_blank};

pub const DEFAULT_AGE_RANGE: &str = "14-17";
pub const DEFAULT_CATEGORY: &str = "Работа с людьми";
pub const DEFAULT_COORDINATES: [f64; 2] = [56.0184, 92.8672];
pub const DEFAULT_CONTACT_PHONE: &str = "+7 (391) 234-56-78";
pub const DEFAULT_CONTACT_EMAIL: &str = "hr@company.ru";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactPayload {
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Body of both job create and job update; updates replace every field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct JobPayload {
    #[serde(deserialize_with = "super::lenient_string")]
    pub id: Option<String>,
    #[validate(custom(function = "not_blank", message = "title is required"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "company is required"))]
    pub company: String,
    #[validate(custom(function = "not_blank", message = "location is required"))]
    pub location: String,
    #[serde(rename = "type", alias = "jobType", alias = "job_type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    #[serde(alias = "employer_id", deserialize_with = "super::lenient_string")]
    pub employer_id: Option<String>,
    #[serde(alias = "employer_email")]
    pub employer_email: Option<String>,
    #[serde(alias = "age_range")]
    pub age_range: Option<String>,
    pub category: Option<String>,
    pub coordinates: Option<[f64; 2]>,
    #[serde(alias = "is_premium")]
    pub is_premium: bool,
    pub responsibilities: Vec<String>,
    pub conditions: Vec<String>,
    pub contact: Option<ContactPayload>,
}

impl JobPayload {
    /// Splits off the client-supplied id and resolves every default.
    pub fn into_parts(self) -> Result<(Option<String>, JobFields)> {
        let [latitude, longitude] = self.coordinates.unwrap_or(DEFAULT_COORDINATES);
        check_coordinates([latitude, longitude])?;

        let employer_email = non_blank(self.employer_email);
        let contact = self.contact.unwrap_or_default();
        let contact_phone =
            non_blank(contact.phone).unwrap_or_else(|| DEFAULT_CONTACT_PHONE.to_string());
        let contact_email = non_blank(contact.email)
            .or_else(|| employer_email.clone())
            .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string());

        let fields = JobFields {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type: non_blank(self.job_type),
            salary: non_blank(self.salary),
            description: self.description,
            requirements: self.requirements,
            employer_id: non_blank(self.employer_id),
            employer_email,
            age_range: non_blank(self.age_range).unwrap_or_else(|| DEFAULT_AGE_RANGE.to_string()),
            category: non_blank(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            latitude,
            longitude,
            is_premium: self.is_premium,
            responsibilities: self.responsibilities,
            conditions: self.conditions,
            contact_phone,
            contact_email,
        };
        Ok((non_blank(self.id), fields))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub phone: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub requirements: Vec<String>,
    pub employer_id: Option<String>,
    pub employer_email: Option<String>,
    pub posted_date: DateTime<Utc>,
    pub age_range: String,
    pub category: String,
    pub coordinates: [f64; 2],
    pub is_premium: bool,
    pub responsibilities: Vec<String>,
    pub conditions: Vec<String>,
    pub contact: ContactResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobEnvelope {
    pub job: JobResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobIdResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDeletedResponse {
    pub id: String,
    pub message: String,
}

impl From<Job> for JobResponse {
    fn from(value: Job) -> Self {
        Self {
            id: value.id,
            title: value.title,
            company: value.company,
            location: value.location,
            job_type: value.job_type,
            salary: value.salary,
            description: value.description,
            requirements: value.requirements,
            employer_id: value.employer_id,
            employer_email: value.employer_email,
            posted_date: value.created_at,
            age_range: value.age_range,
            category: value.category,
            coordinates: [value.latitude, value.longitude],
            is_premium: value.is_premium,
            responsibilities: value.responsibilities,
            conditions: value.conditions,
            contact: ContactResponse {
                phone: value
                    .contact_phone
                    .unwrap_or_else(|| DEFAULT_CONTACT_PHONE.to_string()),
                email: value
                    .contact_email
                    .unwrap_or_else(|| DEFAULT_CONTACT_EMAIL.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> JobPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn defaults_are_applied() {
        let (id, fields) = payload(json!({
            "title": "Курьер",
            "company": "ООО Ромашка",
            "location": "Красноярск"
        }))
        .into_parts()
        .unwrap();
        assert_eq!(id, None);
        assert_eq!(fields.age_range, DEFAULT_AGE_RANGE);
        assert_eq!(fields.category, DEFAULT_CATEGORY);
        assert_eq!([fields.latitude, fields.longitude], DEFAULT_COORDINATES);
        assert_eq!(fields.contact_phone, DEFAULT_CONTACT_PHONE);
        assert_eq!(fields.contact_email, DEFAULT_CONTACT_EMAIL);
        assert!(!fields.is_premium);
    }

    #[test]
    fn contact_email_falls_back_to_employer_email() {
        let (_, fields) = payload(json!({
            "id": 42,
            "title": "t",
            "company": "c",
            "location": "l",
            "employerEmail": "boss@firm.ru",
            "contact": { "phone": "+7 900 000-00-00" }
        }))
        .into_parts()
        .unwrap();
        assert_eq!(fields.contact_email, "boss@firm.ru");
        assert_eq!(fields.contact_phone, "+7 900 000-00-00");
    }

    #[test]
    fn numeric_ids_and_type_key_are_accepted() {
        let p = payload(json!({ "id": 7, "type": "Частичная занятость" }));
        assert_eq!(p.id.as_deref(), Some("7"));
        assert_eq!(p.job_type.as_deref(), Some("Частичная занятость"));
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let result = payload(json!({
            "title": "t", "company": "c", "location": "l",
            "coordinates": [120.0, 10.0]
        }))
        .into_parts();
        assert!(result.is_err());
    }

    #[test]
    fn missing_required_fields_fail_validation() {
        let errors = payload(json!({ "title": "only title" })).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("company"));
        assert!(fields.contains_key("location"));
        assert!(!fields.contains_key("title"));
    }

    #[test]
    fn whitespace_only_required_fields_fail_validation() {
        let errors = payload(json!({ "title": "   ", "company": "\t", "location": " x " }))
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("company"));
        assert!(!fields.contains_key("location"));
    }

    #[test]
    fn response_shape_matches_client_expectations() {
        let now = Utc::now();
        let job = Job {
            id: "1".into(),
            title: "t".into(),
            company: "c".into(),
            location: "l".into(),
            job_type: Some("full".into()),
            salary: None,
            description: None,
            requirements: vec!["18+".into()],
            employer_id: None,
            employer_email: None,
            age_range: "14-17".into(),
            category: "IT".into(),
            latitude: 1.5,
            longitude: 2.5,
            is_premium: true,
            responsibilities: vec![],
            conditions: vec![],
            contact_phone: None,
            contact_email: Some("x@y.ru".into()),
            created_at: now,
            updated_at: now,
        };
        let value = serde_json::to_value(JobResponse::from(job)).unwrap();
        assert_eq!(value["type"], "full");
        assert_eq!(value["coordinates"], json!([1.5, 2.5]));
        assert_eq!(value["isPremium"], true);
        assert_eq!(value["contact"]["phone"], DEFAULT_CONTACT_PHONE);
        assert_eq!(value["contact"]["email"], "x@y.ru");
        assert!(value.get("postedDate").is_some());
    }
}
