use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::User;

pub const DEFAULT_ROLE: &str = "user";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterUserPayload {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(alias = "full_name", alias = "fullName")]
    pub name: String,
    #[validate(range(min = 0, max = 120))]
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateUserPayload {
    pub id: Option<Uuid>,
    #[serde(alias = "test_result")]
    pub test_result: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub test_result: Option<String>,
    pub role: String,
    pub completed_test: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let role = if value.role.is_empty() {
            DEFAULT_ROLE.to_string()
        } else {
            value.role
        };
        Self {
            id: value.id,
            email: value.email,
            name: value.full_name,
            age: value.age,
            phone: value.phone,
            completed_test: value.test_result.as_deref().is_some_and(|r| !r.is_empty()),
            test_result: value.test_result,
            role,
            created_at: value.created_at,
        }
    }
}
