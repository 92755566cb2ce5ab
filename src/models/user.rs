use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Column list shared by every query returning a [`User`]; `age` is derived
/// from the stored date of birth.
pub const USER_COLUMNS: &str = "id, email, full_name, date_of_birth, \
    EXTRACT(YEAR FROM AGE(date_of_birth))::int AS age, \
    phone, test_result, role, created_at, updated_at";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub age: Option<i32>,
    pub phone: Option<String>,
    pub test_result: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user row together with its stored password hash. Only the login path
/// reads this.
#[derive(Debug, Clone, FromRow)]
pub struct UserCredentials {
    #[sqlx(flatten)]
    pub user: User,
    pub password_hash: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub role: String,
}
