use crate::error::Result;
use crate::models::user::{NewUser, User, UserCredentials, USER_COLUMNS};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let sql = format!("SELECT {} FROM users ORDER BY created_at DESC", USER_COLUMNS);
        let users = sqlx::query_as::<_, User>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    /// Duplicate emails surface as a unique violation, which the error layer
    /// turns into a conflict.
    pub async fn create(&self, user: NewUser) -> Result<User> {
        let sql = format!(
            r#"
            INSERT INTO users (email, password_hash, full_name, date_of_birth, phone, role)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, User>(&sql)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(user.date_of_birth)
            .bind(&user.phone)
            .bind(&user.role)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(created)
    }

    pub async fn find_credentials_by_email(&self, email: &str) -> Result<Option<UserCredentials>> {
        let sql = format!(
            "SELECT {}, password_hash FROM users WHERE email = $1",
            USER_COLUMNS
        );
        let row = sqlx::query_as::<_, UserCredentials>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn update_test_result(&self, id: Uuid, test_result: Option<&str>) -> Result<Option<User>> {
        let sql = format!(
            r#"
            UPDATE users
            SET test_result = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {}
            "#,
            USER_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query_as::<_, User>(&sql)
            .bind(test_result)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(updated)
    }
}
