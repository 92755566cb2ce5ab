use crate::error::Result;
use crate::models::application::{Application, NewApplication, APPLICATION_COLUMNS};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, job_id: Option<&str>, user_id: Option<Uuid>) -> Result<Vec<Application>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM applications
            WHERE ($1::text IS NULL OR job_id = $1)
              AND ($2::uuid IS NULL OR user_id = $2)
            ORDER BY created_at DESC
            "#,
            APPLICATION_COLUMNS
        );
        let applications = sqlx::query_as::<_, Application>(&sql)
            .bind(job_id)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(applications)
    }

    /// The `(job_id, user_id)` unique constraint rejects a second
    /// application atomically; the error layer reports it as a conflict.
    pub async fn create(&self, application: NewApplication) -> Result<Application> {
        let sql = format!(
            r#"
            INSERT INTO applications (
                job_id, user_id, user_name, user_email, user_phone,
                user_age, cover_letter, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, Application>(&sql)
            .bind(&application.job_id)
            .bind(application.user_id)
            .bind(&application.user_name)
            .bind(&application.user_email)
            .bind(&application.user_phone)
            .bind(application.user_age)
            .bind(&application.cover_letter)
            .bind(&application.status)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(created)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<Option<Application>> {
        let sql = format!(
            r#"
            UPDATE applications
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let updated = sqlx::query_as::<_, Application>(&sql)
            .bind(status)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(res.rows_affected() > 0)
    }
}
