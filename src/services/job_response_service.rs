use crate::error::Result;
use crate::models::job_response::{JobResponse, NewJobResponse};
use sqlx::PgPool;

#[derive(Clone)]
pub struct JobResponseService {
    pool: PgPool,
}

impl JobResponseService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<JobResponse>> {
        let rows = sqlx::query_as::<_, JobResponse>(
            r#"
            SELECT id, user_id, job_id, user_name, user_email, user_age,
                   job_title, test_score, test_date, created_at
            FROM job_responses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Returns `None` when this user already responded to this job; the
    /// earlier response is kept untouched.
    pub async fn record(&self, response: NewJobResponse) -> Result<Option<i64>> {
        let mut tx = self.pool.begin().await?;
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            INSERT INTO job_responses (
                user_id, job_id, user_name, user_email, user_age,
                job_title, test_score, test_date
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (user_id, job_id) DO NOTHING
            RETURNING id
            "#,
        )
        .bind(&response.user_id)
        .bind(&response.job_id)
        .bind(&response.user_name)
        .bind(&response.user_email)
        .bind(response.user_age)
        .bind(&response.job_title)
        .bind(response.test_score)
        .bind(response.test_date)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(id)
    }
}
