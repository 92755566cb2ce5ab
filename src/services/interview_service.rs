use crate::error::Result;
use crate::models::interview::{Interview, NewInterview, INTERVIEW_COLUMNS};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct InterviewService {
    pool: PgPool,
}

impl InterviewService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, user_id: Option<Uuid>, job_id: Option<&str>) -> Result<Vec<Interview>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM interviews
            WHERE ($1::uuid IS NULL OR user_id = $1)
              AND ($2::text IS NULL OR job_id = $2)
            ORDER BY interview_date DESC
            "#,
            INTERVIEW_COLUMNS
        );
        let interviews = sqlx::query_as::<_, Interview>(&sql)
            .bind(user_id)
            .bind(job_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(interviews)
    }

    pub async fn create(&self, interview: NewInterview) -> Result<Interview> {
        let sql = format!(
            r#"
            INSERT INTO interviews (
                user_id, job_id, user_name, user_email, user_age,
                job_title, interview_date, location, notes
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            INTERVIEW_COLUMNS
        );

        let mut tx = self.pool.begin().await?;
        let created = sqlx::query_as::<_, Interview>(&sql)
            .bind(interview.user_id)
            .bind(&interview.job_id)
            .bind(&interview.user_name)
            .bind(&interview.user_email)
            .bind(interview.user_age)
            .bind(&interview.job_title)
            .bind(interview.interview_date)
            .bind(&interview.location)
            .bind(&interview.notes)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(created)
    }

    pub async fn delete(&self, id: i64) -> Result<bool> {
        let mut tx = self.pool.begin().await?;
        let res = sqlx::query("DELETE FROM interviews WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(res.rows_affected() > 0)
    }
}
