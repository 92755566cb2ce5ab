use crate::error::Result;
use crate::models::job::{Job, JobFields, JOB_COLUMNS};
use sqlx::PgPool;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, employer_id: Option<&str>) -> Result<Vec<Job>> {
        let sql = format!(
            r#"
            SELECT {}
            FROM jobs
            WHERE ($1::text IS NULL OR employer_id = $1)
            ORDER BY created_at DESC
            "#,
            JOB_COLUMNS
        );
        let jobs = sqlx::query_as::<_, Job>(&sql)
            .bind(employer_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<Job>> {
        let sql = format!("SELECT {} FROM jobs WHERE id = $1", JOB_COLUMNS);
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(job)
    }

    pub async fn create(&self, id: &str, fields: &JobFields) -> Result<String> {
        let mut tx = self.pool.begin().await?;
        let created: String = sqlx::query_scalar(
            r#"
            INSERT INTO jobs (
                id, title, company, location, type, salary, description,
                requirements, employer_id, employer_email, age_range, category,
                latitude, longitude, is_premium, responsibilities, conditions,
                contact_phone, contact_email
            ) VALUES (
                $1, $2, $3, $4, $5, $6, $7,
                $8, $9, $10, $11, $12,
                $13, $14, $15, $16, $17,
                $18, $19
            )
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.company)
        .bind(&fields.location)
        .bind(&fields.job_type)
        .bind(&fields.salary)
        .bind(&fields.description)
        .bind(&fields.requirements)
        .bind(&fields.employer_id)
        .bind(&fields.employer_email)
        .bind(&fields.age_range)
        .bind(&fields.category)
        .bind(fields.latitude)
        .bind(fields.longitude)
        .bind(fields.is_premium)
        .bind(&fields.responsibilities)
        .bind(&fields.conditions)
        .bind(&fields.contact_phone)
        .bind(&fields.contact_email)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(created)
    }

    /// Replaces every field of the job. `None` when no job has this id.
    pub async fn update(&self, id: &str, fields: &JobFields) -> Result<Option<String>> {
        let mut tx = self.pool.begin().await?;
        let updated: Option<String> = sqlx::query_scalar(
            r#"
            UPDATE jobs
            SET title = $2, company = $3, location = $4, type = $5, salary = $6,
                description = $7, requirements = $8, employer_id = $9,
                employer_email = $10, age_range = $11, category = $12,
                latitude = $13, longitude = $14, is_premium = $15,
                responsibilities = $16, conditions = $17, contact_phone = $18,
                contact_email = $19, updated_at = NOW()
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.company)
        .bind(&fields.location)
        .bind(&fields.job_type)
        .bind(&fields.salary)
        .bind(&fields.description)
        .bind(&fields.requirements)
        .bind(&fields.employer_id)
        .bind(&fields.employer_email)
        .bind(&fields.age_range)
        .bind(&fields.category)
        .bind(fields.latitude)
        .bind(fields.longitude)
        .bind(fields.is_premium)
        .bind(&fields.responsibilities)
        .bind(&fields.conditions)
        .bind(&fields.contact_phone)
        .bind(&fields.contact_email)
        .fetch_optional(&mut *tx)
        .await?;
        tx.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> Result<Option<String>> {
        let mut tx = self.pool.begin().await?;
        let deleted: Option<String> =
            sqlx::query_scalar("DELETE FROM jobs WHERE id = $1 RETURNING id")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        tx.commit().await?;

        Ok(deleted)
    }
}
