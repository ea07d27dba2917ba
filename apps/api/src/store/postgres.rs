use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{JobDescriptionRow, NewJobDescription, NewResume, ResumeRow};
use crate::models::variant::{NewOutcome, NewVariant, OutcomeRow, VariantRow};
use crate::store::{Store, VariantFilter};

/// PostgreSQL-backed store. Schema lives in `migrations/`.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes (id, user_id, raw_text)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&resume.user_id)
        .bind(&resume.raw_text)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let row = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_resumes(&self, user_id: &str) -> Result<Vec<ResumeRow>, AppError> {
        let rows = sqlx::query_as::<_, ResumeRow>(
            "SELECT * FROM resumes WHERE user_id = $1 ORDER BY created_at, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_job_description(
        &self,
        jd: NewJobDescription,
    ) -> Result<JobDescriptionRow, AppError> {
        let row = sqlx::query_as::<_, JobDescriptionRow>(
            r#"
            INSERT INTO job_descriptions (id, platform, raw_text, extracted_signals)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&jd.platform)
        .bind(&jd.raw_text)
        .bind(&jd.extracted_signals)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_job_description(&self, id: Uuid) -> Result<Option<JobDescriptionRow>, AppError> {
        let row =
            sqlx::query_as::<_, JobDescriptionRow>("SELECT * FROM job_descriptions WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row)
    }

    async fn insert_variant(&self, variant: NewVariant) -> Result<VariantRow, AppError> {
        let row = sqlx::query_as::<_, VariantRow>(
            r#"
            INSERT INTO resume_variants
                (id, resume_id, jd_id, persona, platform, compiled_text, scores)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(variant.resume_id)
        .bind(variant.jd_id)
        .bind(&variant.persona)
        .bind(&variant.platform)
        .bind(&variant.compiled_text)
        .bind(&variant.scores)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn get_variant(&self, id: Uuid) -> Result<Option<VariantRow>, AppError> {
        let row = sqlx::query_as::<_, VariantRow>("SELECT * FROM resume_variants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn list_variants(&self, filter: VariantFilter) -> Result<Vec<VariantRow>, AppError> {
        // NULL parameters disable the corresponding filter.
        let rows = sqlx::query_as::<_, VariantRow>(
            r#"
            SELECT * FROM resume_variants
            WHERE ($1::uuid IS NULL OR resume_id = $1)
              AND ($2::uuid IS NULL OR jd_id = $2)
            ORDER BY created_at, id
            "#,
        )
        .bind(filter.resume_id)
        .bind(filter.jd_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_outcome(&self, outcome: NewOutcome) -> Result<OutcomeRow, AppError> {
        let row = sqlx::query_as::<_, OutcomeRow>(
            r#"
            INSERT INTO application_outcomes (id, variant_id, status)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(outcome.variant_id)
        .bind(&outcome.status)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn list_outcomes(&self, variant_id: Option<Uuid>) -> Result<Vec<OutcomeRow>, AppError> {
        let rows = sqlx::query_as::<_, OutcomeRow>(
            r#"
            SELECT * FROM application_outcomes
            WHERE ($1::uuid IS NULL OR variant_id = $1)
            ORDER BY recorded_at, id
            "#,
        )
        .bind(variant_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
