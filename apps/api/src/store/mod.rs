//! Persistence for resumes, job descriptions, variants and outcomes.
//!
//! `AppState` holds an `Arc<dyn Store>`: `PgStore` when `DATABASE_URL` is set, `MemoryStore`
//! otherwise (and in tests). Handlers never touch SQL directly.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{JobDescriptionRow, NewJobDescription, NewResume, ResumeRow};
use crate::models::variant::{NewOutcome, NewVariant, OutcomeRow, VariantRow};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Optional filters for listing variants. `None` fields match everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariantFilter {
    pub resume_id: Option<Uuid>,
    pub jd_id: Option<Uuid>,
}

impl VariantFilter {
    pub fn matches(&self, row: &VariantRow) -> bool {
        self.resume_id.map_or(true, |id| row.resume_id == id)
            && self.jd_id.map_or(true, |id| row.jd_id == id)
    }
}

/// Storage backend. List operations return rows in creation order.
#[async_trait]
pub trait Store: Send + Sync {
    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError>;
    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError>;
    async fn list_resumes(&self, user_id: &str) -> Result<Vec<ResumeRow>, AppError>;

    async fn insert_job_description(
        &self,
        jd: NewJobDescription,
    ) -> Result<JobDescriptionRow, AppError>;
    async fn get_job_description(&self, id: Uuid) -> Result<Option<JobDescriptionRow>, AppError>;

    async fn insert_variant(&self, variant: NewVariant) -> Result<VariantRow, AppError>;
    async fn get_variant(&self, id: Uuid) -> Result<Option<VariantRow>, AppError>;
    async fn list_variants(&self, filter: VariantFilter) -> Result<Vec<VariantRow>, AppError>;

    async fn insert_outcome(&self, outcome: NewOutcome) -> Result<OutcomeRow, AppError>;
    async fn list_outcomes(&self, variant_id: Option<Uuid>) -> Result<Vec<OutcomeRow>, AppError>;
}
