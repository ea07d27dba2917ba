use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::{JobDescriptionRow, NewJobDescription, NewResume, ResumeRow};
use crate::models::variant::{NewOutcome, NewVariant, OutcomeRow, VariantRow};
use crate::store::{Store, VariantFilter};

/// In-process store. Rows are kept in insertion order and lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Tables>,
}

#[derive(Default)]
struct Tables {
    resumes: Vec<ResumeRow>,
    job_descriptions: Vec<JobDescriptionRow>,
    variants: Vec<VariantRow>,
    outcomes: Vec<OutcomeRow>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn insert_resume(&self, resume: NewResume) -> Result<ResumeRow, AppError> {
        let row = ResumeRow {
            id: Uuid::new_v4(),
            user_id: resume.user_id,
            raw_text: resume.raw_text,
            parsed_json: None,
            created_at: Utc::now(),
        };
        self.inner.write().await.resumes.push(row.clone());
        Ok(row)
    }

    async fn get_resume(&self, id: Uuid) -> Result<Option<ResumeRow>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables.resumes.iter().find(|r| r.id == id).cloned())
    }

    async fn list_resumes(&self, user_id: &str) -> Result<Vec<ResumeRow>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables
            .resumes
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn insert_job_description(
        &self,
        jd: NewJobDescription,
    ) -> Result<JobDescriptionRow, AppError> {
        let row = JobDescriptionRow {
            id: Uuid::new_v4(),
            platform: jd.platform,
            raw_text: jd.raw_text,
            extracted_signals: Some(jd.extracted_signals),
            created_at: Utc::now(),
        };
        self.inner.write().await.job_descriptions.push(row.clone());
        Ok(row)
    }

    async fn get_job_description(&self, id: Uuid) -> Result<Option<JobDescriptionRow>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables.job_descriptions.iter().find(|j| j.id == id).cloned())
    }

    async fn insert_variant(&self, variant: NewVariant) -> Result<VariantRow, AppError> {
        let row = VariantRow {
            id: Uuid::new_v4(),
            resume_id: variant.resume_id,
            jd_id: variant.jd_id,
            persona: variant.persona,
            platform: variant.platform,
            compiled_text: variant.compiled_text,
            scores: Some(variant.scores),
            created_at: Utc::now(),
        };
        self.inner.write().await.variants.push(row.clone());
        Ok(row)
    }

    async fn get_variant(&self, id: Uuid) -> Result<Option<VariantRow>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables.variants.iter().find(|v| v.id == id).cloned())
    }

    async fn list_variants(&self, filter: VariantFilter) -> Result<Vec<VariantRow>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables
            .variants
            .iter()
            .filter(|v| filter.matches(v))
            .cloned()
            .collect())
    }

    async fn insert_outcome(&self, outcome: NewOutcome) -> Result<OutcomeRow, AppError> {
        let row = OutcomeRow {
            id: Uuid::new_v4(),
            variant_id: outcome.variant_id,
            status: outcome.status,
            recorded_at: Utc::now(),
        };
        self.inner.write().await.outcomes.push(row.clone());
        Ok(row)
    }

    async fn list_outcomes(&self, variant_id: Option<Uuid>) -> Result<Vec<OutcomeRow>, AppError> {
        let tables = self.inner.read().await;
        Ok(tables
            .outcomes
            .iter()
            .filter(|o| variant_id.map_or(true, |id| o.variant_id == id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn new_variant(resume_id: Uuid, jd_id: Uuid) -> NewVariant {
        NewVariant {
            resume_id,
            jd_id,
            persona: "ic".to_string(),
            platform: "dice".to_string(),
            compiled_text: "SUMMARY".to_string(),
            scores: json!({"survivability": 0.5}),
        }
    }

    #[tokio::test]
    async fn test_resume_round_trip_and_user_filter() {
        let store = MemoryStore::new();
        let a = store
            .insert_resume(NewResume {
                user_id: "alice".to_string(),
                raw_text: "Rust".to_string(),
            })
            .await
            .unwrap();
        store
            .insert_resume(NewResume {
                user_id: "bob".to_string(),
                raw_text: "Go".to_string(),
            })
            .await
            .unwrap();

        let fetched = store.get_resume(a.id).await.unwrap().unwrap();
        assert_eq!(fetched.raw_text, "Rust");
        assert!(fetched.parsed_json.is_none());

        let alice = store.list_resumes("alice").await.unwrap();
        assert_eq!(alice.len(), 1);
        assert!(store.get_resume(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_variant_filters() {
        let store = MemoryStore::new();
        let (r1, r2, jd) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
        store.insert_variant(new_variant(r1, jd)).await.unwrap();
        store.insert_variant(new_variant(r2, jd)).await.unwrap();

        let all = store.list_variants(VariantFilter::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].resume_id, r1, "creation order preserved");

        let only_r2 = store
            .list_variants(VariantFilter {
                resume_id: Some(r2),
                jd_id: None,
            })
            .await
            .unwrap();
        assert_eq!(only_r2.len(), 1);

        let none = store
            .list_variants(VariantFilter {
                resume_id: Some(r1),
                jd_id: Some(Uuid::new_v4()),
            })
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_outcomes_filtered_by_variant() {
        let store = MemoryStore::new();
        let v = store
            .insert_variant(new_variant(Uuid::new_v4(), Uuid::new_v4()))
            .await
            .unwrap();
        store
            .insert_outcome(NewOutcome {
                variant_id: v.id,
                status: "interview".to_string(),
            })
            .await
            .unwrap();
        store
            .insert_outcome(NewOutcome {
                variant_id: Uuid::new_v4(),
                status: "ghosted".to_string(),
            })
            .await
            .unwrap();

        let for_v = store.list_outcomes(Some(v.id)).await.unwrap();
        assert_eq!(for_v.len(), 1);
        assert_eq!(for_v[0].status, "interview");
        assert_eq!(store.list_outcomes(None).await.unwrap().len(), 2);
    }
}
