use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A compiled resume variant and its survivability scores.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VariantRow {
    pub id: Uuid,
    pub resume_id: Uuid,
    pub jd_id: Uuid,
    pub persona: String,
    pub platform: String,
    pub compiled_text: String,
    pub scores: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewVariant {
    pub resume_id: Uuid,
    pub jd_id: Uuid,
    pub persona: String,
    pub platform: String,
    pub compiled_text: String,
    pub scores: Value,
}

/// Application outcome reported for a variant: `rejected`, `interview` or `ghosted`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OutcomeRow {
    pub id: Uuid,
    pub variant_id: Uuid,
    pub status: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewOutcome {
    pub variant_id: Uuid,
    pub status: String,
}

/// Outcome statuses a caller may record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Rejected,
    Interview,
    Ghosted,
}

impl OutcomeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeStatus::Rejected => "rejected",
            OutcomeStatus::Interview => "interview",
            OutcomeStatus::Ghosted => "ghosted",
        }
    }
}

impl std::str::FromStr for OutcomeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rejected" => Ok(OutcomeStatus::Rejected),
            "interview" => Ok(OutcomeStatus::Interview),
            "ghosted" => Ok(OutcomeStatus::Ghosted),
            other => Err(format!(
                "Status must be one of: rejected, interview, ghosted (got '{other}')"
            )),
        }
    }
}
