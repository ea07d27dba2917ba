use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// An uploaded resume, stored as extracted plain text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: String,
    pub raw_text: String,
    /// Reserved for structured extraction; always `None` today.
    pub parsed_json: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewResume {
    pub user_id: String,
    pub raw_text: String,
}

/// A job posting with the signals extracted when it was saved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobDescriptionRow {
    pub id: Uuid,
    pub platform: String,
    pub raw_text: String,
    pub extracted_signals: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewJobDescription {
    pub platform: String,
    pub raw_text: String,
    pub extracted_signals: Value,
}
