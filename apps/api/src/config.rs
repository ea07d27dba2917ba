use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_USER_ID: &str = "default_user";

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL URL. `None` runs the service on the in-memory store.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for resume uploads.
    pub max_upload_bytes: usize,
    /// Owner recorded for uploads that omit `user_id`.
    pub default_user_id: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: None,
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            default_user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: optional_env("DATABASE_URL"),
            port: parse_env("PORT", DEFAULT_PORT).context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
            default_user_id: optional_env("DEFAULT_USER_ID")
                .unwrap_or_else(|| DEFAULT_USER_ID.to_string()),
        })
    }
}

/// Unset and blank variables are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        None => Ok(default),
    }
}
