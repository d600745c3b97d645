use anyhow::{Context, Result};

use crate::llm_client::OPENAI_API_URL;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI API credential. A missing key is NOT a startup error: the
    /// downstream call fails with a 401 that is surfaced inside the report.
    pub openai_api_key: String,
    pub openai_api_url: String,
    pub openai_model: String,
    /// Similarity score at or above this value is classified as a pass.
    pub pass_threshold: f64,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_api_url: env_or("OPENAI_API_URL", OPENAI_API_URL),
            openai_model: env_or("OPENAI_MODEL", "gpt-4"),
            pass_threshold: env_or("PASS_THRESHOLD", "0.30")
                .parse::<f64>()
                .context("PASS_THRESHOLD must be a number between 0 and 1")?,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
