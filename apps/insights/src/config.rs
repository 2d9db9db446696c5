use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_PREDICTION_API_URL: &str = "http://127.0.0.1:5000";
const DEFAULT_SESSION_FILE: &str = "iaf-user.json";
const DEFAULT_DATASET_FILE: &str = "dataset_4.csv";

/// Application configuration loaded from environment variables.
/// Every variable has a default suitable for a local prediction backend.
#[derive(Debug, Clone)]
pub struct Config {
    pub prediction_api_url: String,
    pub session_file: PathBuf,
    /// Personnel CSV behind the analytics view. Optional at runtime.
    pub dataset_file: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            prediction_api_url: normalize_base_url(
                &std::env::var("PREDICTION_API_URL")
                    .unwrap_or_else(|_| DEFAULT_PREDICTION_API_URL.to_string()),
            ),
            session_file: std::env::var("SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
            dataset_file: std::env::var("DATASET_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATASET_FILE)),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

/// Trims whitespace and trailing slashes so `{base}/predict` never doubles up.
pub fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
