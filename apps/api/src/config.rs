use anyhow::{Context, Result};

/// Hard cap on LaTeX import payloads when MAX_IMPORT_BYTES is unset (1 MiB).
/// Extraction cost grows with input size, so oversized bodies are rejected
/// before the parser ever sees them.
const DEFAULT_MAX_IMPORT_BYTES: usize = 1_048_576;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub max_import_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_import_bytes: match std::env::var("MAX_IMPORT_BYTES") {
                Ok(raw) => raw
                    .parse::<usize>()
                    .context("MAX_IMPORT_BYTES must be a byte count")?,
                Err(_) => DEFAULT_MAX_IMPORT_BYTES,
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
