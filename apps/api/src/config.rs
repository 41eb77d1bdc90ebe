use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable carries a default; a `.env` file is honored when present.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Number of discrete step indicators the completion percentage maps onto.
    pub progress_steps: usize,
    /// Upper bound on concurrently held live-preview sessions.
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            progress_steps: std::env::var("PROGRESS_STEPS")
                .unwrap_or_else(|_| "4".to_string())
                .parse::<usize>()
                .context("PROGRESS_STEPS must be a positive integer")?,
            max_sessions: std::env::var("MAX_SESSIONS")
                .unwrap_or_else(|_| "1024".to_string())
                .parse::<usize>()
                .context("MAX_SESSIONS must be a positive integer")?,
        })
    }
}
