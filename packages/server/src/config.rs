use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Shared secret for the cron trigger endpoints. When unset, the
    /// triggers are open (local development setups).
    pub cron_secret: Option<String>,
    /// How many days ahead the sweep reports listings as expiring soon.
    pub sweep_notice_days: i32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            cron_secret: env::var("CRON_SECRET").ok(),
            sweep_notice_days: env::var("SWEEP_NOTICE_DAYS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("SWEEP_NOTICE_DAYS must be a valid number")?,
        })
    }
}
