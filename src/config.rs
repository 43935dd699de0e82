use anyhow::{bail, Context};

use crate::devos::DevoStrategy;

/// A year; sessions idle for longer are gone regardless.
const MAX_SESSION_EXPIRY_MINUTES: i64 = 60 * 24 * 365;

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub db_max_connections: u32,
    /// Sessions expire after this many minutes without a request.
    pub session_expiry_minutes: i64,
    pub devo_strategy: DevoStrategy,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            database_url: dotenv::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://devomeet.db?mode=rwc".to_owned()),
            bind_address: dotenv::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_owned()),
            db_max_connections: match dotenv::var("DB_MAX_CONNECTIONS") {
                Ok(n) => n.parse().context("DB_MAX_CONNECTIONS")?,
                Err(_) => 16,
            },
            session_expiry_minutes: match dotenv::var("SESSION_EXPIRY_MINUTES") {
                Ok(n) => parse_expiry_minutes(&n).context("SESSION_EXPIRY_MINUTES")?,
                Err(_) => 5,
            },
            devo_strategy: match dotenv::var("DEVO_STRATEGY") {
                Ok(s) => s.parse()?,
                Err(_) => DevoStrategy::default(),
            },
            rust_log: dotenv::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned()),
        })
    }
}

fn parse_expiry_minutes(s: &str) -> anyhow::Result<i64> {
    let minutes: i64 = s.trim().parse()?;
    if !(1..=MAX_SESSION_EXPIRY_MINUTES).contains(&minutes) {
        bail!("expected 1..={MAX_SESSION_EXPIRY_MINUTES} minutes, got {minutes}");
    }
    Ok(minutes)
}
