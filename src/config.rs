//! # Configuration Module
//!
//! Loads and validates the environment the bot needs before anything else
//! starts: the Telegram token, the mini-app URL, the database URL and the
//! HTTP bind address. Startup fails fast on anything missing or malformed.

use anyhow::{Context, Result};
use url::Url;

/// Default bind address for the mini-app HTTP API
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (`BOT_TOKEN`)
    pub bot_token: String,
    /// URL the /start button opens as a Telegram mini-app (`WEBAPP_URL`)
    pub webapp_url: Url,
    /// Postgres connection string (`DATABASE_URL`)
    pub database_url: String,
    /// Address the HTTP API binds to (`BIND_ADDR`, optional)
    pub bind_addr: String,
}

impl Config {
    /// Load configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bot_token = lookup("BOT_TOKEN").context("BOT_TOKEN is not set")?;

        let webapp_url = lookup("WEBAPP_URL").context("WEBAPP_URL is not set")?;
        let webapp_url = Url::parse(&webapp_url)
            .with_context(|| format!("WEBAPP_URL is not a valid URL: {webapp_url}"))?;

        let database_url = lookup("DATABASE_URL").context("DATABASE_URL is not set")?;

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Config {
            bot_token,
            webapp_url,
            database_url,
            bind_addr,
        })
    }
}
