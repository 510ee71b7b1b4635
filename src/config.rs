//! Application configuration, read once from the environment at startup.
//!
//! `DATABASE_URL` is required; `HOST` and `PORT` fall back to defaults so a
//! bare `.env` with just the database path is enough for local runs.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database URL (e.g. "sqlite:data/mercado.db").
    pub database_url: String,
    /// Address the server binds to.
    pub host: String,
    /// Port the server listens on.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")?,
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
