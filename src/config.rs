// src/config.rs

use std::{env, net::SocketAddr};

use thiserror::Error;

pub const DEFAULT_LATEST_QUESTIONS_LIMIT: i64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub rust_log: String,
    pub bind_addr: SocketAddr,
    pub log_dir: String,
    /// Maximum number of questions on the index page.
    pub latest_questions_limit: i64,
}

impl Config {
    /// Reads the configuration from the process environment.
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| "info".to_string());

        let bind_addr = match lookup("BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                key: "BIND_ADDR",
                value,
            })?,
            None => SocketAddr::from(([0, 0, 0, 0], 3000)),
        };

        let log_dir = lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string());

        let latest_questions_limit = match lookup("LATEST_QUESTIONS_LIMIT") {
            Some(value) => match value.parse::<i64>() {
                Ok(limit) if limit >= 1 => limit,
                _ => {
                    return Err(ConfigError::Invalid {
                        key: "LATEST_QUESTIONS_LIMIT",
                        value,
                    });
                }
            },
            None => DEFAULT_LATEST_QUESTIONS_LIMIT,
        };

        Ok(Self {
            database_url,
            rust_log,
            bind_addr,
            log_dir,
            latest_questions_limit,
        })
    }
}
