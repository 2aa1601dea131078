//! Database pool configuration

use std::fmt;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use thiserror::Error;
use tracing::info;

/// Errors raised while reading the database configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DbConfigError {
    /// A required variable is not set
    #[error("{0} environment variable not set")]
    Missing(String),

    /// A variable is set but cannot be parsed
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: String, value: String },
}

/// PostgreSQL connection pool configuration
#[derive(Clone, PartialEq, Eq)]
pub struct DbConfig {
    /// PostgreSQL connection URL
    pub database_url: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of idle connections kept open
    pub min_connections: u32,
    /// How long to wait for a connection from the pool
    pub acquire_timeout_secs: u64,
    /// Idle connections older than this are closed
    pub idle_timeout_secs: u64,
    /// Connections are recycled after this lifetime
    pub max_lifetime_secs: u64,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("database_url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("max_lifetime_secs", &self.max_lifetime_secs)
            .finish()
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            database_url: String::new(),
            max_connections: 10,
            min_connections: 1,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
        }
    }
}

impl DbConfig {
    /// Configuration for the given URL with default pool sizing
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            ..Self::default()
        }
    }

    /// Read `DATABASE_URL`, `DB_MAX_CONNECTIONS` and `DB_MIN_CONNECTIONS`
    pub fn from_env() -> Result<Self, DbConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`DbConfig::from_env`] with an explicit variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DbConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .ok_or_else(|| DbConfigError::Missing("DATABASE_URL".to_string()))?;

        let defaults = Self::default();
        Ok(Self {
            database_url,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_or(&lookup, "DB_MIN_CONNECTIONS", defaults.min_connections)?,
            ..defaults
        })
    }
}

fn parse_or<F>(lookup: &F, name: &str, default: u32) -> Result<u32, DbConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| DbConfigError::Invalid {
            name: name.to_string(),
            value,
        }),
    }
}

/// Open a pool and make sure the database answers
pub async fn connect(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    info!(
        max_connections = config.max_connections,
        min_connections = config.min_connections,
        "Connecting to PostgreSQL"
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.database_url)
        .await
}
