//! Runtime configuration read from the environment

use anyhow::{Context, Result};
use reelbase_infra::DbConfig;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` selects the in-memory backend
    pub database: Option<DbConfig>,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Read `REEL_HOST`, `REEL_PORT`, `LOG_FORMAT` and the database variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("REEL_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("REEL_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid REEL_PORT: {}", raw))?,
            None => 3000,
        };

        let database = match lookup("DATABASE_URL") {
            Some(url) if !url.is_empty() => Some(DbConfig::from_lookup(&lookup)?),
            _ => None,
        };

        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(Self {
            host,
            port,
            database,
            log_format,
        })
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name: &str| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
        assert!(config.database.is_none());
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("REEL_HOST", "127.0.0.1"),
            ("REEL_PORT", "8080"),
            ("LOG_FORMAT", "json"),
            ("DATABASE_URL", "postgres://localhost/reel"),
            ("DB_MAX_CONNECTIONS", "5"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.log_format, LogFormat::Json);

        let database = config.database.unwrap();
        assert_eq!(database.database_url, "postgres://localhost/reel");
        assert_eq!(database.max_connections, 5);
    }

    #[test]
    fn test_empty_database_url_selects_memory() {
        let config = config(&[("DATABASE_URL", "")]).unwrap();
        assert!(config.database.is_none());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let err = config(&[("REEL_PORT", "http")]).unwrap_err();
        assert!(err.to_string().contains("REEL_PORT"));
    }

    #[test]
    fn test_invalid_pool_size_is_an_error() {
        let result = config(&[
            ("DATABASE_URL", "postgres://localhost/reel"),
            ("DB_MIN_CONNECTIONS", "-1"),
        ]);
        assert!(result.is_err());
    }
}
