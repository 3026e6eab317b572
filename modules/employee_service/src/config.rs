//! Configuration for employee service module

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Database connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    /// Connection string, e.g. `sqlite://employees.db?mode=rwc` or `postgres://...`
    #[serde(default = "default_dsn")]
    pub dsn: String,

    /// Upper bound of the connection pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Connections kept open while idle
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// How long to wait for a pooled connection
    #[serde(default = "default_connect_timeout", with = "humantime_serde")]
    pub connect_timeout: Duration,

    /// Log every SQL statement through `tracing`
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            dsn: default_dsn(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout: default_connect_timeout(),
            sqlx_logging: false,
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite, used for tests and `--mock` runs
    pub fn in_memory() -> Self {
        Self {
            dsn: MEMORY_DSN.to_string(),
            ..Self::default()
        }
    }

    /// Whether the DSN points at an in-memory SQLite database
    pub fn is_in_memory(&self) -> bool {
        self.dsn.starts_with("sqlite:")
            && (self.dsn.contains(":memory:") || self.dsn.contains("mode=memory"))
    }
}

pub const MEMORY_DSN: &str = "sqlite::memory:";

fn default_dsn() -> String {
    "sqlite://employees.db?mode=rwc".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connect_timeout() -> Duration {
    Duration::from_secs(10)
}
