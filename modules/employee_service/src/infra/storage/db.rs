//! Database connection and schema bootstrap

use super::migrations::Migrator;
use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Open the connection pool described by `cfg`
pub async fn connect(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(cfg.dsn.clone());
    options
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.connect_timeout)
        .sqlx_logging(cfg.sqlx_logging);

    // Every in-memory SQLite connection is its own database.
    if cfg.is_in_memory() {
        options.max_connections(1);
    } else {
        options.max_connections(cfg.max_connections);
    }

    let db = Database::connect(options)
        .await
        .with_context(|| format!("failed to connect to database '{}'", redact(&cfg.dsn)))?;

    tracing::info!(dsn = %redact(&cfg.dsn), "Database connected");
    Ok(db)
}

/// Apply all pending schema migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .context("failed to apply migrations")?;

    tracing::info!("Employee service migrations completed");
    Ok(())
}

/// Connect and migrate in one step
pub async fn connect_and_migrate(cfg: &DatabaseConfig) -> Result<DatabaseConnection> {
    let db = connect(cfg).await?;
    migrate(&db).await?;
    Ok(db)
}

/// Hide the password part of a DSN before logging it
fn redact(dsn: &str) -> String {
    if !dsn.contains('@') {
        return dsn.to_string();
    }
    match url::Url::parse(dsn) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => "***".to_string(),
    }
}
