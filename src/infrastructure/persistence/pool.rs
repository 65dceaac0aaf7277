//! Connection pool construction and schema migration.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::Config;

/// Opens the SQLite pool described by `config` and applies pending migrations.
///
/// The database file and its parent directory are created if they do not
/// exist yet.
///
/// # Errors
///
/// Returns an error if the URL is malformed, the database cannot be opened,
/// or a migration fails.
pub async fn connect(config: &Config) -> Result<SqlitePool> {
    let options = connect_options(&config.database_url)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect_with(options)
        .await
        .context("Failed to open database")?;

    migrate(&pool).await?;

    Ok(pool)
}

/// Opens a small pool with default settings, used by the admin CLI.
pub async fn connect_url(database_url: &str) -> Result<SqlitePool> {
    let options = connect_options(database_url)?;

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to open database")?;

    migrate(&pool).await?;

    Ok(pool)
}

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    if let Some(dir) = options.get_filename().parent()
        && !dir.as_os_str().is_empty()
    {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create storage directory {}", dir.display()))?;
    }

    Ok(options)
}

async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to apply migrations")
}
