//! Database connection bootstrap: connect, then bring the schema up to date.

use std::time::Duration;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let url = db_url(profile)?;

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(10)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database: {e}")))
}

/// Connect and run pending migrations. Single entrypoint used by the state
/// builder so the server never runs against a stale schema.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;

    Migrator::up(&conn, None)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))?;

    let applied = migration::count_applied_migrations(&conn)
        .await
        .unwrap_or(0);
    info!(applied, "database schema up to date");

    Ok(conn)
}
