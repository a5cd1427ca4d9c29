//! Database bootstrap: connect for the selected profile, then migrate.

use migration::MigrationCommand;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbKind, DbOwner, DbProfile};
use crate::error::AppError;

pub async fn connect_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    match kind {
        DbKind::Postgres => {
            let url = db_url(profile, DbOwner::App)?;
            let mut opts = ConnectOptions::new(url);
            opts.sqlx_logging(false);
            Ok(Database::connect(opts).await?)
        }
        DbKind::SqliteMemory => {
            // A pooled in-memory database would hand every connection its own
            // empty schema; pin the pool to a single connection.
            let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
            opts.max_connections(1).sqlx_logging(false);
            Ok(Database::connect(opts).await?)
        }
    }
}

/// Single entrypoint: build the connection and bring the schema up to date.
pub async fn bootstrap_db(profile: DbProfile, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile, kind).await?;
    migration::migrate(&conn, MigrationCommand::Up).await?;
    info!(profile = ?profile, kind = ?kind, "database ready");
    Ok(conn)
}
