//! Database schema migrations.

use rusqlite::Connection;
use tracing::info;

use cater_core::error::CaterError;

/// Run all pending database migrations.
///
/// Each version is applied at most once and recorded in `schema_migrations`.
pub fn run_migrations(conn: &Connection) -> Result<(), CaterError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version     INTEGER PRIMARY KEY NOT NULL,
            name        TEXT NOT NULL,
            applied_at  INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
        );",
    )
    .map_err(|e| CaterError::Storage(format!("Failed to create migrations table: {}", e)))?;

    let current_version = current_version(conn)?;

    if current_version < 1 {
        apply_v1(conn)?;
        info!("Applied migration v1: preferences");
    }

    Ok(())
}

/// Highest applied migration version, 0 for a fresh database.
pub fn current_version(conn: &Connection) -> Result<i64, CaterError> {
    conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )
    .map_err(|e| CaterError::Storage(format!("Failed to query migration version: {}", e)))
}

/// Version 1: key-value preferences.
fn apply_v1(conn: &Connection) -> Result<(), CaterError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS preferences (
            key         TEXT PRIMARY KEY NOT NULL,
            value       TEXT NOT NULL,
            updated_at  INTEGER NOT NULL
        );

        INSERT INTO schema_migrations (version, name) VALUES (1, 'preferences');
        ",
    )
    .map_err(|e| CaterError::Storage(format!("Migration v1 failed: {}", e)))
}
