//! SQLite handle for the preferences database.
//!
//! One connection behind a mutex, opened in WAL mode with the schema
//! migrated before first use.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;
use tracing::info;

use cater_core::error::CaterError;

use crate::migrations;

/// Shared SQLite connection. `rusqlite::Connection` is not `Sync`, hence the mutex.
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// Open `path`, creating the file and its parent directories if needed.
    pub fn new(path: &Path) -> Result<Self, CaterError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)
            .map_err(|e| CaterError::Storage(format!("Failed to open database: {}", e)))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )
        .map_err(|e| CaterError::Storage(format!("Failed to set pragmas: {}", e)))?;

        info!("Database opened at {}", path.display());

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.with_conn(migrations::run_migrations)?;

        Ok(db)
    }

    /// Migrated in-memory database, used by tests.
    pub fn in_memory() -> Result<Self, CaterError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CaterError::Storage(format!("Failed to open in-memory db: {}", e)))?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.with_conn(migrations::run_migrations)?;

        Ok(db)
    }

    /// Run `f` with the connection locked.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, CaterError>
    where
        F: FnOnce(&Connection) -> Result<T, CaterError>,
    {
        let conn = self
            .conn
            .lock()
            .map_err(|e| CaterError::Storage(format!("Database lock poisoned: {}", e)))?;
        f(&conn)
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_preferences(db: &Database) -> i64 {
        db.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
                .map_err(|e| CaterError::Storage(e.to_string()))
        })
        .unwrap()
    }

    #[test]
    fn test_in_memory_database() {
        let db = Database::in_memory().unwrap();
        assert_eq!(count_preferences(&db), 0);
    }

    #[test]
    fn test_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("test.db");
        let db = Database::new(&path).unwrap();

        assert_eq!(count_preferences(&db), 0);
        assert!(path.exists());
    }

    #[test]
    fn test_wal_mode_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(&dir.path().join("wal.db")).unwrap();
        db.with_conn(|conn| {
            let mode: String = conn
                .query_row("PRAGMA journal_mode", [], |row| row.get(0))
                .map_err(|e| CaterError::Storage(e.to_string()))?;
            assert_eq!(mode, "wal");
            Ok(())
        })
        .unwrap();
    }
}
