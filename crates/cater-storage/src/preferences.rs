//! Key-value preference persistence.
//!
//! The chat widget only needs a handful of string flags, so storage is a
//! plain key-value interface with a SQLite implementation for the app and an
//! in-memory one for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rusqlite::OptionalExtension;

use cater_core::error::CaterError;

use crate::db::Database;

/// String key-value storage for persisted UI flags.
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, CaterError>;

    /// Insert or overwrite a value.
    fn set(&self, key: &str, value: &str) -> Result<(), CaterError>;

    /// Delete a value. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), CaterError>;
}

/// SQLite-backed preference store.
pub struct PreferenceRepository {
    db: Arc<Database>,
}

impl PreferenceRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Number of stored keys.
    pub fn count(&self) -> Result<i64, CaterError> {
        self.db.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))
                .map_err(|e| CaterError::Storage(format!("Failed to count preferences: {}", e)))
        })
    }
}

impl PreferenceStore for PreferenceRepository {
    fn get(&self, key: &str) -> Result<Option<String>, CaterError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                rusqlite::params![key],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| CaterError::Storage(format!("Failed to read preference {}: {}", key, e)))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CaterError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO preferences (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
                rusqlite::params![key, value, Utc::now().timestamp()],
            )
            .map_err(|e| CaterError::Storage(format!("Failed to write preference {}: {}", key, e)))?;
            Ok(())
        })
    }

    fn remove(&self, key: &str) -> Result<(), CaterError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "DELETE FROM preferences WHERE key = ?1",
                rusqlite::params![key],
            )
            .map_err(|e| CaterError::Storage(format!("Failed to delete preference {}: {}", key, e)))?;
            Ok(())
        })
    }
}

/// Process-local preference store.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CaterError> {
        self.values
            .lock()
            .map_err(|e| CaterError::Storage(format!("Preference lock poisoned: {}", e)))
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, CaterError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CaterError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CaterError> {
        self.lock()?.remove(key);
        Ok(())
    }
}
