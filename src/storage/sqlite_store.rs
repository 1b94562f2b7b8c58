use std::fs;
use std::path::Path;
use std::sync::Mutex;

use log::warn;
use rusqlite::{params, Connection, OptionalExtension};

use super::storage_traits::KvStore;
use crate::errors::{Error, Result};

/// SQLite-backed key-value store.
///
/// All state sits in a single `app_store (key, value)` table.
pub struct SqliteKvStore {
    conn: Mutex<Connection>,
}

impl SqliteKvStore {
    /// Opens (or creates) the database file at `path` and ensures the
    /// `app_store` table exists.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| Error::Storage(e.to_string()))?;
            }
        }

        let conn = Connection::open(path).map_err(|e| Error::Storage(e.to_string()))?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS app_store (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
            [],
        )
        .map_err(|e| Error::Storage(e.to_string()))?;

        Ok(SqliteKvStore {
            conn: Mutex::new(conn),
        })
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> Option<String> {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let result = conn
            .query_row(
                "SELECT value FROM app_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional();

        match result {
            Ok(value) => value,
            Err(e) => {
                warn!("Storage read failed for key {}: {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        let conn = self.conn.lock().unwrap_or_else(|e| e.into_inner());
        let result = conn.execute(
            "INSERT INTO app_store (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        );

        if let Err(e) = result {
            warn!("Storage write failed for key {}: {}", key, e);
        }
    }
}
