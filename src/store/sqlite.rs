//! SQLite-backed implementation of the key-value store.
//!
//! A single `kv` table holds every key; connections come from an r2d2 pool so
//! the store handle can be shared across the CLI dispatch paths.

use super::StringStore;
use crate::errors::{AppError, AppResult, StoreError};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Key-value store persisted in a SQLite database file.
pub struct SqliteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqliteStore {
    /// Opens or creates the store database at `path`.
    ///
    /// The parent directory is created if missing (mode 0o700 on Unix, since
    /// journal contents are personal data).
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, the database
    /// cannot be opened, or the schema cannot be initialized.
    pub fn open(path: &Path) -> AppResult<Self> {
        debug!("Opening store at: {:?}", path);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    AppError::Io(std::io::Error::new(
                        e.kind(),
                        format!("Failed to create data directory: {}", e),
                    ))
                })?;

                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    let permissions = fs::Permissions::from_mode(0o700);
                    fs::set_permissions(parent, permissions)?;
                }
            }
        }

        let manager = SqliteConnectionManager::file(path);
        Self::from_manager(manager, 5)
    }

    /// Opens a transient in-memory store.
    ///
    /// The pool is capped at one connection: each in-memory connection is its
    /// own database, so a larger pool would split the data.
    pub fn in_memory() -> AppResult<Self> {
        Self::from_manager(SqliteConnectionManager::memory(), 1)
    }

    fn from_manager(manager: SqliteConnectionManager, max_size: u32) -> AppResult<Self> {
        let pool = Pool::builder()
            .max_size(max_size)
            .build(manager)
            .map_err(StoreError::Pool)?;

        let conn = pool.get().map_err(StoreError::Pool)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(StoreError::Sqlite)?;
        drop(conn);

        info!("Store opened");
        Ok(SqliteStore { pool })
    }
}

impl StringStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let conn = self.pool.get().map_err(StoreError::Pool)?;
        let result = conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            params![key],
            |row| row.get::<_, String>(0),
        );

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Sqlite(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let conn = self.pool.get().map_err(StoreError::Pool)?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )
        .map_err(StoreError::Sqlite)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let conn = self.pool.get().map_err(StoreError::Pool)?;
        conn.execute("DELETE FROM kv WHERE key = ?1", params![key])
            .map_err(StoreError::Sqlite)?;
        Ok(())
    }
}
