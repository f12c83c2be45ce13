//! SQLite-backed store used by the CLI.

use std::path::Path;

use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::KeyValueStore;
use crate::error::{DatabaseResultExt, Result};

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv (key, value) VALUES (?1, ?2) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";
const DELETE_VALUE_SQL: &str = "DELETE FROM kv WHERE key = ?1";

/// A [`KeyValueStore`] persisted in a single-table SQLite database.
#[derive(Debug)]
pub struct SqliteStore {
    connection: Connection,
}

impl SqliteStore {
    /// Opens (creating if needed) the database at `path` and initializes the
    /// schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path).db_context("Failed to open database connection")?;
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        debug!("store get {key}");
        self.connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read value")
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!("store set {key}");
        self.connection
            .execute(UPSERT_VALUE_SQL, params![key, value])
            .db_context("Failed to write value")?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        debug!("store remove {key}");
        self.connection
            .execute(DELETE_VALUE_SQL, params![key])
            .db_context("Failed to delete value")?;
        Ok(())
    }
}
