// src/store/connection.rs

use rusqlite::{Connection, OptionalExtension};
use std::cell::RefCell;

use crate::errors::{StoreError, StoreResult};

// Thread-local connection slot, opened lazily and keyed by path so handles
// to different files never share a connection.
thread_local! {
    static KV_CONN: RefCell<Option<(String, Connection)>> = RefCell::new(None);
}

/// Handle to the sqlite-backed key-value store that stands in for the
/// browser's local storage. Cloning is cheap; only the path is shared.
#[derive(Clone)]
pub struct KvStore {
    path: String,
}

impl KvStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Provides the thread's connection to the closure.
    pub fn with_conn<F, T>(&self, f: F) -> StoreResult<T>
    where
        F: FnOnce(&mut Connection) -> StoreResult<T>,
    {
        KV_CONN
            .try_with(|cell| {
                let mut slot = cell.borrow_mut();
                let stale = !matches!(&*slot, Some((p, _)) if *p == self.path);
                if stale {
                    let conn = Connection::open(&self.path)
                        .map_err(|e| StoreError::Db(format!("Open store failed: {e}")))?;
                    *slot = Some((self.path.clone(), conn));
                }
                let (_, conn) = slot.as_mut().unwrap();
                f(conn)
            })
            .map_err(|_| StoreError::Internal)?
    }

    /// Create the kv table if this is a fresh file.
    pub fn init(&self) -> StoreResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)",
                [],
            )
            .map_err(|e| StoreError::Db(format!("Init failed: {e}")))?;
            Ok(())
        })
    }

    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()
            .map_err(|e| StoreError::Db(format!("Read of '{key}' failed: {e}")))
        })
    }

    pub fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO kv (key, value) VALUES (?1, ?2)
                ON CONFLICT(key) DO UPDATE SET value = excluded.value
                "#,
                [key, value],
            )
            .map_err(|e| StoreError::Db(format!("Write of '{key}' failed: {e}")))?;
            Ok(())
        })
    }
}
