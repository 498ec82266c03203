//! Connection-acquisition facility for the SQLite store.
//!
//! `DbPool` only remembers where the database lives. Every unit of work
//! opens its own connection through `with_conn`, and the connection is
//! dropped (closed) when the closure returns, on success and error alike.
//! No connection is retained between calls.

use crate::errors::AppResult;
use rusqlite::{Connection, OpenFlags};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DbPool {
    path: PathBuf,
}

impl DbPool {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Open a validity-checked connection.
    fn acquire(&self) -> AppResult<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;

        // validity probe
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;

        Ok(conn)
    }

    /// Run `func` against a freshly acquired connection.
    /// The connection is released when this returns.
    pub fn with_conn<F, T>(&self, func: F) -> AppResult<T>
    where
        F: FnOnce(&Connection) -> AppResult<T>,
    {
        let conn = self.acquire()?;
        func(&conn)
    }
}
