//! SQLite connection handle shared by the command handlers.

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the database and apply the per-connection pragmas: the schema
    /// declares REFERENCES clauses, and concurrent writers should queue on
    /// the unique indexes instead of failing with SQLITE_BUSY.
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }
}
