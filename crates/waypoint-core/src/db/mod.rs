//! SQLite storage for workspace snapshots.
//!
//! The database is a small key-value table: each row holds one JSON
//! document under a fixed key together with the time it was written. Only
//! the [`Snapshot`](crate::models::Snapshot) of plans and theme is stored
//! today.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod snapshot_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
