//! SQLite-backed record store

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};
use tokio_rusqlite::Connection;
use tracing::{debug, info};

use super::RecordStore;
use crate::error::{RecordError, RecordResult};
use crate::models::Record;

const PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
"#;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_users_name ON users(name);
"#;

/// Records in a `users` table. Queries run on tokio-rusqlite's connection
/// thread, one at a time.
pub struct SqliteRecordStore {
    conn: Connection,
}

impl SqliteRecordStore {
    /// Opens (or creates) the database at `path` and applies the schema.
    /// `":memory:"` gives a private in-memory database.
    pub async fn open(path: &str) -> RecordResult<Self> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory().await?
        } else {
            Connection::open(path).await?
        };

        conn.call(|conn| {
            conn.execute_batch(PRAGMAS)?;
            conn.execute_batch(SCHEMA)?;
            Ok(())
        })
        .await?;

        info!("SQLite record store ready at {}", path);
        Ok(Self { conn })
    }

    pub async fn in_memory() -> RecordResult<Self> {
        Self::open(":memory:").await
    }
}

fn row_to_record(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        name: row.get(1)?,
    })
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    async fn create(&self, name: &str) -> RecordResult<Record> {
        let name = name.to_string();
        let record = self
            .conn
            .call(move |conn| {
                conn.execute("INSERT INTO users (name) VALUES (?1)", params![name])?;
                Ok(Record {
                    id: conn.last_insert_rowid(),
                    name,
                })
            })
            .await?;

        debug!("Created user {} ({})", record.id, record.name);
        Ok(record)
    }

    async fn get_by_id(&self, id: i64) -> RecordResult<Record> {
        let found = self
            .conn
            .call(move |conn| {
                let record = conn
                    .query_row(
                        "SELECT id, name FROM users WHERE id = ?1",
                        params![id],
                        row_to_record,
                    )
                    .optional()?;
                Ok(record)
            })
            .await?;

        found.ok_or_else(|| RecordError::NotFound(format!("id {}", id)))
    }

    async fn get_by_name(&self, name: &str) -> RecordResult<Record> {
        let lookup = name.to_string();
        let found = self
            .conn
            .call(move |conn| {
                let record = conn
                    .query_row(
                        "SELECT id, name FROM users WHERE name = ?1 ORDER BY id LIMIT 1",
                        params![lookup],
                        row_to_record,
                    )
                    .optional()?;
                Ok(record)
            })
            .await?;

        found.ok_or_else(|| RecordError::NotFound(format!("name '{}'", name)))
    }
}
