use std::collections::BTreeMap;

use axum::async_trait;
use bb8::RunError;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::notes::types::*;
use crate::types::ConnectionPool;
use crate::NOTES_TABLE_NAME;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not check out a database connection: {0}")]
    Pool(#[from] RunError<tokio_postgres::Error>),
    #[error("database query failed: {0}")]
    Query(#[from] tokio_postgres::Error),
}

/// Persistence capability the note handlers depend on.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All stored notes in ascending id order.
    async fn list_all(&self) -> Result<Vec<Note>, StoreError>;
    /// Stores a new note under a freshly assigned id.
    async fn insert(&self, fields: NoteFields) -> Result<Note, StoreError>;
    /// Returns whether a note was removed.
    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError>;
}

pub struct PostgresNoteStore {
    pool: ConnectionPool,
}

impl PostgresNoteStore {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteStore for PostgresNoteStore {
    async fn list_all(&self) -> Result<Vec<Note>, StoreError> {
        let conn = self.pool.get().await?;

        let rows = conn.query(
            &format!("SELECT id, title, content, tag, date FROM {NOTES_TABLE_NAME} ORDER BY id"),
            &[]
        ).await?;

        Ok(rows.iter().map(Note::from).collect())
    }

    async fn insert(&self, fields: NoteFields) -> Result<Note, StoreError> {
        let conn = self.pool.get().await?;

        let row = conn.query_one(
            &format!(
                "INSERT INTO {NOTES_TABLE_NAME} (title, content, tag, date) VALUES ($1, $2, $3, $4) \
                 RETURNING id, title, content, tag, date"
            ),
            &[&fields.title, &fields.content, &fields.tag, &fields.date]
        ).await?;

        Ok(Note::from(&row))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.pool.get().await?;

        let removed = conn.execute(
            &format!("DELETE FROM {NOTES_TABLE_NAME} WHERE id = $1"),
            &[&id]
        ).await?;

        Ok(removed > 0)
    }
}

#[derive(Default)]
struct MemoryTable {
    last_id: i64,
    rows: BTreeMap<i64, Note>,
}

/// Process-local store. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryNoteStore {
    table: Mutex<MemoryTable>,
}

impl InMemoryNoteStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list_all(&self) -> Result<Vec<Note>, StoreError> {
        let table = self.table.lock().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn insert(&self, fields: NoteFields) -> Result<Note, StoreError> {
        let mut table = self.table.lock().await;
        table.last_id += 1;

        let note = Note { id: table.last_id, fields };
        table.rows.insert(note.id, note.clone());
        Ok(note)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        let mut table = self.table.lock().await;
        Ok(table.rows.remove(&id).is_some())
    }
}
