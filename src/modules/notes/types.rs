use serde::{Deserialize, Serialize};
use tokio_postgres::Row;

/// Stored note as returned by every endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Note {
  pub id: i64,
  #[serde(flatten)]
  pub fields: NoteFields
}

/// Caller-supplied part of a note. Unknown keys, `id` included, are dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoteFields {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tag: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub date: Option<String>
}

impl From<&Row> for Note {
  fn from(row: &Row) -> Self {
    Note {
      id: row.get("id"),
      fields: NoteFields {
        title: row.get("title"),
        content: row.get("content"),
        tag: row.get("tag"),
        date: row.get("date")
      }
    }
  }
}
