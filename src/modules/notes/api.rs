use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json
};

use crate::types::{internal_error, AppState};

use crate::modules::notes::types::*;

pub async fn get_notes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Note>>, (StatusCode, String)> {
    let notes = state.notes.list_all().await.map_err(internal_error)?;

    Ok(Json(notes))
}

pub async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<NoteFields>,
) -> Result<Json<Note>, (StatusCode, String)> {
    let created_note = state.notes.insert(body).await.map_err(internal_error)?;
    tracing::debug!(id = created_note.id, "note created");

    Ok(Json(created_note))
}

// Missing ids still answer 200 with an empty body.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(), (StatusCode, String)> {
    let removed = state.notes.delete_by_id(id).await.map_err(internal_error)?;
    tracing::debug!(id, removed, "note delete handled");

    Ok(())
}
