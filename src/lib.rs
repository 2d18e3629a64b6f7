use axum::Router;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod middleware;
pub mod modules;
pub mod types;

pub use crate::modules::notes::store::{InMemoryNoteStore, NoteStore, PostgresNoteStore, StoreError};
pub use crate::modules::notes::types::{Note, NoteFields};
pub use crate::types::AppState;

pub const NOTES_TABLE_NAME: &str = "notes";

/// Builds the HTTP application with the note routes mounted under `base_path`.
/// An empty `base_path` (or `/`) mounts them at the root.
pub fn app(state: AppState, base_path: &str) -> Router {
    let notes = modules::notes::routes().with_state(state);

    let router = match base_path.trim_end_matches('/') {
        "" => notes,
        base => Router::new().nest(base, notes),
    };

    router
        .layer(middleware::cors::cors())
        .layer(TraceLayer::new_for_http())
}
