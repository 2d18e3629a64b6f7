use axum::{routing::get, routing::delete, Router};

use crate::types::AppState;

pub mod api;
pub mod store;
pub mod types;

use api::*;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notes",
             get(get_notes)
            .post(create_note),
        )
        .route("/notes/:id", delete(delete_note))
}
