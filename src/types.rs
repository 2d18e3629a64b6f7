use std::sync::Arc;

use axum::http::StatusCode;

use bb8::Pool;
use bb8_postgres::PostgresConnectionManager;
use tokio_postgres::NoTls;

use crate::modules::notes::store::NoteStore;

pub type ConnectionPool = Pool<PostgresConnectionManager<NoTls>>;

/// Utility function for mapping any error into a `500 Internal Server Error` response.
pub fn internal_error<E>(err: E) -> (StatusCode, String) where E: std::error::Error {
    tracing::error!(error = %err, "request failed");
    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
}

#[derive(Clone)]
pub struct AppState {
    pub notes: Arc<dyn NoteStore>,
}

impl AppState {
    pub fn new<S>(store: S) -> Self where S: NoteStore + 'static {
        Self { notes: Arc::new(store) }
    }
}
