use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use simple_notes::{
    app,
    config::Config,
    db,
    AppState,
    InMemoryNoteStore,
    PostgresNoteStore
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "simple_notes=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let state = match config.database_url.as_deref() {
        Some(url) => {
            // set up connection pool
            let pool = db::connect(url, config.pool_max_size).await?;
            db::run_migrations(&pool).await?;
            AppState::new(PostgresNoteStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL is not set, notes are kept in memory only");
            AppState::new(InMemoryNoteStore::new())
        }
    };

    let router = app(state, &config.base_path);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::debug!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
