use std::net::SocketAddr;

use simple_notes::{app, AppState, NoteStore};
use tokio::net::TcpListener;

pub struct TestApp {
    pub base_url: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Serves the router on an ephemeral port. `base_url` already includes `base_path`.
pub async fn spawn_app<S>(store: S, base_path: &str) -> TestApp
where
    S: NoteStore + 'static,
{
    let router = app(AppState::new(store), base_path);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind test listener");
    let addr: SocketAddr = listener.local_addr().expect("listener address");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            eprintln!("server error: {}", e);
        }
    });

    TestApp { base_url: format!("http://{}{}", addr, base_path.trim_end_matches('/')) }
}
