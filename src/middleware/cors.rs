use http::Method;
use tower_http::cors::{Any, CorsLayer};

/// Cross-origin access is open to every origin; no credentials are involved.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers(Any)
}
