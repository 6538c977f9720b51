use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

/// The static client bundle may be hosted on another origin (GitHub Pages),
/// so the read and answer endpoints accept cross-origin calls.
pub fn public_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(Any)
}
