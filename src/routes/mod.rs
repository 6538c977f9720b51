pub mod answer;
pub mod health;
pub mod pages;
pub mod question;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::middleware::{cors::public_cors, rate_limit};
use crate::AppState;

const MAX_BODY_BYTES: usize = 64 * 1024;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/question", post(question::create_question))
        .route("/api/question/:id", get(question::get_question))
        .route("/api/answer/:id", post(answer::submit_answer))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::RateLimiter::new(state.config.public_rps),
            rate_limit::rps_middleware,
        ))
        .layer(public_cors());

    let pages = Router::new()
        .route("/", get(pages::admin_page))
        .route("/q/:id", get(pages::question_page))
        .route("/health", get(health::health));

    let static_dir = state.config.static_dir.clone();

    pages
        .merge(api)
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}
