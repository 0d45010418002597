//! HTTP routing for the gateway

pub mod health;
pub mod voice;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the gateway router.
pub fn create_router(state: AppState) -> Router {
    let cors_enabled = state.config.server.cors_enabled;

    let router = Router::new()
        .route("/health-check", get(health::health_check))
        .route("/tts/:voice", post(voice::synthesize))
        .route("/stream-tts/:voice", post(voice::synthesize_stream))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if cors_enabled {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
