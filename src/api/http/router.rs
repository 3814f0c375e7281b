// src/api/http/router.rs
// HTTP router composition for REST API endpoints

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use std::path::Path;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::{
    chat::chat_handler,
    handlers::health_handler,
    history::{get_history_handler, save_mood_handler},
};
use crate::api::error::panic_response;
use crate::config::Config;
use crate::state::AppState;

/// REST endpoints, nested under /api
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route(
            "/mood-history",
            get(get_history_handler).post(save_mood_handler),
        )
}

/// CORS policy: any origin unless one is configured
pub fn cors_layer(origin: Option<&str>) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    match origin {
        Some(origin) => {
            let origin = HeaderValue::from_str(origin)
                .with_context(|| format!("invalid CORS origin '{origin}'"))?;
            Ok(cors.allow_origin(origin))
        }
        None => Ok(cors.allow_origin(Any)),
    }
}

/// Full application: API, static assets, and middleware
pub fn create_router(state: AppState, config: &Config) -> Result<Router> {
    let cors = cors_layer(config.cors_origin.as_deref())?;

    Ok(Router::new()
        .nest("/api", api_router())
        .fallback_service(static_files(&config.static_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state))
}

fn static_files(dir: &Path) -> ServeDir {
    if !dir.is_dir() {
        tracing::warn!("Static directory {} not found; only /api is served", dir.display());
    }
    ServeDir::new(dir)
}
