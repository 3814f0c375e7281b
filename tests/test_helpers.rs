// tests/test_helpers.rs
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use mindful_chat::AppState;
use mindful_chat::api::create_router;
use mindful_chat::chat::TipCatalog;
use mindful_chat::config::Config;
use mindful_chat::history::MoodHistory;
use mindful_chat::sentiment::{SentimentResult, SentimentScorer};

/// Scorer that ignores the text and returns a fixed score
pub struct FixedScorer(pub i32);

impl SentimentScorer for FixedScorer {
    fn analyze(&self, text: &str) -> SentimentResult {
        SentimentResult {
            score: self.0,
            tokens: text.split_whitespace().map(str::to_string).collect(),
            ..Default::default()
        }
    }
}

/// Scorer that always panics, for exercising the 500 path
pub struct PanickingScorer;

impl SentimentScorer for PanickingScorer {
    fn analyze(&self, _text: &str) -> SentimentResult {
        panic!("scorer blew up");
    }
}

/// App with the built-in lexicon scorer and default config
pub fn create_test_app() -> Router {
    app_with_state(AppState::default(), &Config::default())
}

pub fn app_with_scorer(scorer: impl SentimentScorer + 'static) -> Router {
    let state = AppState::new(
        Arc::new(scorer),
        TipCatalog::default(),
        MoodHistory::default(),
    );
    app_with_state(state, &Config::default())
}

pub fn app_with_state(state: AppState, config: &Config) -> Router {
    create_router(state, config).expect("build router")
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}
