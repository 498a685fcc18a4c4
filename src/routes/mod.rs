use axum::{
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Duration;
use http::StatusCode;
use serde_json::json;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn, Level};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt, Registry};

use crate::{
    handlers::{ai::ask_ai, news::get_news},
    models::cache::NewsCache,
    utils::{config::Config, state::AppState},
};

const CACHE_TTL_MINUTES: i64 = 5;

pub fn make_app() -> Router {
    let log_level = std::env::var("LOG_LEVEL")
        .unwrap_or_else(|_| "info".to_string())
        .to_lowercase();

    let level = match log_level.as_str() {
        "error" => Level::ERROR,
        "warn" => Level::WARN,
        "info" => Level::INFO,
        "debug" => Level::DEBUG,
        "trace" => Level::TRACE,
        _ => Level::INFO,
    };

    let filter = filter::Targets::new()
        .with_target("tower_http::trace::on_response", Level::TRACE)
        .with_target("tower_http::trace::on_request", Level::TRACE)
        .with_target("tower_http::trace::make_span", Level::DEBUG)
        .with_target("axum::rejection", Level::TRACE)
        .with_target(env!("CARGO_CRATE_NAME"), level)
        .with_default(Level::INFO);

    let tracing_layer = tracing_subscriber::fmt::layer();

    Registry::default().with(tracing_layer).with(filter).init();

    info!("Initializing application...");
    let config = Config::init();
    info!("Configuration loaded successfully");

    if config.news_api_key.is_empty() {
        warn!("NEWS_API_KEY is not set; news requests will fail upstream");
    }
    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY is not set; /api/ai will respond 503");
    }

    let http_client = reqwest::Client::new();
    let news_cache = NewsCache::new(Duration::minutes(CACHE_TTL_MINUTES));

    let state = Arc::new(AppState {
        config,
        http_client,
        news_cache,
    });

    info!("Application initialized successfully");
    router(state)
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/api/news", get(get_news))
        .route("/api/ai", post(ask_ai))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"}))).into_response()
}
