#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::body::{to_bytes, Body};
use axum::Router;
use chrono::{DateTime, Duration, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::util::ServiceExt;

use kiranfolio_backend::models::cache::{Clock, NewsCache};
use kiranfolio_backend::routes::router;
use kiranfolio_backend::utils::config::Config;
use kiranfolio_backend::utils::state::AppState;

pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, delta: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn test_config(news_base: &str, gemini_base: &str) -> Config {
    Config {
        news_api_key: "test-key".to_string(),
        news_api_base_url: news_base.to_string(),
        gemini_api_key: Some("test-key".to_string()),
        gemini_api_base_url: gemini_base.to_string(),
    }
}

pub fn test_app(config: Config) -> Router {
    test_app_with_cache(config, NewsCache::new(Duration::minutes(5)))
}

pub fn test_app_with_cache(config: Config, news_cache: NewsCache) -> Router {
    let state = Arc::new(AppState {
        config,
        http_client: reqwest::Client::new(),
        news_cache,
    });
    router(state)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}
