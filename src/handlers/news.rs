use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use http::StatusCode;
use serde::Deserialize;
use serde_json::from_str;
use tracing::{debug, warn};

use crate::{
    models::{cache::NewsCache, category, error::ApiError, news::NewsResponse},
    utils::state::AppState,
};

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
pub struct NewsQuery {
    category: Option<String>,
    q: Option<String>,
}

fn effective_query<'a>(category: &str, search: &'a str) -> &'a str {
    if !search.is_empty() {
        return search;
    }
    category::lookup(category)
        .unwrap_or_else(category::default_entry)
        .query
}

fn fetch_failure() -> ApiError {
    ApiError::UpstreamFailed("Failed to fetch news articles".to_string())
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NewsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    // An explicitly empty category collapses to the default before keying.
    let category = params
        .category
        .filter(|c| !c.is_empty())
        .unwrap_or_else(|| "all".to_string());
    let search = params.q.unwrap_or_default();

    let key = NewsCache::key(&category, &search);
    if let Some(cached) = state.news_cache.get(&key) {
        debug!("news cache hit: {key}");
        return Ok((StatusCode::OK, Json(cached)));
    }

    let query = effective_query(&category, &search);
    let res = state
        .http_client
        .get(format!("{}/everything", state.config.news_api_base_url))
        .query(&[
            ("q", query),
            ("apiKey", state.config.news_api_key.as_str()),
            ("language", "en"),
            ("sortBy", "publishedAt"),
            ("pageSize", "30"),
        ])
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .map_err(|err| {
            warn!("news request failed: {:?}", err);
            fetch_failure()
        })?;

    match res.status() {
        StatusCode::TOO_MANY_REQUESTS => return Err(ApiError::UpstreamRateLimited),
        StatusCode::UNAUTHORIZED => return Err(ApiError::UpstreamAuthFailed),
        status if !status.is_success() => {
            warn!("news upstream returned {status}");
            return Err(fetch_failure());
        }
        _ => {}
    }

    let body = res.text().await.map_err(|err| {
        warn!("news body read failed: {:?}", err);
        fetch_failure()
    })?;
    let response: NewsResponse = from_str(&body).map_err(|err| {
        warn!("news payload failed validation: {err}");
        fetch_failure()
    })?;
    let response = response.filtered();

    state.news_cache.insert(key, response.clone());
    Ok((StatusCode::OK, Json(response)))
}
