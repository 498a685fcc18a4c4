use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, response::IntoResponse, Json};
use http::StatusCode;
use serde_json::{from_str, json, Value};
use tracing::warn;

use crate::{models::error::ApiError, utils::state::AppState};

const GEMINI_MODEL: &str = "gemini-2.0-flash-exp";
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

const AI_INSTRUCTION: &str = "You are a tech news assistant. Only answer questions related to technology, news, tech companies, innovations, or current events. \n\
If the question is not related to news or technology (like booking tickets, cooking recipes, etc.), politely respond: \"I'm a tech news assistant. I can only help with technology and news-related questions. Please ask something about tech news, companies, or innovations.\"\n\n\
User question: ";

fn contextual_prompt(question: &str) -> String {
    format!("{AI_INSTRUCTION}{question}")
}

fn extract_answer(response: &Value) -> Option<String> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
}

fn ai_failure() -> ApiError {
    ApiError::UpstreamFailed("Failed to get AI response".to_string())
}

pub async fn ask_ai(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    let question = payload
        .get("query")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query is required".to_string()))?;

    let api_key = state
        .config
        .gemini_api_key
        .as_deref()
        .ok_or_else(|| ApiError::NotConfigured("AI service is not configured".to_string()))?;

    let body = json!({
        "contents": [{
            "parts": [{ "text": contextual_prompt(question) }]
        }]
    });

    let res = state
        .http_client
        .post(format!(
            "{}/models/{GEMINI_MODEL}:generateContent",
            state.config.gemini_api_base_url
        ))
        .query(&[("key", api_key)])
        .header("Content-Type", "application/json")
        .body(body.to_string())
        .timeout(UPSTREAM_TIMEOUT)
        .send()
        .await
        .map_err(|err| {
            warn!("ai request failed: {:?}", err);
            ai_failure()
        })?;

    match res.status() {
        StatusCode::TOO_MANY_REQUESTS => return Err(ApiError::UpstreamRateLimited),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            return Err(ApiError::UpstreamAuthFailed)
        }
        status if !status.is_success() => {
            warn!("ai upstream returned {status}");
            return Err(ai_failure());
        }
        _ => {}
    }

    let body = res.text().await.map_err(|err| {
        warn!("ai body read failed: {:?}", err);
        ai_failure()
    })?;
    let parsed: Value = from_str(&body).map_err(|err| {
        warn!("ai response was not valid JSON: {err}");
        ai_failure()
    })?;
    let answer = extract_answer(&parsed).ok_or_else(|| {
        warn!("ai response had no candidate text");
        ai_failure()
    })?;

    Ok((StatusCode::OK, Json(json!({ "response": answer }))))
}
