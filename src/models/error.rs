use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("Rate limit exceeded. Please try again later.")]
    UpstreamRateLimited,
    #[error("Invalid API key")]
    UpstreamAuthFailed,
    #[error("{0}")]
    UpstreamFailed(String),
    #[error("{0}")]
    NotConfigured(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::UpstreamAuthFailed => StatusCode::UNAUTHORIZED,
            ApiError::UpstreamFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
