const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";
const DEFAULT_GEMINI_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Clone)]
pub struct Config {
    pub news_api_key: String,
    pub news_api_base_url: String,
    pub gemini_api_key: Option<String>,
    pub gemini_api_base_url: String,
}

impl Config {
    // No variable is required at startup: a missing news key only produces
    // failing upstream calls, and a missing Gemini key disables /api/ai.
    pub fn init() -> Self {
        Config {
            news_api_key: std::env::var("NEWS_API_KEY").unwrap_or_default(),
            news_api_base_url: std::env::var("NEWS_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_NEWS_API_BASE_URL.to_string()),
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            gemini_api_base_url: std::env::var("GEMINI_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_API_BASE_URL.to_string()),
        }
    }
}
