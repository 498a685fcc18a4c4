use reqwest::Client;

use crate::models::cache::NewsCache;
use crate::utils::config::Config;

pub struct AppState {
    pub config: Config,
    pub http_client: Client,
    pub news_cache: NewsCache,
}
