use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSource {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub url_to_image: Option<String>,
    pub published_at: String,
    pub source: NewsSource,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl NewsArticle {
    // NewsAPI marks withdrawn articles with a literal "[Removed]" title.
    pub fn is_displayable(&self) -> bool {
        !self.title.is_empty()
            && self.title != "[Removed]"
            && self.description.as_deref().is_some_and(|d| !d.is_empty())
            && !self.url.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub status: String,
    pub total_results: u32,
    pub articles: Vec<NewsArticle>,
}

impl NewsResponse {
    // totalResults stays at the upstream count; only the article list shrinks.
    pub fn filtered(mut self) -> Self {
        self.articles.retain(|article| article.is_displayable());
        self
    }
}
