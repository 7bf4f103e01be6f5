use async_trait::async_trait;
use nr_core::{validate_articles, Category, Error, NewsProvider, NewsResponse, Result};
use std::time::Duration;
use tracing::{debug, error};

use crate::corpus;

/// Serves the reference corpus after a fixed delay, standing in for a
/// network-backed news API.
#[derive(Debug, Clone)]
pub struct MockNewsProvider {
    latency: Duration,
}

impl MockNewsProvider {
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self::with_latency(Self::DEFAULT_LATENCY)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn fetch_headlines(&self, category: &str) -> Result<NewsResponse> {
        self.simulate_latency().await;

        let category = Category::from_id(category);
        let articles = validate_articles(&corpus::raw_articles(category));
        debug!("📰 Serving {} {} headlines", articles.len(), category);
        Ok(NewsResponse::ok(articles))
    }

    pub async fn search(&self, query: &str) -> Result<NewsResponse> {
        self.simulate_latency().await;

        if query.is_empty() {
            return Err(Error::InvalidQuery("empty search query".to_string()));
        }

        let articles: Vec<_> = validate_articles(&corpus::search_corpus())
            .into_iter()
            .filter(|article| article.matches_query(query))
            .collect();
        debug!("🔎 {} articles match {:?}", articles.len(), query);
        Ok(NewsResponse::ok(articles))
    }
}

impl Default for MockNewsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NewsProvider for MockNewsProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get_headlines(&self, category: &str) -> NewsResponse {
        or_unavailable("get_headlines", self.fetch_headlines(category).await)
    }

    async fn search_headlines(&self, query: &str) -> NewsResponse {
        or_unavailable("search_headlines", self.search(query).await)
    }
}

/// Logs a failed call and substitutes the placeholder response.
fn or_unavailable(operation: &str, result: Result<NewsResponse>) -> NewsResponse {
    result.unwrap_or_else(|e| {
        error!("Error in {}: {}", operation, e);
        NewsResponse::unavailable()
    })
}
