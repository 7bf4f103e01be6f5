use async_trait::async_trait;
use crate::types::NewsResponse;

/// A source of headlines. Implementations never fail outward: faults are
/// reported through an error-status response carrying the placeholder
/// article.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Returns the name of the provider
    fn name(&self) -> &str;

    /// Headlines for a category identifier; unknown identifiers get the
    /// general set
    async fn get_headlines(&self, category: &str) -> NewsResponse;

    /// Articles whose title or description contains `query`, ignoring case
    async fn search_headlines(&self, query: &str) -> NewsResponse;
}
