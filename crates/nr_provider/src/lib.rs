use nr_core::{Error, NewsProvider, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub mod corpus;
pub mod mock;

pub use mock::MockNewsProvider;

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: String,
    pub latency: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "mock".to_string(),
            latency: MockNewsProvider::DEFAULT_LATENCY,
        }
    }
}

pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn NewsProvider>> {
    let provider: Arc<dyn NewsProvider> = match config.name.as_str() {
        "mock" => Arc::new(MockNewsProvider::with_latency(config.latency)),
        other => return Err(Error::Config(format!("Unknown news provider: {}", other))),
    };
    info!("🗞️ News provider initialized (using {})", provider.name());
    Ok(provider)
}

pub mod prelude {
    pub use super::{create_provider, MockNewsProvider, ProviderConfig};
    pub use nr_core::{Article, NewsProvider, NewsResponse, Result, Error};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_provider() {
        let provider = create_provider(&ProviderConfig::default()).unwrap();
        assert_eq!(provider.name(), "mock");

        let config = ProviderConfig {
            name: "newsapi".to_string(),
            ..ProviderConfig::default()
        };
        assert!(matches!(create_provider(&config), Err(Error::Config(_))));
    }
}
