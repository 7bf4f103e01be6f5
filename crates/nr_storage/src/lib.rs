use nr_core::{KeyValueStore, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub mod backends;
pub mod bookmarks;
pub mod preferences;
pub mod theme_cache;

pub use backends::*;
pub use bookmarks::BookmarkStore;
pub use preferences::{PreferenceStore, Preferences};
pub use theme_cache::ThemeCache;

pub const DEFAULT_DB_PATH: &str = "news_reader.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum StoreKind {
    Memory,
    #[default]
    Sqlite,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub kind: StoreKind,
    pub path: PathBuf,
}

impl StoreConfig {
    pub fn memory() -> Self {
        Self {
            kind: StoreKind::Memory,
            ..Self::default()
        }
    }

    pub fn sqlite(path: impl Into<PathBuf>) -> Self {
        Self {
            kind: StoreKind::Sqlite,
            path: path.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            kind: StoreKind::default(),
            path: PathBuf::from(DEFAULT_DB_PATH),
        }
    }
}

pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>> {
    let store: Arc<dyn KeyValueStore> = match config.kind {
        StoreKind::Memory => Arc::new(InMemoryStore::new()),
        #[cfg(feature = "sqlite")]
        StoreKind::Sqlite => Arc::new(SqliteStore::new_with_path(&config.path).await?),
        #[cfg(not(feature = "sqlite"))]
        StoreKind::Sqlite => {
            return Err(nr_core::Error::Config(
                "SQLite storage requires the `sqlite` feature".to_string(),
            ))
        }
    };
    info!("🏦 Storage backend initialized (using {})", store.name());
    Ok(store)
}

pub mod prelude {
    pub use super::backends::*;
    pub use super::{create_store, BookmarkStore, PreferenceStore, StoreConfig, StoreKind};
}
