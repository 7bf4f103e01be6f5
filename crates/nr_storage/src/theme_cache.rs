use nr_core::ThemePreference;
use tokio::sync::RwLock;

/// Last theme preference read from or written to the store.
///
/// Shared by every [`PreferenceStore`](crate::PreferenceStore) clone so that
/// independent views asking for the theme hit the store once. Empty until
/// the first successful load or save.
#[derive(Debug, Default)]
pub struct ThemeCache {
    cached: RwLock<Option<ThemePreference>>,
}

impl ThemeCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<ThemePreference> {
        *self.cached.read().await
    }

    pub async fn set(&self, theme: ThemePreference) {
        *self.cached.write().await = Some(theme);
    }

    pub async fn invalidate(&self) {
        *self.cached.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_theme_cache() {
        let cache = ThemeCache::new();
        assert_eq!(cache.get().await, None);

        cache.set(ThemePreference::Dark).await;
        assert_eq!(cache.get().await, Some(ThemePreference::Dark));

        cache.invalidate().await;
        assert_eq!(cache.get().await, None);
    }
}
