use nr_core::{keys, ColorScheme, FontSize, KeyValueStore, Result, ThemePreference};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

use crate::theme_cache::ThemeCache;

/// Snapshot of every display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: ThemePreference,
    pub font_size: FontSize,
    pub push_notifications: bool,
    pub breaking_news: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: ThemePreference::System,
            font_size: FontSize::Default,
            push_notifications: true,
            breaking_news: true,
        }
    }
}

/// Preference scalars, each under its own key. Missing or unreadable keys
/// load as their defaults; failed writes are logged and reported as `false`.
#[derive(Clone)]
pub struct PreferenceStore {
    store: Arc<dyn KeyValueStore>,
    theme_cache: Arc<ThemeCache>,
}

impl PreferenceStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_cache(store, Arc::new(ThemeCache::new()))
    }

    pub fn with_cache(store: Arc<dyn KeyValueStore>, theme_cache: Arc<ThemeCache>) -> Self {
        Self { store, theme_cache }
    }

    pub fn theme_cache(&self) -> &Arc<ThemeCache> {
        &self.theme_cache
    }

    pub async fn try_load_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.store.get_item(key).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    async fn load_value<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load_value(key).await {
            Ok(value) => value.unwrap_or(default),
            Err(e) => {
                error!("Error loading preference {}: {}", key, e);
                default
            }
        }
    }

    pub async fn try_save_value<T: Serialize + Sync>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set_item(key, &raw).await
    }

    async fn save_value<T: Serialize + Sync>(&self, key: &str, value: &T) -> bool {
        match self.try_save_value(key, value).await {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving preference {}: {}", key, e);
                false
            }
        }
    }

    /// Cached after the first successful read, including a read that finds
    /// no stored value.
    pub async fn load_theme(&self) -> ThemePreference {
        if let Some(theme) = self.theme_cache.get().await {
            return theme;
        }

        match self.try_load_value::<ThemePreference>(keys::THEME_PREFERENCE).await {
            Ok(stored) => {
                let theme = stored.unwrap_or_default();
                self.theme_cache.set(theme).await;
                debug!("Loaded theme preference: {:?}", theme);
                theme
            }
            Err(e) => {
                error!("Failed to load theme preference: {}", e);
                ThemePreference::default()
            }
        }
    }

    pub async fn save_theme(&self, theme: ThemePreference) -> bool {
        if self.save_value(keys::THEME_PREFERENCE, &theme).await {
            self.theme_cache.set(theme).await;
            true
        } else {
            false
        }
    }

    /// Moves to the next theme and returns it, even if it could not be
    /// persisted.
    pub async fn cycle_theme(&self) -> ThemePreference {
        let next = self.load_theme().await.next();
        self.save_theme(next).await;
        next
    }

    pub async fn color_scheme(&self, system: ColorScheme) -> ColorScheme {
        self.load_theme().await.resolve(system)
    }

    pub async fn load_font_size(&self) -> FontSize {
        self.load_value(keys::FONT_SIZE, FontSize::default()).await
    }

    pub async fn save_font_size(&self, font_size: FontSize) -> bool {
        self.save_value(keys::FONT_SIZE, &font_size).await
    }

    pub async fn cycle_font_size(&self) -> FontSize {
        let next = self.load_font_size().await.next();
        self.save_font_size(next).await;
        next
    }

    pub async fn load_push_notifications(&self) -> bool {
        self.load_value(keys::PUSH_NOTIFICATIONS, true).await
    }

    pub async fn set_push_notifications(&self, enabled: bool) -> bool {
        self.save_value(keys::PUSH_NOTIFICATIONS, &enabled).await
    }

    pub async fn load_breaking_news(&self) -> bool {
        self.load_value(keys::BREAKING_NEWS, true).await
    }

    pub async fn set_breaking_news(&self, enabled: bool) -> bool {
        self.save_value(keys::BREAKING_NEWS, &enabled).await
    }

    pub async fn load_all(&self) -> Preferences {
        Preferences {
            theme: self.load_theme().await,
            font_size: self.load_font_size().await,
            push_notifications: self.load_push_notifications().await,
            breaking_news: self.load_breaking_news().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::InMemoryStore;

    fn preferences() -> (Arc<InMemoryStore>, PreferenceStore) {
        let store = Arc::new(InMemoryStore::new());
        (store.clone(), PreferenceStore::new(store))
    }

    #[tokio::test]
    async fn test_defaults_when_absent() {
        let (_, prefs) = preferences();
        assert_eq!(prefs.load_all().await, Preferences::default());
        assert_eq!(prefs.load_theme().await, ThemePreference::System);
        assert_eq!(prefs.load_font_size().await, FontSize::Default);
        assert!(prefs.load_push_notifications().await);
        assert!(prefs.load_breaking_news().await);
    }

    #[tokio::test]
    async fn test_values_are_stored_as_json() {
        let (store, prefs) = preferences();
        assert!(prefs.save_theme(ThemePreference::Dark).await);
        assert!(prefs.save_font_size(FontSize::Large).await);
        assert!(prefs.set_push_notifications(false).await);
        assert!(prefs.set_breaking_news(false).await);

        for (key, expected) in [
            (keys::THEME_PREFERENCE, "\"dark\""),
            (keys::FONT_SIZE, "\"large\""),
            (keys::PUSH_NOTIFICATIONS, "false"),
            (keys::BREAKING_NEWS, "false"),
        ] {
            assert_eq!(store.get_item(key).await.unwrap().as_deref(), Some(expected));
        }

        let fresh = PreferenceStore::new(store);
        assert_eq!(
            fresh.load_all().await,
            Preferences {
                theme: ThemePreference::Dark,
                font_size: FontSize::Large,
                push_notifications: false,
                breaking_news: false,
            }
        );
    }

    #[tokio::test]
    async fn test_unreadable_value_falls_back() {
        let (store, prefs) = preferences();
        store.set_item(keys::FONT_SIZE, "\"enormous\"").await.unwrap();
        store.set_item(keys::PUSH_NOTIFICATIONS, "yes").await.unwrap();
        store.set_item(keys::THEME_PREFERENCE, "42").await.unwrap();

        assert_eq!(prefs.load_font_size().await, FontSize::Default);
        assert!(prefs.load_push_notifications().await);
        assert_eq!(prefs.load_theme().await, ThemePreference::System);
        assert_eq!(prefs.theme_cache().get().await, None);
    }

    #[tokio::test]
    async fn test_theme_is_cached_until_invalidated() {
        let (store, prefs) = preferences();
        store.set_item(keys::THEME_PREFERENCE, "\"light\"").await.unwrap();
        assert_eq!(prefs.load_theme().await, ThemePreference::Light);

        // A write behind the cache's back is not observed...
        store.set_item(keys::THEME_PREFERENCE, "\"dark\"").await.unwrap();
        assert_eq!(prefs.load_theme().await, ThemePreference::Light);

        // ...until the cache is invalidated.
        prefs.theme_cache().invalidate().await;
        assert_eq!(prefs.load_theme().await, ThemePreference::Dark);
    }

    #[tokio::test]
    async fn test_clones_share_the_theme_cache() {
        let (store, prefs) = preferences();
        let other_view = prefs.clone();
        prefs.save_theme(ThemePreference::Dark).await;

        store.remove_item(keys::THEME_PREFERENCE).await.unwrap();
        assert_eq!(other_view.load_theme().await, ThemePreference::Dark);
        assert_eq!(other_view.color_scheme(ColorScheme::Light).await, ColorScheme::Dark);
    }

    #[tokio::test]
    async fn test_cycles() {
        let (_, prefs) = preferences();
        assert_eq!(prefs.cycle_theme().await, ThemePreference::Light);
        assert_eq!(prefs.cycle_theme().await, ThemePreference::Dark);
        assert_eq!(prefs.cycle_theme().await, ThemePreference::System);

        assert_eq!(prefs.cycle_font_size().await, FontSize::Large);
        assert_eq!(prefs.cycle_font_size().await, FontSize::Small);
        assert_eq!(prefs.load_font_size().await, FontSize::Small);
    }

    #[tokio::test]
    async fn test_system_theme_follows_platform() {
        let (_, prefs) = preferences();
        assert_eq!(prefs.color_scheme(ColorScheme::Dark).await, ColorScheme::Dark);
        assert_eq!(prefs.color_scheme(ColorScheme::Light).await, ColorScheme::Light);
    }
}
