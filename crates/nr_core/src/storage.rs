use async_trait::async_trait;
use crate::Result;

/// Keys under which the application persists its state. Values are JSON.
pub mod keys {
    pub const BOOKMARKS: &str = "news_bookmarks";
    pub const THEME_PREFERENCE: &str = "themePreference";
    pub const PUSH_NOTIFICATIONS: &str = "pushNotifications";
    pub const BREAKING_NEWS: &str = "breakingNews";
    pub const FONT_SIZE: &str = "fontSize";
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Short backend name for logging
    fn name(&self) -> &str;

    /// Get the raw value stored under `key`, if any
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; deleting a missing key is not an error
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// Read-modify-write a single key without interleaving with other
    /// updates of the same store. `update` receives the current value and
    /// returns the new one; `None` removes the key. If `update` fails the
    /// stored value is left untouched.
    async fn update_item(
        &self,
        key: &str,
        update: &mut (dyn for<'a> FnMut(Option<&'a str>) -> Result<Option<String>> + Send),
    ) -> Result<()>;
}
