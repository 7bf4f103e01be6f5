use async_trait::async_trait;
use nr_core::{KeyValueStore, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn put(&mut self, key: &str, value: Option<String>) {
        match value {
            Some(value) => {
                self.items.insert(key.to_string(), value);
            }
            None => {
                self.items.remove(key);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Process-local store. Clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    store: Arc<RwLock<MemoryStore>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let store = self.store.read().await;
        Ok(store.get(key).map(str::to_string))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key, Some(value.to_string()));
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.put(key, None);
        Ok(())
    }

    async fn update_item(
        &self,
        key: &str,
        update: &mut (dyn for<'a> FnMut(Option<&'a str>) -> Result<Option<String>> + Send),
    ) -> Result<()> {
        // The write guard is held across the whole read-modify-write.
        let mut store = self.store.write().await;
        let next = update(store.get(key))?;
        store.put(key, next);
        Ok(())
    }
}
