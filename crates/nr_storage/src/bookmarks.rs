use nr_core::{keys, validate_articles, Article, Error, KeyValueStore, Result};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

/// Bookmarked articles, persisted as one JSON array under
/// [`keys::BOOKMARKS`]. Entries are unique by url and kept in insertion
/// order.
///
/// The plain methods never fail: store faults are logged and reported as an
/// empty list or `false`. The `try_` variants surface the error instead.
#[derive(Clone)]
pub struct BookmarkStore {
    store: Arc<dyn KeyValueStore>,
}

impl BookmarkStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn try_load(&self) -> Result<Vec<Article>> {
        match self.store.get_item(keys::BOOKMARKS).await? {
            Some(raw) => decode(&raw),
            None => Ok(Vec::new()),
        }
    }

    pub async fn load(&self) -> Vec<Article> {
        self.try_load().await.unwrap_or_else(|e| {
            error!("Error loading bookmarks: {}", e);
            Vec::new()
        })
    }

    pub async fn try_is_bookmarked(&self, url: &str) -> Result<bool> {
        Ok(self.try_load().await?.iter().any(|b| b.url == url))
    }

    pub async fn is_bookmarked(&self, url: &str) -> bool {
        self.try_is_bookmarked(url).await.unwrap_or_else(|e| {
            error!("Error checking bookmark status: {}", e);
            false
        })
    }

    pub async fn find(&self, url: &str) -> Option<Article> {
        self.load().await.into_iter().find(|b| b.url == url)
    }

    /// Adds the article if no bookmark has its url, removes the existing
    /// one otherwise. Returns whether the article is bookmarked afterwards.
    ///
    /// Works on the stored entries as they are, so entries that would not
    /// survive validation on load are kept untouched.
    pub async fn try_toggle(&self, article: &Article) -> Result<bool> {
        let mut bookmarked = false;
        self.store
            .update_item(keys::BOOKMARKS, &mut |current: Option<&str>| {
                let mut entries = match current {
                    Some(raw) => decode_entries(raw)?,
                    None => Vec::new(),
                };
                let position = entries.iter().position(|entry| {
                    entry.get("url").and_then(Value::as_str) == Some(article.url.as_str())
                });
                match position {
                    Some(index) => {
                        entries.remove(index);
                        bookmarked = false;
                    }
                    None => {
                        entries.push(serde_json::to_value(article)?);
                        bookmarked = true;
                    }
                }
                Ok(Some(serde_json::to_string(&entries)?))
            })
            .await?;

        info!(
            "{} bookmark: {}",
            if bookmarked { "Added" } else { "Removed" },
            article.url
        );
        Ok(bookmarked)
    }

    pub async fn toggle(&self, article: &Article) -> bool {
        self.try_toggle(article).await.unwrap_or_else(|e| {
            error!("Error toggling bookmark: {}", e);
            false
        })
    }
}

fn decode_entries(raw: &str) -> Result<Vec<Value>> {
    match serde_json::from_str(raw)? {
        Value::Array(entries) => Ok(entries),
        _ => Err(Error::Storage("Stored bookmarks are not a list".to_string())),
    }
}

fn decode(raw: &str) -> Result<Vec<Article>> {
    Ok(validate_articles(&Value::Array(decode_entries(raw)?)))
}
