use async_trait::async_trait;
use nr_core::{Error, KeyValueStore, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

const MIGRATIONS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS kv_store (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
    // Add future migrations here
];

fn storage_error(context: &'static str) -> impl Fn(sqlx::Error) -> Error {
    move |e| Error::Storage(format!("{}: {}", context, e))
}

pub struct SqliteStore {
    pool: Arc<SqlitePool>,
    db_path: Option<PathBuf>,
    // Serializes read-modify-write cycles so two updates of the same key
    // never race for the SQLite write lock.
    write_lock: Mutex<()>,
}

impl SqliteStore {
    pub async fn new_with_path(db_path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(storage_error("Failed to open database"))?;

        let store = Self {
            pool: Arc::new(pool),
            db_path: Some(db_path.to_path_buf()),
            write_lock: Mutex::new(()),
        };
        store.migrate().await?;
        debug!("Opened key-value database at {}", db_path.display());
        Ok(store)
    }

    /// Private in-memory database, mostly useful for tests.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(storage_error("Failed to open in-memory database"))?;

        let store = Self {
            pool: Arc::new(pool),
            db_path: None,
            write_lock: Mutex::new(()),
        };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<()> {
        for (i, migration) in MIGRATIONS.iter().enumerate() {
            sqlx::query(migration)
                .execute(&*self.pool)
                .await
                .map_err(|e| Error::Storage(format!("Failed to run migration {}: {}", i, e)))?;
        }
        Ok(())
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&*self.pool)
            .await
            .map_err(storage_error("Failed to read item"))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value) VALUES (?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&*self.pool)
        .await
        .map_err(storage_error("Failed to write item"))?;
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        sqlx::query("DELETE FROM kv_store WHERE key = ?")
            .bind(key)
            .execute(&*self.pool)
            .await
            .map_err(storage_error("Failed to remove item"))?;
        Ok(())
    }

    async fn update_item(
        &self,
        key: &str,
        update: &mut (dyn for<'a> FnMut(Option<&'a str>) -> Result<Option<String>> + Send),
    ) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to start transaction"))?;

        let current = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
            .bind(key)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error("Failed to read item"))?;

        // An error here drops `tx`, which rolls the transaction back.
        match update(current.as_deref())? {
            Some(value) => {
                sqlx::query(
                    r#"
                    INSERT INTO kv_store (key, value) VALUES (?, ?)
                    ON CONFLICT(key) DO UPDATE SET value = excluded.value
                    "#,
                )
                .bind(key)
                .bind(value)
                .execute(&mut *tx)
                .await
                .map_err(storage_error("Failed to write item"))?;
            }
            None => {
                sqlx::query("DELETE FROM kv_store WHERE key = ?")
                    .bind(key)
                    .execute(&mut *tx)
                    .await
                    .map_err(storage_error("Failed to remove item"))?;
            }
        }

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit transaction"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_sqlite_store() {
        let store = SqliteStore::in_memory().await.unwrap();
        assert_eq!(store.get_item("themePreference").await.unwrap(), None);

        store.set_item("themePreference", "\"dark\"").await.unwrap();
        store.set_item("themePreference", "\"light\"").await.unwrap();
        assert_eq!(
            store.get_item("themePreference").await.unwrap().as_deref(),
            Some("\"light\"")
        );

        store.remove_item("themePreference").await.unwrap();
        assert_eq!(store.get_item("themePreference").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_reopen() {
        let temp_dir = tempdir().unwrap();
        let db_path = temp_dir.path().join("nested").join("test.db");

        {
            let store = SqliteStore::new_with_path(&db_path).await.unwrap();
            assert_eq!(store.db_path(), Some(db_path.as_path()));
            store.set_item("pushNotifications", "false").await.unwrap();
        }

        let store = SqliteStore::new_with_path(&db_path).await.unwrap();
        assert_eq!(
            store.get_item("pushNotifications").await.unwrap().as_deref(),
            Some("false")
        );
    }

    #[tokio::test]
    async fn test_update_item_rolls_back_on_error() {
        let store = SqliteStore::in_memory().await.unwrap();
        store.set_item("news_bookmarks", "[]").await.unwrap();

        let result = store
            .update_item("news_bookmarks", &mut |_: Option<&str>| {
                Err(Error::Storage("refused".to_string()))
            })
            .await;
        assert!(result.is_err());
        assert_eq!(
            store.get_item("news_bookmarks").await.unwrap().as_deref(),
            Some("[]")
        );

        store
            .update_item("news_bookmarks", &mut |current: Option<&str>| {
                assert_eq!(current, Some("[]"));
                Ok(None)
            })
            .await
            .unwrap();
        assert_eq!(store.get_item("news_bookmarks").await.unwrap(), None);
    }
}
