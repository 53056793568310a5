//! libSQL backend — async `DraftStore` implementation.
//!
//! Supports local file and in-memory databases. One `settings`-style
//! table holds every blob: `(key, value, updated_at)`, upsert on
//! conflict.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{params, Connection, Database};
use tracing::info;

use crate::error::StoreError;

use super::traits::DraftStore;

/// libSQL key-value store.
///
/// Holds a single connection reused for all operations;
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async
/// use.
pub struct LibSqlStore {
    #[allow(dead_code)]
    db: Arc<Database>,
    conn: Connection,
}

impl LibSqlStore {
    /// Open (or create) a local database file and initialize the schema.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Open(format!("Failed to create store directory: {e}")))?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to open libSQL database: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        info!(path = %path.display(), "Draft store opened");
        Ok(store)
    }

    /// Create an in-memory database (for tests).
    pub async fn memory() -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StoreError::Open(format!("Failed to create in-memory database: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::Open(format!("Failed to create connection: {e}")))?;

        let store = Self {
            db: Arc::new(db),
            conn,
        };
        store.init_schema().await?;
        Ok(store)
    }

    async fn init_schema(&self) -> Result<(), StoreError> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS settings (
                    key TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )",
                (),
            )
            .await
            .map_err(|e| StoreError::Query(format!("init_schema: {e}")))?;
        Ok(())
    }

    fn conn(&self) -> &Connection {
        &self.conn
    }
}

#[async_trait]
impl DraftStore for LibSqlStore {
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        let mut rows = self
            .conn()
            .query("SELECT value FROM settings WHERE key = ?1", params![key])
            .await
            .map_err(|e| StoreError::Query(format!("get: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let value_str: String = row.get(0).unwrap_or_else(|_| "null".to_string());
                let value: serde_json::Value =
                    serde_json::from_str(&value_str).unwrap_or(serde_json::Value::Null);
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StoreError::Query(format!("get: {e}"))),
        }
    }

    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        let now = Utc::now().to_rfc3339();
        let value_str =
            serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))?;

        self.conn()
            .execute(
                "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT (key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value_str, now],
            )
            .await
            .map_err(|e| StoreError::Query(format!("set: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::keys;

    #[tokio::test]
    async fn memory_roundtrip() {
        let store = LibSqlStore::memory().await.unwrap();
        assert!(store.get(keys::PREFERENCES).await.unwrap().is_none());

        let value = serde_json::json!({
            "userType": "local",
            "homeLocation": "Tampines",
            "interests": ["Food & Dining"]
        });
        store.set(keys::PREFERENCES, &value).await.unwrap();
        assert_eq!(store.get(keys::PREFERENCES).await.unwrap(), Some(value));
    }

    #[tokio::test]
    async fn upsert_overwrites() {
        let store = LibSqlStore::memory().await.unwrap();
        store
            .set(keys::PREFERENCES, &serde_json::json!({"userType": "tourist"}))
            .await
            .unwrap();
        store
            .set(keys::PREFERENCES, &serde_json::json!({"userType": "local"}))
            .await
            .unwrap();
        assert_eq!(
            store.get(keys::PREFERENCES).await.unwrap(),
            Some(serde_json::json!({"userType": "local"}))
        );
    }

    #[tokio::test]
    async fn file_store_persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merlion.db");

        {
            let store = LibSqlStore::open(&path).await.unwrap();
            store
                .set(keys::DISPLAY_NAME, &serde_json::json!("Mei"))
                .await
                .unwrap();
        }

        let store = LibSqlStore::open(&path).await.unwrap();
        assert_eq!(
            store.get(keys::DISPLAY_NAME).await.unwrap(),
            Some(serde_json::json!("Mei"))
        );
    }
}
