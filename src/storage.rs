use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::{DashboardError, Result};

/// Durable key/value storage for the dashboard's persisted state
///
/// Each blob is stored under a fixed string key and read back in full
/// at startup.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Get a stored blob by key
    async fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Store a blob under a key, replacing any previous value
    async fn set(&self, key: &str, value: Bytes) -> Result<()>;

    /// Remove a key
    async fn remove(&self, key: &str) -> Result<()>;
}

/// In-memory storage, used by tests and ephemeral sessions
pub struct MemoryStorage {
    store: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let store = self.store.read().await;
        Ok(store.get(key).cloned())
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<()> {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut store = self.store.write().await;
        store.remove(key);
        Ok(())
    }
}

/// Disk-backed storage: one JSON file per key under a root directory
pub struct DiskStorage {
    root_dir: PathBuf,
}

impl DiskStorage {
    /// Create disk storage rooted at the specified directory
    pub async fn new(root_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root_dir).await?;
        Ok(Self { root_dir })
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl Storage for DiskStorage {
    async fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let path = self.key_to_path(key);

        match fs::read(&path).await {
            Ok(data) => Ok(Some(Bytes::from(data))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DashboardError::Storage {
                message: format!("Failed to read {}: {}", key, e),
            }),
        }
    }

    async fn set(&self, key: &str, value: Bytes) -> Result<()> {
        let path = self.key_to_path(key);

        fs::write(&path, &value)
            .await
            .map_err(|e| DashboardError::Storage {
                message: format!("Failed to write {}: {}", key, e),
            })
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DashboardError::Storage {
                message: format!("Failed to remove {}: {}", key, e),
            }),
        }
    }
}
