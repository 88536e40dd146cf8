use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::Result;
use crate::storage::Storage;

/// Fixed storage key for the persisted configuration blob
pub const CONFIG_KEY: &str = "grande-config";

/// Normalized dashboard configuration
///
/// Absent fields are empty strings, never options, so downstream code
/// does not need to null-check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub github_username: String,
    pub github_token: String,
    pub npm_username: String,
    pub render_api_token: String,
}

impl DashboardConfig {
    /// Normalize a raw configuration map
    ///
    /// Each logical field may arrive under its plain name or a legacy
    /// `VITE_`-prefixed name left over from the settings form. The plain
    /// name wins; the prefixed name is the fallback.
    pub fn from_raw(raw: &HashMap<String, String>) -> Self {
        Self {
            github_username: resolve(raw, "githubUsername", "VITE_GITHUB_USERNAME"),
            github_token: resolve(raw, "githubToken", "VITE_GITHUB_TOKEN"),
            npm_username: resolve(raw, "npmUsername", "VITE_NPM_USERNAME"),
            render_api_token: resolve(raw, "renderApiToken", "VITE_RENDER_API_TOKEN"),
        }
    }
}

fn resolve(raw: &HashMap<String, String>, key: &str, legacy_key: &str) -> String {
    raw.get(key)
        .filter(|v| !v.is_empty())
        .or_else(|| raw.get(legacy_key))
        .cloned()
        .unwrap_or_default()
}

/// Persisted store of user-supplied credentials and identifiers
///
/// The raw map is replaced wholesale by a settings save and written to
/// storage on every change. Dual-name ambiguity never leaves this module:
/// callers only ever see the normalized [`DashboardConfig`].
pub struct ConfigStore {
    storage: Arc<dyn Storage>,
    state: RwLock<HashMap<String, String>>,
}

impl ConfigStore {
    /// Rehydrate the store from durable storage
    ///
    /// An absent or unreadable blob is the normal first-run state and
    /// yields an empty configuration.
    pub async fn load(storage: Arc<dyn Storage>) -> Self {
        let state = match storage.get(CONFIG_KEY).await {
            Ok(Some(blob)) => match serde_json::from_slice(&blob) {
                Ok(map) => map,
                Err(e) => {
                    warn!("discarding unreadable configuration blob: {}", e);
                    HashMap::new()
                }
            },
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!("failed to read configuration: {}", e);
                HashMap::new()
            }
        };

        Self {
            storage,
            state: RwLock::new(state),
        }
    }

    /// Get the latest normalized configuration
    ///
    /// Re-reads the live state on every call so a settings save is
    /// visible to the very next fetch. Cannot fail.
    pub async fn latest(&self) -> DashboardConfig {
        let state = self.state.read().await;
        DashboardConfig::from_raw(&state)
    }

    /// Snapshot of the raw map, for the settings form
    pub async fn raw(&self) -> HashMap<String, String> {
        self.state.read().await.clone()
    }

    /// Replace the configuration wholesale and persist it
    pub async fn replace(&self, raw: HashMap<String, String>) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write().await;
            *state = raw;
            state.clone()
        };

        let blob = serde_json::to_vec(&snapshot)?;
        self.storage.set(CONFIG_KEY, Bytes::from(blob)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn raw(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_raw_normalizes_to_empty_strings() {
        let config = DashboardConfig::from_raw(&HashMap::new());
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.github_username, "");
        assert_eq!(config.render_api_token, "");
    }

    #[test]
    fn test_legacy_prefixed_names_resolve() {
        let config = DashboardConfig::from_raw(&raw(&[
            ("VITE_GITHUB_USERNAME", "alice"),
            ("VITE_GITHUB_TOKEN", "ghp_legacy"),
            ("VITE_NPM_USERNAME", "alice-npm"),
            ("VITE_RENDER_API_TOKEN", "rnd_legacy"),
        ]));

        assert_eq!(config.github_username, "alice");
        assert_eq!(config.github_token, "ghp_legacy");
        assert_eq!(config.npm_username, "alice-npm");
        assert_eq!(config.render_api_token, "rnd_legacy");
    }

    #[test]
    fn test_plain_name_wins_over_legacy() {
        let config = DashboardConfig::from_raw(&raw(&[
            ("githubUsername", "alice"),
            ("VITE_GITHUB_USERNAME", "stale"),
        ]));

        assert_eq!(config.github_username, "alice");
    }

    #[test]
    fn test_empty_plain_name_falls_back_to_legacy() {
        let config = DashboardConfig::from_raw(&raw(&[
            ("githubUsername", ""),
            ("VITE_GITHUB_USERNAME", "alice"),
        ]));

        assert_eq!(config.github_username, "alice");
    }

    #[tokio::test]
    async fn test_replace_is_visible_to_next_latest() {
        let store = ConfigStore::load(Arc::new(MemoryStorage::new())).await;
        assert_eq!(store.latest().await, DashboardConfig::default());

        store
            .replace(raw(&[("githubUsername", "alice"), ("githubToken", "t")]))
            .await
            .unwrap();

        let config = store.latest().await;
        assert_eq!(config.github_username, "alice");
        assert_eq!(config.github_token, "t");

        // Wholesale replace, not a merge
        store.replace(raw(&[("npmUsername", "alice-npm")])).await.unwrap();
        let config = store.latest().await;
        assert_eq!(config.github_username, "");
        assert_eq!(config.npm_username, "alice-npm");
    }

    #[tokio::test]
    async fn test_reload_recovers_persisted_config() {
        let storage = Arc::new(MemoryStorage::new());

        let store = ConfigStore::load(storage.clone()).await;
        store
            .replace(raw(&[("githubUsername", "alice")]))
            .await
            .unwrap();

        let reloaded = ConfigStore::load(storage).await;
        assert_eq!(reloaded.latest().await.github_username, "alice");
    }

    #[tokio::test]
    async fn test_corrupt_blob_absorbs_to_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage
            .set(CONFIG_KEY, Bytes::from("not json"))
            .await
            .unwrap();

        let store = ConfigStore::load(storage).await;
        assert_eq!(store.latest().await, DashboardConfig::default());
    }
}
