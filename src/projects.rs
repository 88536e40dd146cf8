use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::error::Result;
use crate::storage::Storage;
use crate::types::{FileEntry, Project};

/// Fixed storage key for the persisted project lists
pub const PROJECTS_KEY: &str = "grande-projects";

/// The four independent project lists shown by the dashboard
///
/// Field names match the persisted blob format. A field missing from an
/// older blob defaults to empty; there is no migration logic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectLists {
    pub github_projects: Vec<Project>,
    pub npm_projects: Vec<Project>,
    pub rendered_projects: Vec<Project>,
    pub local_projects: Vec<FileEntry>,
}

/// Persisted store of fetched project records, one list per source
///
/// Each updater replaces its list wholesale and persists the entire
/// state. Lists are never merged; a failed fetch leaves the previous
/// list untouched.
pub struct ProjectStore {
    storage: Arc<dyn Storage>,
    state: RwLock<ProjectLists>,
}

impl ProjectStore {
    /// Rehydrate the store from durable storage
    pub async fn load(storage: Arc<dyn Storage>) -> Self {
        let state = match storage.get(PROJECTS_KEY).await {
            Ok(Some(blob)) => match serde_json::from_slice(&blob) {
                Ok(lists) => lists,
                Err(e) => {
                    warn!("discarding unreadable project lists: {}", e);
                    ProjectLists::default()
                }
            },
            Ok(None) => ProjectLists::default(),
            Err(e) => {
                warn!("failed to read project lists: {}", e);
                ProjectLists::default()
            }
        };

        Self {
            storage,
            state: RwLock::new(state),
        }
    }

    pub async fn github_projects(&self) -> Vec<Project> {
        self.state.read().await.github_projects.clone()
    }

    pub async fn npm_projects(&self) -> Vec<Project> {
        self.state.read().await.npm_projects.clone()
    }

    pub async fn rendered_projects(&self) -> Vec<Project> {
        self.state.read().await.rendered_projects.clone()
    }

    pub async fn local_projects(&self) -> Vec<FileEntry> {
        self.state.read().await.local_projects.clone()
    }

    pub async fn update_github_projects(&self, projects: Vec<Project>) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write().await;
            state.github_projects = projects;
            state.clone()
        };
        self.persist(&snapshot).await
    }

    pub async fn update_npm_projects(&self, projects: Vec<Project>) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write().await;
            state.npm_projects = projects;
            state.clone()
        };
        self.persist(&snapshot).await
    }

    pub async fn update_rendered_projects(&self, projects: Vec<Project>) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write().await;
            state.rendered_projects = projects;
            state.clone()
        };
        self.persist(&snapshot).await
    }

    pub async fn update_local_projects(&self, entries: Vec<FileEntry>) -> Result<()> {
        let snapshot = {
            let mut state = self.state.write().await;
            state.local_projects = entries;
            state.clone()
        };
        self.persist(&snapshot).await
    }

    // Whole-state write; concurrent updates resolve last-writer-wins
    async fn persist(&self, snapshot: &ProjectLists) -> Result<()> {
        let blob = serde_json::to_vec(snapshot)?;
        self.storage.set(PROJECTS_KEY, Bytes::from(blob)).await
    }
}
