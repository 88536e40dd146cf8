use std::path::Path;
use std::sync::Arc;
use tracing::warn;

use crate::config::ConfigStore;
use crate::error::Result;
use crate::github::GithubFetcher;
use crate::local;
use crate::npm::NpmFetcher;
use crate::projects::ProjectStore;
use crate::render::RenderFetcher;
use crate::storage::Storage;
use crate::types::{FileEntry, Project};

/// The dashboard's aggregation core
///
/// Constructed once at startup and passed by reference to whoever needs
/// it; owns both stores and the three remote fetchers. Each refresh
/// re-reads the latest configuration, fetches once, and on success
/// replaces the matching project list. A failed fetch leaves the stored
/// list untouched, so stale data stays visible.
pub struct Dashboard {
    config: ConfigStore,
    projects: ProjectStore,
    github: GithubFetcher,
    npm: NpmFetcher,
    render: RenderFetcher,
}

impl Dashboard {
    /// Open the dashboard over durable storage with default endpoints
    pub async fn open(storage: Arc<dyn Storage>) -> Self {
        Self::new(
            ConfigStore::load(storage.clone()).await,
            ProjectStore::load(storage).await,
            GithubFetcher::new(),
            NpmFetcher::new(),
            RenderFetcher::new(),
        )
    }

    /// Assemble a dashboard from its parts (tests, endpoint overrides)
    pub fn new(
        config: ConfigStore,
        projects: ProjectStore,
        github: GithubFetcher,
        npm: NpmFetcher,
        render: RenderFetcher,
    ) -> Self {
        Self {
            config,
            projects,
            github,
            npm,
            render,
        }
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn projects(&self) -> &ProjectStore {
        &self.projects
    }

    /// The settings-save action: wholesale-replace the configuration
    pub async fn save_config(
        &self,
        raw: std::collections::HashMap<String, String>,
    ) -> Result<()> {
        self.config.replace(raw).await
    }

    /// Refresh the GitHub repository list
    pub async fn refresh_github(&self) -> Result<Vec<Project>> {
        let config = self.config.latest().await;
        let repos = match self.github.fetch_repos(&config).await {
            Ok(repos) => repos,
            Err(e) => {
                warn!("GitHub refresh failed: {}", e);
                return Err(e);
            }
        };
        self.projects.update_github_projects(repos.clone()).await?;
        Ok(repos)
    }

    /// Refresh the NPM package list
    pub async fn refresh_npm(&self) -> Result<Vec<Project>> {
        let config = self.config.latest().await;
        let packages = match self.npm.fetch_packages(&config).await {
            Ok(packages) => packages,
            Err(e) => {
                warn!("NPM refresh failed: {}", e);
                return Err(e);
            }
        };
        self.projects.update_npm_projects(packages.clone()).await?;
        Ok(packages)
    }

    /// Refresh the Render service list
    pub async fn refresh_render(&self) -> Result<Vec<Project>> {
        let config = self.config.latest().await;
        let services = match self.render.fetch_services(&config).await {
            Ok(services) => services,
            Err(e) => {
                warn!("Render refresh failed: {}", e);
                return Err(e);
            }
        };
        self.projects
            .update_rendered_projects(services.clone())
            .await?;
        Ok(services)
    }

    /// List a local directory and mirror the entries into the store
    pub async fn browse_local(&self, path: impl AsRef<Path>) -> Result<Vec<FileEntry>> {
        let entries = local::read_dir(path).await?;
        self.projects.update_local_projects(entries.clone()).await?;
        Ok(entries)
    }
}
