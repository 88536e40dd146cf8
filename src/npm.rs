use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::types::Project;

/// Production NPM registry endpoint
pub const NPM_REGISTRY_BASE: &str = "https://registry.npmjs.org";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    objects: Vec<Project>,
}

/// Fetches the user's published packages from the NPM registry search API
#[derive(Clone)]
pub struct NpmFetcher {
    client: Client,
    base_url: String,
}

impl NpmFetcher {
    pub fn new() -> Self {
        Self::with_base_url(NPM_REGISTRY_BASE)
    }

    /// Create a fetcher against a non-default endpoint (tests, mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search the registry for packages authored by the configured user
    ///
    /// An empty username is not rejected here: the registry accepts an
    /// empty author query and simply returns no matches.
    pub async fn fetch_packages(&self, config: &DashboardConfig) -> Result<Vec<Project>> {
        let url = format!("{}/-/v1/search", self.base_url);
        debug!("searching NPM registry for author:{}", config.npm_username);

        let response = self
            .client
            .get(&url)
            .query(&[("text", format!("author:{}", config.npm_username))])
            .send()
            .await
            .map_err(DashboardError::from_transport)?
            .error_for_status()?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(DashboardError::from_transport)?;
        Ok(body.objects)
    }
}

impl Default for NpmFetcher {
    fn default() -> Self {
        Self::new()
    }
}
