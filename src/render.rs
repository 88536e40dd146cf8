use reqwest::header::AUTHORIZATION;
use reqwest::Client;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::types::Project;

/// Production Render API endpoint
pub const RENDER_API_BASE: &str = "https://api.render.com";

/// Fetches the user's deployed services from the Render API
///
/// The token is drawn from the shared configuration like the other
/// fetchers; the response body passes through unshaped.
#[derive(Clone)]
pub struct RenderFetcher {
    client: Client,
    base_url: String,
}

impl RenderFetcher {
    pub fn new() -> Self {
        Self::with_base_url(RENDER_API_BASE)
    }

    /// Create a fetcher against a non-default endpoint (tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the service list for the configured account
    pub async fn fetch_services(&self, config: &DashboardConfig) -> Result<Vec<Project>> {
        let url = format!("{}/v1/services", self.base_url);
        debug!("fetching Render services from {}", url);

        let response = self
            .client
            .get(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", config.render_api_token),
            )
            .send()
            .await
            .map_err(DashboardError::from_transport)?
            .error_for_status()?;

        let services = response
            .json()
            .await
            .map_err(DashboardError::from_transport)?;
        Ok(services)
    }
}

impl Default for RenderFetcher {
    fn default() -> Self {
        Self::new()
    }
}
