use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::types::Project;

/// Production GitHub API endpoint
pub const GITHUB_API_BASE: &str = "https://api.github.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches the user's repository list from the GitHub REST API
///
/// One GET per call, no retry, no pagination. The request carries a
/// fixed 10-second timeout so a stalled connection cannot hang the
/// dashboard refresh.
#[derive(Clone)]
pub struct GithubFetcher {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl GithubFetcher {
    pub fn new() -> Self {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Create a fetcher against a non-default endpoint (tests, proxies)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch the repository list for the configured user
    ///
    /// Requires both the username and the token; an incomplete
    /// configuration is rejected before any network I/O.
    pub async fn fetch_repos(&self, config: &DashboardConfig) -> Result<Vec<Project>> {
        if config.github_username.is_empty() || config.github_token.is_empty() {
            return Err(DashboardError::MissingConfig {
                message: "set the GitHub username and token in settings".to_string(),
            });
        }

        let url = format!("{}/users/{}/repos", self.base_url, config.github_username);
        debug!("fetching GitHub repos from {}", url);

        let response = self
            .client
            .get(&url)
            .header(AUTHORIZATION, format!("token {}", config.github_token))
            .header(USER_AGENT, &config.github_username)
            .header(ACCEPT, "application/vnd.github.v3+json")
            .timeout(self.timeout)
            .send()
            .await
            .map_err(DashboardError::from_transport)?;

        match response.status() {
            StatusCode::OK => {
                let repos = response
                    .json()
                    .await
                    .map_err(DashboardError::from_transport)?;
                Ok(repos)
            }
            StatusCode::FORBIDDEN => {
                let message = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "GitHub API rate limit exceeded".to_string());
                Err(DashboardError::RateLimited { message })
            }
            StatusCode::NOT_FOUND => Err(DashboardError::UserNotFound {
                username: config.github_username.clone(),
            }),
            status => {
                let message = format!(
                    "unexpected status {}: {}",
                    status,
                    response.text().await.unwrap_or_default()
                );
                Err(DashboardError::UnexpectedResponse { message })
            }
        }
    }
}

impl Default for GithubFetcher {
    fn default() -> Self {
        Self::new()
    }
}
