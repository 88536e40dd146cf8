use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::types::{FileEntry, Project};

/// The uniform result envelope crossing the host-launcher boundary
///
/// Serializes to `{"success":true,"data":...}` or
/// `{"success":false,"message":"..."}`. Expected failures always cross
/// this boundary as an envelope, never as a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T> From<Result<T>> for Envelope<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => Envelope::ok(data),
            Err(e) => Envelope::err(e.to_string()),
        }
    }
}

/// The launcher-facing API surface
///
/// Wraps a [`Dashboard`] and converts every outcome into an envelope for
/// the host shim to serialize.
pub struct HostBridge {
    dashboard: Arc<Dashboard>,
}

impl HostBridge {
    pub fn new(dashboard: Arc<Dashboard>) -> Self {
        Self { dashboard }
    }

    pub async fn get_github_repos(&self) -> Envelope<Vec<Project>> {
        self.dashboard.refresh_github().await.into()
    }

    pub async fn get_npm_packages(&self) -> Envelope<Vec<Project>> {
        self.dashboard.refresh_npm().await.into()
    }

    pub async fn get_render_projects(&self) -> Envelope<Vec<Project>> {
        self.dashboard.refresh_render().await.into()
    }

    pub async fn read_dir(&self, path: &str) -> Envelope<Vec<FileEntry>> {
        self.dashboard.browse_local(path).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let envelope = Envelope::ok(vec![json!({"name": "devboard"})]);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({"success": true, "data": [{"name": "devboard"}]})
        );
    }

    #[test]
    fn test_failure_envelope_shape() {
        let envelope: Envelope<Vec<Project>> = Envelope::err("directory does not exist: /x");
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            json!({"success": false, "message": "directory does not exist: /x"})
        );
    }
}
