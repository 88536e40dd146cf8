use thiserror::Error;

/// Errors that can occur while refreshing dashboard data
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("configuration incomplete: {message}")]
    MissingConfig { message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("rate limit exceeded or token invalid: {message}")]
    RateLimited { message: String },

    #[error("user not found: {username}")]
    UserNotFound { username: String },

    #[error("directory does not exist: {path}")]
    DirectoryNotFound { path: String },

    #[error("unexpected response: {message}")]
    UnexpectedResponse { message: String },

    #[error("storage error: {message}")]
    Storage { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DashboardError {
    /// Classify a transport-level failure from the HTTP client
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DashboardError::Timeout
        } else {
            DashboardError::Network(e)
        }
    }
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
