pub mod bridge;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod github;
pub mod local;
pub mod npm;
pub mod projects;
pub mod render;
pub mod storage;
pub mod types;

pub use bridge::{Envelope, HostBridge};
pub use config::{ConfigStore, DashboardConfig, CONFIG_KEY};
pub use dashboard::Dashboard;
pub use error::{DashboardError, Result};
pub use github::GithubFetcher;
pub use local::read_dir;
pub use npm::NpmFetcher;
pub use projects::{ProjectLists, ProjectStore, PROJECTS_KEY};
pub use render::RenderFetcher;
pub use storage::{DiskStorage, MemoryStorage, Storage};
pub use types::{EntryKind, FileEntry, Project};
