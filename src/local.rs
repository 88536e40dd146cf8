use std::path::Path;
use tokio::fs;

use crate::error::{DashboardError, Result};
use crate::types::{EntryKind, FileEntry};

/// List the immediate children of a local directory
///
/// A nonexistent path is a structured failure, not a panic. Entries come
/// back in directory order with no hidden-file filtering; symlinks are
/// not followed and classify as files.
pub async fn read_dir(path: impl AsRef<Path>) -> Result<Vec<FileEntry>> {
    let path = path.as_ref();

    if !fs::try_exists(path).await.unwrap_or(false) {
        return Err(DashboardError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let mut dir = fs::read_dir(path).await?;
    let mut entries = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        let kind = if entry.file_type().await?.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            kind,
            path: entry.path().to_string_lossy().into_owned(),
        });
    }

    Ok(entries)
}
