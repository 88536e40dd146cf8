use serde::{Deserialize, Serialize};

/// A remote project record, passed through in the shape the remote API
/// returned it. No local schema is imposed beyond "an ordered list".
pub type Project = serde_json::Value;

/// A single entry produced by listing a local directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileEntry {
    /// Name of the file or folder
    pub name: String,
    /// Type of entry
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Full path: the listed directory joined with `name`
    pub path: String,
}

/// Type of directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}
