//! Directory listing entries.

use serde::{Deserialize, Serialize};

use super::href::Href;

/// One resource listed in a multistatus response.
///
/// Serializes with camelCase keys (`isDir`) for UI consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileEntry {
    /// Display name; never empty for entries produced by the parser.
    pub name: String,
    /// Percent-decoded href as sent by the server.
    pub path: String,
    /// Whether `path` ends with `/`.
    pub is_dir: bool,
    /// Content length in bytes, `0` when the server did not report one.
    pub size: u64,
    /// Raw `getlastmodified` value, empty when absent.
    pub modified: String,
}

impl FileEntry {
    /// Creates an entry for a decoded href. `is_dir` follows the trailing slash.
    #[must_use]
    pub fn new(name: impl Into<String>, href: Href, size: u64, modified: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: href.is_collection(),
            path: href.into(),
            size,
            modified: modified.into(),
        }
    }
}
