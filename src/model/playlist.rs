use crate::config::Dialect;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::Metadata;
use std::path::{Path, PathBuf};

/// File metadata supplied by whoever opened the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileStat {
    pub modified: Option<DateTime<Utc>>,
    pub size: u64,
}

impl From<&Metadata> for FileStat {
    fn from(metadata: &Metadata) -> Self {
        Self {
            modified: metadata.modified().ok().map(DateTime::<Utc>::from),
            size: metadata.len(),
        }
    }
}

/// Describes the playlist file itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistInfo {
    /// Path the playlist was opened from
    pub path: PathBuf,

    /// Final path component
    pub basename: String,

    /// Dialect the session was opened with
    pub dialect: Dialect,

    /// Header `name`, or the base name without extension
    pub title: String,

    /// Header `type` applied to tracks that carry none
    pub default_type: Option<String>,

    /// Header `dlna_extras` applied to tracks that carry none
    pub default_dlna_extras: Option<String>,

    /// Modification time from the supplied file metadata
    pub modified: Option<DateTime<Utc>>,

    /// Size in bytes from the supplied file metadata
    pub file_size: Option<u64>,
}

impl PlaylistInfo {
    /// Create the record for a freshly opened playlist
    pub fn new(path: &Path, dialect: Dialect) -> Self {
        let basename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Self {
            path: path.to_path_buf(),
            title: basename_title(&basename),
            basename,
            dialect,
            default_type: None,
            default_dlna_extras: None,
            modified: None,
            file_size: None,
        }
    }

    /// Merge file metadata, keeping a modification time already present
    pub fn apply_stat(&mut self, stat: &FileStat) {
        if self.modified.is_none() {
            self.modified = stat.modified;
        }
        self.file_size = Some(stat.size);
    }
}

/// Base name with the last extension removed
fn basename_title(basename: &str) -> String {
    match basename.rfind('.') {
        Some(dot) => basename[..dot].to_string(),
        None => basename.to_string(),
    }
}
