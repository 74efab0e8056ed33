use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One entry read from a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    /// Item reference exactly as written (trailing CR/LF removed, never empty)
    pub path: String,

    /// Title from `#EXTINF`, if any
    pub title: Option<String>,

    /// M3U: running ordinal starting at 1. PLS: the declared `FileN` index
    pub track_number: u32,

    /// MIME type resolved from the `type` tag
    pub mime: Option<String>,

    /// DLNA profile resolved from the `dlna_extras` tag
    pub dlna_profile: Option<String>,
}

impl TrackRecord {
    /// Create a record with only a path and ordinal
    pub fn new(path: impl Into<String>, track_number: u32) -> Self {
        Self {
            path: path.into(),
            title: None,
            track_number,
            mime: None,
            dlna_profile: None,
        }
    }

    /// Title, or the path's last component without its extension
    pub fn display_title(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        let name = self
            .path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.path);
        match name.rfind('.') {
            Some(dot) if dot > 0 => name[..dot].to_string(),
            _ => name.to_string(),
        }
    }

    /// Filesystem path for local entries
    ///
    /// `file://` URIs are percent-decoded; other URL schemes return None.
    pub fn local_path(&self) -> Option<PathBuf> {
        if let Some(rest) = self.path.strip_prefix("file://") {
            return urlencoding::decode(rest)
                .ok()
                .map(|decoded| PathBuf::from(decoded.into_owned()));
        }
        if self.path.contains("://") {
            return None;
        }
        Some(PathBuf::from(&self.path))
    }

    /// Local path, with relative entries joined onto the playlist directory
    pub fn resolve_against(&self, playlist_dir: &Path) -> Option<PathBuf> {
        let path = self.local_path()?;
        if path.is_absolute() {
            Some(path)
        } else {
            Some(playlist_dir.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_title_prefers_title() {
        let mut track = TrackRecord::new("/music/a.mp3", 1);
        track.title = Some("My Title".to_string());
        assert_eq!(track.display_title(), "My Title");
    }

    #[test]
    fn test_display_title_derived() {
        assert_eq!(TrackRecord::new("/music/Song.Name.flac", 1).display_title(), "Song.Name");
        assert_eq!(TrackRecord::new("C:\\music\\b.mp3", 1).display_title(), "b");
        assert_eq!(TrackRecord::new(".hidden", 1).display_title(), ".hidden");
        assert_eq!(TrackRecord::new("noext", 1).display_title(), "noext");
    }

    #[test]
    fn test_local_path() {
        let track = TrackRecord::new("file:///music/My%20Song.mp3", 1);
        assert_eq!(track.local_path(), Some(PathBuf::from("/music/My Song.mp3")));

        let stream = TrackRecord::new("http://radio.example/stream", 1);
        assert_eq!(stream.local_path(), None);

        let plain = TrackRecord::new("sub/c.ogg", 1);
        assert_eq!(
            plain.resolve_against(Path::new("/lists")),
            Some(PathBuf::from("/lists/sub/c.ogg"))
        );
    }
}
