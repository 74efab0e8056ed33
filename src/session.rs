//! Playlist scanning session
//!
//! A `Session` owns at most one open playlist stream at a time. It selects
//! the format driver at open time and hands out one `TrackRecord` per
//! `next_track()` call until the playlist ends or a fatal error occurs.
//! Every terminal outcome releases the stream; the session can then be
//! reopened on another file without carrying state over.

use crate::config::{Dialect, ScanConfig};
use crate::error::{ParseError, Result};
use crate::model::{FileStat, PlaylistInfo, TrackRecord};
use crate::parser::{Driver, LineReader};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

type Stream = Box<dyn BufRead + Send>;

struct OpenPlaylist {
    lines: LineReader<Stream>,
    driver: Driver,
    info: PlaylistInfo,
}

/// Format-agnostic open/next/close over one playlist at a time
pub struct Session {
    config: ScanConfig,
    open: Option<OpenPlaylist>,
}

impl Session {
    /// Create a session with default configuration
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    pub fn with_config(config: ScanConfig) -> Self {
        Self { config, open: None }
    }

    /// Open a playlist file
    ///
    /// `format` is `m3u` or `pls` (case-insensitive) and is checked before
    /// the file is touched. Any playlist still open is closed first.
    pub fn open(
        &mut self,
        path: impl AsRef<Path>,
        format: &str,
        stat: Option<&FileStat>,
    ) -> Result<PlaylistInfo> {
        self.close();
        let path = path.as_ref();
        let dialect: Dialect = format.parse().map_err(|e| {
            log::error!("Unsupported playlist type <{}> ({:?})", format, path);
            e
        })?;

        let file = File::open(path).map_err(|source| {
            log::error!("Cannot open {:?}: {}", path, source);
            ParseError::OpenFailed {
                path: path.to_path_buf(),
                source,
            }
        })?;

        self.open_reader(BufReader::new(file), path, dialect, stat)
    }

    /// Open a stream that a collaborator already opened
    ///
    /// `path` only names the playlist (title, base name); it is not read.
    pub fn open_reader<R: BufRead + Send + 'static>(
        &mut self,
        reader: R,
        path: impl AsRef<Path>,
        dialect: Dialect,
        stat: Option<&FileStat>,
    ) -> Result<PlaylistInfo> {
        self.close();
        let path = path.as_ref();

        let stream: Stream = Box::new(reader);
        let mut lines = LineReader::new(stream, self.config.max_line_len, self.config.strip_bom);
        let driver = Driver::open(dialect, &mut lines)?;

        let mut info = PlaylistInfo::new(path, dialect);
        if let Some(header) = driver.header() {
            if let Some(title) = &header.title {
                info.title = title.clone();
            }
            info.default_type = header.default_type.clone();
            info.default_dlna_extras = header.default_dlna_extras.clone();
        }
        if let Some(stat) = stat {
            info.apply_stat(stat);
        }

        log::info!("Opened {} playlist {:?} ({})", dialect, path, info.title);
        self.open = Some(OpenPlaylist {
            lines,
            driver,
            info: info.clone(),
        });
        Ok(info)
    }

    /// Read the next track
    ///
    /// `Ok(None)` marks the end of the playlist. End of playlist and errors
    /// both close the stream; later calls return `InvalidState`.
    pub fn next_track(&mut self) -> Result<Option<TrackRecord>> {
        let OpenPlaylist { lines, driver, .. } =
            self.open.as_mut().ok_or(ParseError::InvalidState)?;

        match driver.next_track(lines) {
            Ok(Some(track)) => Ok(Some(track)),
            Ok(None) => {
                self.close();
                Ok(None)
            }
            Err(e) => {
                self.close();
                Err(e)
            }
        }
    }

    /// Release the stream; does nothing if no playlist is open
    pub fn close(&mut self) {
        if let Some(open) = self.open.take() {
            log::debug!("Closed playlist {:?}", open.info.path);
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Description of the open playlist
    pub fn info(&self) -> Option<&PlaylistInfo> {
        self.open.as_ref().map(|open| &open.info)
    }

    /// Whether the open stream started with a UTF-8 byte-order mark
    pub fn bom_seen(&self) -> bool {
        self.open.as_ref().is_some_and(|open| open.lines.bom_seen())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Yields tracks until the playlist ends or fails, then stops for good
impl Iterator for Session {
    type Item = Result<TrackRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.is_open() {
            return None;
        }
        self.next_track().transpose()
    }
}

/// Everything read from one playlist file
///
/// Tracks read before a fatal error stay valid; the error is kept alongside.
#[derive(Debug)]
pub struct PlaylistScan {
    pub info: PlaylistInfo,
    pub tracks: Vec<TrackRecord>,
    pub error: Option<ParseError>,
}

/// Read a whole playlist file with default configuration
pub fn read_playlist(path: impl AsRef<Path>, format: &str) -> Result<PlaylistScan> {
    read_playlist_with(path, format, ScanConfig::default())
}

/// Read a whole playlist file
///
/// Only open failures are returned as `Err`. A fatal error while reading
/// ends the scan and is reported in `PlaylistScan::error`.
pub fn read_playlist_with(
    path: impl AsRef<Path>,
    format: &str,
    config: ScanConfig,
) -> Result<PlaylistScan> {
    let path = path.as_ref();
    let stat = std::fs::metadata(path).ok().map(|m| FileStat::from(&m));

    let mut session = Session::with_config(config);
    let info = session.open(path, format, stat.as_ref())?;

    let mut tracks = Vec::new();
    let mut error = None;
    for track in session.by_ref() {
        match track {
            Ok(track) => tracks.push(track),
            Err(e) => {
                log::warn!("{:?}: stopped after {} tracks: {}", path, tracks.len(), e);
                error = Some(e);
            }
        }
    }

    log::info!("Parsed {} tracks from {:?}", tracks.len(), path);
    Ok(PlaylistScan { info, tracks, error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Cursor;

    fn open_str(session: &mut Session, data: &str, name: &str, dialect: Dialect) -> PlaylistInfo {
        session
            .open_reader(Cursor::new(data.as_bytes().to_vec()), name, dialect, None)
            .unwrap()
    }

    #[test]
    fn test_next_without_open() {
        let mut session = Session::new();
        let err = session.next_track().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(session.next().is_none());
    }

    #[test]
    fn test_unsupported_format_before_open() {
        let mut session = Session::new();
        let err = session
            .open("/definitely/not/here.xspf", "xspf", None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_open_failed() {
        let mut session = Session::new();
        let err = session
            .open("/definitely/not/here.m3u", "M3U", None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OpenFailed);
        assert!(!session.is_open());
    }

    #[test]
    fn test_end_closes_stream() {
        let mut session = Session::new();
        open_str(&mut session, "a.mp3\n", "list.m3u", Dialect::M3u);
        assert!(session.next_track().unwrap().is_some());
        assert!(session.is_open());
        assert!(session.next_track().unwrap().is_none());
        assert!(!session.is_open());
        assert_eq!(session.next_track().unwrap_err().kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_error_closes_stream() {
        let mut session = Session::new();
        open_str(&mut session, "a.mp3\nb\u{1}\nc.mp3\n", "bad.m3u", Dialect::M3u);
        let results: Vec<_> = session.by_ref().collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(
            results[1].as_ref().unwrap_err().kind(),
            ErrorKind::MalformedContent
        );
        assert!(!session.is_open());
    }

    #[test]
    fn test_reopen_resets_state() {
        let mut session = Session::new();
        let info = open_str(
            &mut session,
            "#EXTM3U name=\"One\" type=mp3\na.mp3\nb.mp3\n",
            "one.m3u",
            Dialect::M3u,
        );
        assert_eq!(info.title, "One");
        assert_eq!(session.next_track().unwrap().unwrap().track_number, 1);

        let info = open_str(&mut session, "c.avi\n", "two.m3u", Dialect::M3u);
        assert_eq!(info.title, "two");
        assert_eq!(info.default_type, None);

        let track = session.next_track().unwrap().unwrap();
        assert_eq!(track.track_number, 1);
        assert_eq!(track.mime, None);
    }

    #[test]
    fn test_info_and_stat() {
        let mut session = Session::new();
        let stat = FileStat {
            modified: None,
            size: 17,
        };
        let info = session
            .open_reader(Cursor::new(b"[playlist]\n".to_vec()), "/x/radio.pls", Dialect::Pls, Some(&stat))
            .unwrap();
        assert_eq!(info.title, "radio");
        assert_eq!(info.file_size, Some(17));
        assert_eq!(session.info().map(|i| i.dialect), Some(Dialect::Pls));
    }

    #[test]
    fn test_small_line_limit() {
        let mut session = Session::with_config(ScanConfig::new().with_max_line_len(8));
        open_str(&mut session, "abcdefghij\n", "long.m3u", Dialect::M3u);
        let paths: Vec<String> = session.map(|t| t.unwrap().path).collect();
        assert_eq!(paths, vec!["abcdefgh".to_string(), "ij".to_string()]);
    }
}
