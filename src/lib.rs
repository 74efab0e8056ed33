//! Playlist Scanner - streaming reader for extended M3U and PLS playlists
//!
//! Extracts one track entry at a time (path, title, MIME type, DLNA profile)
//! from playlist files of uneven quality, for media indexing.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
pub mod tables;

pub use config::{Dialect, ScanConfig};
pub use error::{ErrorKind, ParseError, Result};
pub use model::{FileStat, PlaylistInfo, TrackRecord};
pub use session::{read_playlist, read_playlist_with, PlaylistScan, Session};
