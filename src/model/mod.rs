//! Plain data types produced by a scanning session
//!
//! Tracks and playlist descriptions carry no reference back to the
//! session that produced them.

mod playlist;
mod track;

pub use playlist::{FileStat, PlaylistInfo};
pub use track::TrackRecord;
