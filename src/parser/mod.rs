//! Playlist text parsing
//!
//! A bounded line reader feeds one of two format drivers. Both share the
//! attribute scanner used for `#EXTM3U` and `#EXTINF` lines.

pub mod attributes;
mod header;
pub mod lines;
mod m3u;
mod pls;

pub use attributes::{Attribute, AttributeScanner};
pub use header::{parse_header, HeaderAttributes};
pub use lines::LineReader;
pub use m3u::M3uDriver;
pub use pls::PlsDriver;

use crate::config::Dialect;
use crate::error::Result;
use crate::model::TrackRecord;
use std::io::BufRead;

/// The active format driver of a session
#[derive(Debug)]
pub enum Driver {
    M3u(M3uDriver),
    Pls(PlsDriver),
}

impl Driver {
    /// Prepare a driver, reading the header where the dialect has one
    pub fn open<R: BufRead>(dialect: Dialect, lines: &mut LineReader<R>) -> Result<Self> {
        match dialect {
            Dialect::M3u => Ok(Driver::M3u(M3uDriver::open(lines)?)),
            Dialect::Pls => Ok(Driver::Pls(PlsDriver::new())),
        }
    }

    pub fn dialect(&self) -> Dialect {
        match self {
            Driver::M3u(_) => Dialect::M3u,
            Driver::Pls(_) => Dialect::Pls,
        }
    }

    /// Header attributes, for dialects that have a header
    pub fn header(&self) -> Option<&HeaderAttributes> {
        match self {
            Driver::M3u(driver) => Some(driver.header()),
            Driver::Pls(_) => None,
        }
    }

    pub fn next_track<R: BufRead>(&mut self, lines: &mut LineReader<R>) -> Result<Option<TrackRecord>> {
        match self {
            Driver::M3u(driver) => driver.next_track(lines),
            Driver::Pls(driver) => driver.next_track(lines),
        }
    }
}
