//! PLS driver

use super::lines::{is_printable, strip_line_ending, trim_leading, LineReader};
use crate::error::{ParseError, Result};
use crate::model::TrackRecord;
use std::io::BufRead;

const PLAYLIST_SECTION: &[u8] = b"[playlist]";
const FILE_KEY: &[u8] = b"File";

/// PLS track extraction state
#[derive(Debug, Default)]
pub struct PlsDriver {
    validated: bool,
    last_index: u32,
}

impl PlsDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the last `FileN` entry yielded
    pub fn last_index(&self) -> u32 {
        self.last_index
    }

    pub fn next_track<R: BufRead>(&mut self, lines: &mut LineReader<R>) -> Result<Option<TrackRecord>> {
        while let Some(raw) = lines.next_line()? {
            let line = strip_line_ending(trim_leading(raw));
            if line.is_empty() || line[0] == b'#' {
                continue;
            }

            if !is_printable(line) {
                let line_no = lines.line_number();
                log::error!("Playlist looks bad (unprintable characters) at line {}", line_no);
                return Err(ParseError::MalformedContent { line: line_no });
            }

            if !self.validated {
                if !line.starts_with(PLAYLIST_SECTION) {
                    log::warn!("Not a PLS playlist: first entry is not [playlist]");
                    return Ok(None);
                }
                self.validated = true;
                continue;
            }

            let Some((index, path)) = parse_file_entry(line) else {
                continue;
            };

            self.last_index = index;
            let track = TrackRecord::new(String::from_utf8_lossy(path).into_owned(), index);
            log::debug!("Track {}: {}", track.track_number, track.path);
            return Ok(Some(track));
        }

        Ok(None)
    }
}

/// Split `FileN=path` into a non-zero index and a non-empty path
fn parse_file_entry(line: &[u8]) -> Option<(u32, &[u8])> {
    let rest = line.strip_prefix(FILE_KEY)?;
    let digits = rest.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }

    let index: u32 = std::str::from_utf8(&rest[..digits]).ok()?.parse().ok()?;
    if index == 0 {
        return None;
    }

    let path = rest[digits..].strip_prefix(b"=")?;
    if path.is_empty() {
        log::warn!("Skipping File{} entry with an empty path", index);
        return None;
    }

    Some((index, path))
}
