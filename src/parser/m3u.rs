//! Extended M3U driver

use super::attributes::AttributeScanner;
use super::header::{parse_header, HeaderAttributes};
use super::lines::{is_printable, is_space, strip_line_ending, trim_leading, LineReader};
use crate::error::{ParseError, Result};
use crate::model::TrackRecord;
use crate::tables::{DLNA_PROFILES, MIME_TYPES};
use std::io::BufRead;

const EXTINF: &[u8] = b"#EXTINF:";

/// Per-track values collected from `#EXTINF` lines
#[derive(Debug, Default, PartialEq, Eq)]
struct ExtInf {
    title: Option<String>,
    track_type: Option<Vec<u8>>,
    dlna_extras: Option<Vec<u8>>,
}

impl ExtInf {
    /// Fold one `#EXTINF:` line (marker removed) into the pending values
    fn absorb(&mut self, rest: &[u8]) {
        let attrs_start = duration_end(rest);
        let mut scanner = AttributeScanner::new(&rest[attrs_start..]).stop_at(b',');

        for attr in scanner.by_ref() {
            match attr.name {
                b"type" => self.track_type = Some(attr.value.to_vec()),
                b"dlna_extras" => self.dlna_extras = Some(attr.value.to_vec()),
                _ => {}
            }
        }

        if let Some(title) = scanner.remainder() {
            let skip = title.iter().take_while(|&&b| b == b' ').count();
            if skip < title.len() {
                self.title = Some(String::from_utf8_lossy(&title[skip..]).into_owned());
            }
        }
    }
}

/// End of the duration field: the first whitespace or the first comma.
/// A comma is kept inside the duration (`6,5 type=mp3`) only when digits up
/// to a whitespace follow it and an attribute comes next.
fn duration_end(rest: &[u8]) -> usize {
    for (i, &b) in rest.iter().enumerate() {
        if is_space(b) {
            return i;
        }
        if b == b',' && !is_decimal_comma(&rest[i + 1..]) {
            return i;
        }
    }
    rest.len()
}

fn is_decimal_comma(after: &[u8]) -> bool {
    let digits = after.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 || !after.get(digits).copied().is_some_and(is_space) {
        return false;
    }
    let attrs = &after[digits..];
    match attrs.iter().position(|&b| b == b'=' || b == b',') {
        Some(at) => attrs[at] == b'=',
        None => false,
    }
}

/// Extended M3U track extraction state
#[derive(Debug, Default)]
pub struct M3uDriver {
    trackno: u32,
    header: HeaderAttributes,
}

impl M3uDriver {
    /// Read the first line and parse it if it is an `#EXTM3U` header.
    /// The line stays queued, so it is seen again as a directive.
    pub fn open<R: BufRead>(lines: &mut LineReader<R>) -> Result<Self> {
        let mut driver = Self::default();

        if let Some(first) = lines.next_line()? {
            if let Some(header) = parse_header(strip_line_ending(first)) {
                log::debug!("Found #EXTM3U header: {:?}", header);
                driver.header = header;
            }
            lines.replay_last();
        }

        Ok(driver)
    }

    pub fn header(&self) -> &HeaderAttributes {
        &self.header
    }

    pub fn next_track<R: BufRead>(&mut self, lines: &mut LineReader<R>) -> Result<Option<TrackRecord>> {
        let mut pending = ExtInf::default();

        while let Some(raw) = lines.next_line()? {
            let line = strip_line_ending(trim_leading(raw));
            if line.is_empty() {
                continue;
            }

            if line[0] == b'#' {
                if let Some(rest) = line.strip_prefix(EXTINF) {
                    pending.absorb(rest);
                } else {
                    log::trace!("Skipping directive: {}", String::from_utf8_lossy(line));
                }
                continue;
            }

            if !is_printable(line) {
                let line_no = lines.line_number();
                log::error!("Playlist looks bad (unprintable characters) at line {}", line_no);
                return Err(ParseError::MalformedContent { line: line_no });
            }

            self.trackno += 1;
            let track = TrackRecord {
                path: String::from_utf8_lossy(line).into_owned(),
                title: pending.title.take(),
                track_number: self.trackno,
                mime: self.resolve_mime(pending.track_type.as_deref()),
                dlna_profile: self.resolve_dlna(pending.dlna_extras.as_deref()),
            };
            log::debug!("Track {}: {}", track.track_number, track.path);
            return Ok(Some(track));
        }

        Ok(None)
    }

    fn resolve_mime(&self, track_type: Option<&[u8]>) -> Option<String> {
        let tag = track_type.or(self.header.default_type.as_deref().map(str::as_bytes))?;
        MIME_TYPES.lookup(tag).map(str::to_string)
    }

    fn resolve_dlna(&self, dlna_extras: Option<&[u8]>) -> Option<String> {
        let tag = dlna_extras.or(self.header.default_dlna_extras.as_deref().map(str::as_bytes))?;
        DLNA_PROFILES.lookup(tag).map(str::to_string)
    }
}
