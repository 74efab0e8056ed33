//! Bounded line reader over a byte stream
//!
//! Content is treated as opaque bytes. A physical line longer than the
//! configured limit is delivered as several consecutive chunks, each of
//! which the drivers see as a line of its own.

use std::io::{self, BufRead, Read};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

pub struct LineReader<R> {
    reader: R,
    buf: Vec<u8>,
    start: usize,
    max_line_len: usize,
    strip_bom: bool,
    /// Sticky: set once the first line has been read
    bom_checked: bool,
    bom_seen: bool,
    replay: bool,
    line_no: usize,
    at_line_start: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, max_line_len: usize, strip_bom: bool) -> Self {
        Self {
            reader,
            buf: Vec::with_capacity(max_line_len.min(8192)),
            start: 0,
            max_line_len: max_line_len.max(1),
            strip_bom,
            bom_checked: false,
            bom_seen: false,
            replay: false,
            line_no: 0,
            at_line_start: true,
        }
    }

    /// Next line including its terminator, or None at end of stream
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        if self.replay {
            self.replay = false;
            return Ok(Some(&self.buf[self.start..]));
        }

        self.buf.clear();
        self.start = 0;
        let limit = self.max_line_len as u64;
        let read = (&mut self.reader).take(limit).read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            return Ok(None);
        }

        if self.at_line_start {
            self.line_no += 1;
        }
        self.at_line_start = self.buf.last() == Some(&b'\n');

        if !self.bom_checked {
            self.bom_checked = true;
            if self.strip_bom && self.buf.starts_with(UTF8_BOM) {
                self.bom_seen = true;
                self.start = UTF8_BOM.len();
            }
        }

        Ok(Some(&self.buf[self.start..]))
    }

    /// Hand the last line out again on the next call
    pub fn replay_last(&mut self) {
        if self.line_no > 0 {
            self.replay = true;
        }
    }

    /// 1-based physical line number of the last line read
    pub fn line_number(&self) -> usize {
        self.line_no
    }

    pub fn bom_seen(&self) -> bool {
        self.bom_seen
    }
}

/// `isspace` in the C locale
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

pub fn trim_leading(line: &[u8]) -> &[u8] {
    let skip = line.iter().take_while(|&&b| is_space(b)).count();
    &line[skip..]
}

/// Remove trailing CR and LF bytes only
pub fn strip_line_ending(mut line: &[u8]) -> &[u8] {
    while let [rest @ .., b'\r' | b'\n'] = line {
        line = rest;
    }
    line
}

/// Control bytes other than tab make a content line unprintable.
/// Bytes above 0x7f belong to whatever encoding the file uses and pass.
pub fn is_printable(line: &[u8]) -> bool {
    line.iter().all(|&b| b == b'\t' || (b >= 0x20 && b != 0x7f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(reader: &mut LineReader<Cursor<Vec<u8>>>) -> Vec<Vec<u8>> {
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            lines.push(line.to_vec());
        }
        lines
    }

    #[test]
    fn test_mixed_line_endings() {
        let data = b"a\r\nb\nc".to_vec();
        let mut reader = LineReader::new(Cursor::new(data), 4096, true);
        let lines = collect(&mut reader);
        assert_eq!(lines, vec![b"a\r\n".to_vec(), b"b\n".to_vec(), b"c".to_vec()]);
        assert_eq!(reader.line_number(), 3);
    }

    #[test]
    fn test_bom_stripped_once() {
        let data = b"\xef\xbb\xbfone\n\xef\xbb\xbftwo\n".to_vec();
        let mut reader = LineReader::new(Cursor::new(data), 4096, true);
        let lines = collect(&mut reader);
        assert_eq!(lines[0], b"one\n");
        assert_eq!(lines[1], b"\xef\xbb\xbftwo\n");
        assert!(reader.bom_seen());
    }

    #[test]
    fn test_bom_kept_when_disabled() {
        let data = b"\xef\xbb\xbfone\n".to_vec();
        let mut reader = LineReader::new(Cursor::new(data), 4096, false);
        assert_eq!(collect(&mut reader)[0], b"\xef\xbb\xbfone\n");
        assert!(!reader.bom_seen());
    }

    #[test]
    fn test_long_lines_are_chunked() {
        let data = b"abcdefgh\nij\n".to_vec();
        let mut reader = LineReader::new(Cursor::new(data), 4, true);
        let lines = collect(&mut reader);
        assert_eq!(
            lines,
            vec![b"abcd".to_vec(), b"efgh".to_vec(), b"\n".to_vec(), b"ij\n".to_vec()]
        );
        // chunks of one physical line share its number
        assert_eq!(reader.line_number(), 2);
    }

    #[test]
    fn test_replay_last() {
        let data = b"first\nsecond\n".to_vec();
        let mut reader = LineReader::new(Cursor::new(data), 4096, true);
        reader.replay_last();
        assert_eq!(reader.next_line().unwrap(), Some(&b"first\n"[..]));
        reader.replay_last();
        assert_eq!(reader.next_line().unwrap(), Some(&b"first\n"[..]));
        assert_eq!(reader.next_line().unwrap(), Some(&b"second\n"[..]));
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_helpers() {
        assert_eq!(trim_leading(b" \t\x0bpath"), b"path");
        assert_eq!(strip_line_ending(b"path \r\n\r"), b"path ");
        assert!(is_printable(b"caf\xc3\xa9\tx"));
        assert!(!is_printable(b"a\x01b"));
        assert!(!is_printable(b"a\x7f"));
    }
}
