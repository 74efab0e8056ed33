//! `name=value` / `name="value"` attribute scanner
//!
//! A byte-level state machine shared by the `#EXTM3U` header and `#EXTINF`
//! lines. It never allocates: every pair is handed out as slices of the
//! scanned line together with the pair's offsets.
//!
//! Edge-case policies:
//! - `name=""` yields nothing.
//! - A bare name followed by whitespace is dropped.
//! - The byte right after `=` always opens the value, even whitespace.
//! - A pending unquoted value is flushed at end of line; an unterminated
//!   quoted value is discarded.
//! - No escapes: a `"` always closes a quoted value.

use super::lines::is_space;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    WaitName,
    NameRead,
    WaitValue,
    UnquotedRead,
    QuoteStarted,
    QuotedRead,
}

/// One completed pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a [u8],
    pub value: &'a [u8],
    /// Offsets of the whole pair within the scanned line
    pub span: Range<usize>,
}

pub struct AttributeScanner<'a> {
    line: &'a [u8],
    pos: usize,
    state: State,
    name_start: usize,
    name_len: usize,
    value_start: usize,
    stop_byte: Option<u8>,
    stopped_at: Option<usize>,
    done: bool,
}

impl<'a> AttributeScanner<'a> {
    pub fn new(line: &'a [u8]) -> Self {
        Self {
            line,
            pos: 0,
            state: State::WaitName,
            name_start: 0,
            name_len: 0,
            value_start: 0,
            stop_byte: None,
            stopped_at: None,
            done: false,
        }
    }

    /// Stop scanning at `byte` when it appears outside a quoted value
    pub fn stop_at(mut self, byte: u8) -> Self {
        self.stop_byte = Some(byte);
        self
    }

    /// Bytes following the stop byte, once scanning has stopped there
    pub fn remainder(&self) -> Option<&'a [u8]> {
        self.stopped_at.map(|at| &self.line[at + 1..])
    }

    fn pair(&self, value_end: usize, span_end: usize) -> Option<Attribute<'a>> {
        if self.name_len == 0 || value_end <= self.value_start {
            return None;
        }
        Some(Attribute {
            name: &self.line[self.name_start..self.name_start + self.name_len],
            value: &self.line[self.value_start..value_end],
            span: self.name_start..span_end,
        })
    }

    fn stop(&mut self, at: usize) {
        self.stopped_at = Some(at);
        self.done = true;
    }

    /// Feed the byte at `self.pos` (None past the end)
    fn step(&mut self, byte: Option<u8>) -> Option<Attribute<'a>> {
        let p = self.pos;
        let is_stop = byte.is_some() && byte == self.stop_byte;
        let mut emitted = None;

        match self.state {
            State::WaitName => {
                if is_stop {
                    self.stop(p);
                } else if matches!(byte, Some(b) if !is_space(b)) {
                    self.name_start = p;
                    self.state = State::NameRead;
                }
            }
            State::NameRead => match byte {
                Some(b'=') => {
                    self.name_len = p - self.name_start;
                    self.state = State::WaitValue;
                }
                Some(b) if is_space(b) => self.state = State::WaitName,
                _ if is_stop => self.stop(p),
                _ => {}
            },
            State::WaitValue => {
                if byte == Some(b'"') {
                    self.state = State::QuoteStarted;
                } else {
                    self.value_start = p;
                    self.state = State::UnquotedRead;
                }
            }
            State::UnquotedRead => {
                if byte.map_or(true, is_space) || is_stop {
                    emitted = self.pair(p, p);
                    self.name_len = 0;
                    self.state = State::WaitName;
                    if is_stop {
                        self.stop(p);
                    }
                }
            }
            State::QuoteStarted => {
                if byte == Some(b'"') {
                    self.name_len = 0;
                    self.state = State::WaitName;
                } else {
                    self.value_start = p;
                    self.state = State::QuotedRead;
                }
            }
            State::QuotedRead => {
                if byte == Some(b'"') {
                    emitted = self.pair(p, p + 1);
                    self.name_len = 0;
                    self.state = State::WaitName;
                }
            }
        }

        if byte.is_none() {
            self.done = true;
        }
        self.pos += 1;
        emitted
    }
}

impl<'a> Iterator for AttributeScanner<'a> {
    type Item = Attribute<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let byte = self.line.get(self.pos).copied();
            if let Some(attr) = self.step(byte) {
                return Some(attr);
            }
        }
        None
    }
}
