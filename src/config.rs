//! Scanning configuration

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Traditional per-line buffer size of playlist readers
pub const DEFAULT_MAX_LINE_LEN: usize = 4096;

/// Configuration for a scanning session
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Longest line handed to a format driver; longer lines arrive in chunks
    pub max_line_len: usize,

    /// Whether a UTF-8 byte-order mark on the first line is removed
    pub strip_bom: bool,
}

impl ScanConfig {
    /// Create a configuration with default limits
    pub fn new() -> Self {
        Self {
            max_line_len: DEFAULT_MAX_LINE_LEN,
            strip_bom: true,
        }
    }

    /// Set the maximum line length (clamped to at least 1 byte)
    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len.max(1);
        self
    }

    /// Enable or disable byte-order mark stripping
    pub fn with_strip_bom(mut self, strip_bom: bool) -> Self {
        self.strip_bom = strip_bom;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Supported playlist dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dialect {
    /// Extended M3U (`#EXTM3U` / `#EXTINF`)
    M3u,

    /// PLS (`[playlist]` / `FileN=`)
    Pls,
}

impl Dialect {
    /// Canonical lowercase format name
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::M3u => "m3u",
            Dialect::Pls => "pls",
        }
    }

    /// Guess the dialect from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("m3u8") {
            return Some(Dialect::M3u);
        }
        ext.parse().ok()
    }
}

impl FromStr for Dialect {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("m3u") {
            Ok(Dialect::M3u)
        } else if s.eq_ignore_ascii_case("pls") {
            Ok(Dialect::Pls)
        } else {
            Err(ParseError::UnsupportedFormat(s.to_string()))
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_dialect_case_insensitive() {
        assert_eq!("M3U".parse::<Dialect>().unwrap(), Dialect::M3u);
        assert_eq!("Pls".parse::<Dialect>().unwrap(), Dialect::Pls);
    }

    #[test]
    fn test_unknown_dialect() {
        let err = "xspf".parse::<Dialect>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_dialect_from_path() {
        assert_eq!(Dialect::from_path(Path::new("/a/b.M3U8")), Some(Dialect::M3u));
        assert_eq!(Dialect::from_path(Path::new("radio.pls")), Some(Dialect::Pls));
        assert_eq!(Dialect::from_path(Path::new("notes.txt")), None);
        assert_eq!(Dialect::from_path(Path::new("noext")), None);
    }

    #[test]
    fn test_config_builder() {
        let config = ScanConfig::new().with_max_line_len(0).with_strip_bom(false);
        assert_eq!(config.max_line_len, 1);
        assert!(!config.strip_bom);
        assert_eq!(ScanConfig::default().max_line_len, DEFAULT_MAX_LINE_LEN);
    }
}
