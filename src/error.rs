//! Error types for playlist scanning

use std::io;
use std::path::PathBuf;

/// Terminal outcomes of a scanning session other than a normal end of playlist
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Cannot open playlist {path:?}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Unsupported playlist type <{0}>")]
    UnsupportedFormat(String),

    #[error("Playlist looks bad (unprintable characters) at line {line}")]
    MalformedContent { line: usize },

    #[error("No playlist is open")]
    InvalidState,

    #[error("Read error: {0}")]
    Io(#[from] io::Error),
}

/// Stable error codes, without payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OpenFailed,
    UnsupportedFormat,
    MalformedContent,
    InvalidState,
    Io,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::OpenFailed { .. } => ErrorKind::OpenFailed,
            ParseError::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            ParseError::MalformedContent { .. } => ErrorKind::MalformedContent,
            ParseError::InvalidState => ErrorKind::InvalidState,
            ParseError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            ParseError::MalformedContent { line: 3 }.kind(),
            ErrorKind::MalformedContent
        );
        assert_eq!(
            ParseError::UnsupportedFormat("xspf".to_string()).kind(),
            ErrorKind::UnsupportedFormat
        );
        assert_eq!(ParseError::InvalidState.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn test_display() {
        let err = ParseError::UnsupportedFormat("wpl".to_string());
        assert_eq!(err.to_string(), "Unsupported playlist type <wpl>");
    }
}
