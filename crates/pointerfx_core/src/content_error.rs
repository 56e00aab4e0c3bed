//! Content error types

use std::fmt;
use std::io;

/// Error fetching page content
#[derive(Debug)]
pub enum ContentError {
    /// IO error (file not found, permission denied, etc.)
    Io(io::Error),
    /// The content document is not valid RON
    Parse(ron::error::SpannedError),
    /// The background worker went away before answering
    WorkerGone,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(err) => write!(f, "Content IO error: {}", err),
            ContentError::Parse(err) => write!(f, "Content parse error: {}", err),
            ContentError::WorkerGone => write!(f, "Content worker exited without a result"),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Io(err) => Some(err),
            ContentError::Parse(err) => Some(err),
            ContentError::WorkerGone => None,
        }
    }
}

impl From<io::Error> for ContentError {
    fn from(err: io::Error) -> Self {
        ContentError::Io(err)
    }
}

impl From<ron::error::SpannedError> for ContentError {
    fn from(err: ron::error::SpannedError) -> Self {
        ContentError::Parse(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err: ContentError = io::Error::new(io::ErrorKind::NotFound, "file missing").into();
        let msg = format!("{}", err);
        assert!(msg.contains("IO error"));
        assert!(msg.contains("file missing"));
    }

    #[test]
    fn test_parse_error_from_ron() {
        let parse = ron::from_str::<Vec<u32>>("[1, 2,").unwrap_err();
        let err: ContentError = parse.into();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(format!("{}", err).contains("parse error"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error;

        let err = ContentError::Io(io::Error::new(io::ErrorKind::Other, "x"));
        assert!(err.source().is_some());
        assert!(ContentError::WorkerGone.source().is_none());
    }
}
