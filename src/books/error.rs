//! Errors raised while reading a book

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read a book from disk
#[derive(Debug, Error)]
pub enum BookError {
    /// The path does not exist
    #[error("the book at '{}' was not found", path.display())]
    NotFound { path: PathBuf },

    /// Any other I/O failure: permissions, invalid UTF-8, a directory, ...
    #[error("{source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl BookError {
    /// Classify an I/O error raised while reading `path`
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Path of the book that failed to load
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path } | Self::Read { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_kind_maps_to_not_found() {
        let err = BookError::from_io("missing.txt", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, BookError::NotFound { .. }));
        assert_eq!(err.path(), std::path::Path::new("missing.txt"));
        assert_eq!(err.to_string(), "the book at 'missing.txt' was not found");
    }

    #[test]
    fn other_kinds_map_to_read() {
        let err = BookError::from_io(
            "secret.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert!(matches!(err, BookError::Read { .. }));
        assert_eq!(err.to_string(), "permission denied");
        assert!(std::error::Error::source(&err).is_some());
    }
}
