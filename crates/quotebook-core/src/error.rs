//! Error types
//!
//! Typed errors for loading quote data and querying the store, with
//! descriptive messages and recovery suggestions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the quote data source
#[derive(Error, Debug)]
pub enum LoadError {
    /// Data file does not exist
    #[error("Quotes file not found: '{path}'")]
    NotFound { path: PathBuf },

    /// Permission denied reading the data file
    #[error("Permission denied: cannot read '{path}'. Check file permissions.")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to read the data file
    #[error("Failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Data is not a JSON list of {text, author, category} records
    #[error("Invalid quotes data in {origin}: {source}")]
    InvalidFormat {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Create an error from an I/O error with path context
    ///
    /// Classifies the error based on its kind.
    pub fn from_io(error: io::Error, path: PathBuf) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound { path },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied {
                path,
                source: error,
            },
            _ => LoadError::Read {
                path,
                source: error,
            },
        }
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            LoadError::NotFound { .. } => Some(
                "Point quotes_file at an existing JSON file: quotebook config set quotes_file <path>",
            ),
            LoadError::PermissionDenied { .. } => {
                Some("Check that the quotes file is readable by the current user.")
            }
            LoadError::InvalidFormat { .. } => Some(
                "The file must contain a JSON list of objects with \"text\", \"author\" and \"category\" strings.",
            ),
            LoadError::Read { .. } => None,
        }
    }
}

/// Returned when a random pick is requested from a store with no quotes
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("No quotes available to choose from")]
pub struct EmptyCollectionError;

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = LoadError::from_io(io_err, PathBuf::from("/missing/quotes.json"));

        assert!(matches!(err, LoadError::NotFound { .. }));
        assert!(err.to_string().contains("/missing/quotes.json"));
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn test_permission_denied_classification() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err = LoadError::from_io(io_err, PathBuf::from("/locked/quotes.json"));

        assert!(matches!(err, LoadError::PermissionDenied { .. }));
        assert!(err.to_string().contains("Permission denied"));
    }

    #[test]
    fn test_other_io_errors_are_read_errors() {
        let io_err = io::Error::new(io::ErrorKind::Other, "device busy");
        let err = LoadError::from_io(io_err, PathBuf::from("/dev/quotes"));

        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.recovery_suggestion().is_none());
    }

    #[test]
    fn test_invalid_format_display() {
        let source = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = LoadError::InvalidFormat {
            origin: "'quotes.json'".to_string(),
            source,
        };

        let msg = err.to_string();
        assert!(msg.contains("Invalid quotes data"));
        assert!(msg.contains("quotes.json"));
    }

    #[test]
    fn test_empty_collection_display() {
        assert_eq!(
            EmptyCollectionError.to_string(),
            "No quotes available to choose from"
        );
    }
}
