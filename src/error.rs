//! Error types for position file conversion.

use std::path::PathBuf;
use thiserror::Error;

/// Error categories reported by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No `*-all-pos*.csv` file in the directory.
    NoMatchingFile,
    /// Input file has no rows.
    EmptyFile,
    /// Header has fewer than the required columns.
    MalformedHeader,
    /// Any read, write or delete failure.
    Io,
}

/// Main error type for the converter.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("No CSV file with '-all-pos' found in {dir}")]
    NoMatchingFile { dir: PathBuf },

    #[error("CSV file is empty: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Expected at least {expected} columns, found {found} in {path}")]
    MalformedHeader {
        path: PathBuf,
        found: usize,
        expected: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to remove {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            FixError::NoMatchingFile { .. } => ErrorCode::NoMatchingFile,
            FixError::EmptyFile { .. } => ErrorCode::EmptyFile,
            FixError::MalformedHeader { .. } => ErrorCode::MalformedHeader,
            FixError::Csv(_)
            | FixError::Io(_)
            | FixError::WriteFailed { .. }
            | FixError::RemoveFailed { .. } => ErrorCode::Io,
        }
    }

    /// One-line message shown to the operator when the run stops.
    pub fn user_message(&self) -> String {
        match self {
            FixError::NoMatchingFile { .. } => {
                "No CSV file with '-all-pos' found in the manufacturing directory.".to_string()
            }
            FixError::EmptyFile { .. } => "CSV file is empty.".to_string(),
            FixError::MalformedHeader {
                found, expected, ..
            } => format!(
                "Warning: Expected at least {} columns, found {}",
                expected, found
            ),
            other => format!("Error processing file: {}", other),
        }
    }
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, FixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = FixError::NoMatchingFile {
            dir: PathBuf::from("Manufacturing"),
        };
        assert_eq!(err.code(), ErrorCode::NoMatchingFile);

        let err = FixError::Io(std::io::Error::other("boom"));
        assert_eq!(err.code(), ErrorCode::Io);
    }

    #[test]
    fn test_user_messages() {
        let err = FixError::EmptyFile {
            path: PathBuf::from("board-all-pos.csv"),
        };
        assert_eq!(err.user_message(), "CSV file is empty.");

        let err = FixError::MalformedHeader {
            path: PathBuf::from("board-all-pos.csv"),
            found: 5,
            expected: 7,
        };
        assert_eq!(
            err.user_message(),
            "Warning: Expected at least 7 columns, found 5"
        );

        let err = FixError::Io(std::io::Error::other("disk full"));
        assert_eq!(
            err.user_message(),
            "Error processing file: IO error: disk full"
        );
    }

    #[test]
    fn test_malformed_header_message() {
        let err = FixError::MalformedHeader {
            path: PathBuf::from("board-all-pos.csv"),
            found: 3,
            expected: 7,
        };
        assert_eq!(
            err.to_string(),
            "Expected at least 7 columns, found 3 in board-all-pos.csv"
        );
    }
}
