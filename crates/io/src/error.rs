//! Error types for timespine-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the timespine-io crate.
///
/// Covers filesystem failures, Parquet format errors, writer configuration
/// validation, and schema mismatches when reading a spine back.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the Parquet library.
    #[error("parquet error: {reason}")]
    Parquet {
        /// Description of the underlying Parquet failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },

    /// Returned when a required column is not present or has the wrong type.
    #[error("column '{name}' missing or mistyped: {reason}")]
    BadColumn {
        /// Name of the expected column.
        name: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl From<parquet::errors::ParquetError> for IoError {
    fn from(e: parquet::errors::ParquetError) -> Self {
        IoError::Parquet {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.parquet"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.parquet");
    }

    #[test]
    fn display_parquet() {
        let err = IoError::Parquet {
            reason: "corrupt footer".to_string(),
        };
        assert_eq!(err.to_string(), "parquet error: corrupt footer");
    }

    #[test]
    fn display_validation() {
        let err = IoError::Validation {
            count: 1,
            details: "row_group_size must be greater than 0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "1 validation error(s): row_group_size must be greater than 0"
        );
    }

    #[test]
    fn display_bad_column() {
        let err = IoError::BadColumn {
            name: "date_day".to_string(),
            reason: "expected Date32".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'date_day' missing or mistyped: expected Date32"
        );
    }

    #[test]
    fn from_parquet_error() {
        let pq_err = parquet::errors::ParquetError::General("test pq error".to_string());
        let err: IoError = pq_err.into();
        assert!(matches!(err, IoError::Parquet { .. }));
        assert!(err.to_string().contains("test pq error"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
