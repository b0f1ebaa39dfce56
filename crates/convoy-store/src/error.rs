//! Error types for the fleet database.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while persisting or reading vehicles.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database file does not exist.
    #[error("database not found: {path}")]
    FileNotFound { path: PathBuf },

    /// SQLite rejected an operation.
    #[error("database error in {path}: {source}")]
    Database {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Expected table is absent.
    #[error("table '{table}' not found in {path}")]
    MissingTable { table: String, path: PathBuf },

    // === Coercion Errors ===
    /// Cell was emptied by validation and cannot be stored as an integer.
    #[error("row {row}: column '{column}' is empty")]
    EmptyValue { row: usize, column: String },

    /// Cell is not a valid 64-bit integer.
    #[error("row {row}: column '{column}' value '{value}' is not an integer")]
    InvalidInteger {
        row: usize,
        column: String,
        value: String,
    },
}

impl StoreError {
    pub(crate) fn database(path: impl Into<PathBuf>, source: rusqlite::Error) -> Self {
        Self::Database {
            path: path.into(),
            source,
        }
    }

    /// True when SQLite refused a row because of a table constraint, such as
    /// a duplicate primary key.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Database {
                source: rusqlite::Error::SqliteFailure(failure, _),
                ..
            } if failure.code == rusqlite::ErrorCode::ConstraintViolation
        )
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
