//! Error types for the guide library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::GameVersion;

/// Comprehensive error type for all guide operations.
#[derive(Error, Debug)]
pub enum GuideError {
    /// Dataset failed to load or parse for a game version
    #[error("Failed to load dataset for {version}: {reason}")]
    DatasetLoad { version: GameVersion, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Step not found for the given ID
    #[error("Step with ID '{id}' not found")]
    StepNotFound { id: String },
    /// Act not found in the active dataset
    #[error("Act {number} not found")]
    ActNotFound { number: u32 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> GuideError {
        GuideError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> GuideError {
        GuideError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl GuideError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a dataset load error for a version.
    pub fn dataset_load(version: GameVersion, reason: impl Into<String>) -> Self {
        Self::DatasetLoad {
            version,
            reason: reason.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| GuideError::database(message).with_source(e))
    }
}

/// Result type alias for guide operations
pub type Result<T> = std::result::Result<T, GuideError>;
