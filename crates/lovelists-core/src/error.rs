//! Error types for the Love Lists core library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible Love Lists operation.
///
/// Malformed *stored values* never surface here: those are decoded through
/// [`crate::store::codec::parse`] and replaced with a fallback at the call
/// site. This enum covers the failures a caller can act on.
#[derive(Error, Debug)]
pub enum ListsError {
    /// Store backend connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No template with the given ID in the catalog
    #[error("List '{id}' not found")]
    TemplateNotFound { id: String },
    /// Two catalog entries share an ID
    #[error("Catalog contains duplicate list ID '{id}'")]
    DuplicateTemplate { id: String },
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
    /// The catalog source could not be decoded
    #[error("Catalog error: {source}")]
    Catalog {
        #[source]
        source: serde_json::Error,
    },
    /// Serialization errors while encoding values for the store
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
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
    pub fn with_source(self, source: rusqlite::Error) -> ListsError {
        ListsError::Database {
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
    pub fn with_reason(self, reason: impl Into<String>) -> ListsError {
        ListsError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ListsError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Shorthand for [`ListsError::TemplateNotFound`].
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::TemplateNotFound { id: id.into() }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ListsError::database(message).with_source(e))
    }
}

/// Result type alias for Love Lists operations
pub type Result<T> = std::result::Result<T, ListsError>;
