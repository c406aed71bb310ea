use std::io;
use thiserror::Error;

use crate::brain::catalog::ErrorKind;

/// Application-wide error type, consolidating all possible errors into a single enum.
///
/// The brain itself never fails; these errors come from its collaborators
/// (record sources, file loading) and are mapped onto localized catalog
/// messages at the response boundary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents errors originating from the record database or its JSON fallback.
    #[error("Database error: {0}")]
    Database(String),

    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents errors reaching a remote collaborator (speech or chat service).
    #[error("Network error: {0}")]
    Network(String),

    /// Represents data validation errors (e.g., malformed record files).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unknown language codes).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl AppError {
    /// Maps the failure onto the error catalog entry the user should see.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Database(_) | AppError::Io(_) => ErrorKind::DatabaseError,
            AppError::Network(_) => ErrorKind::NetworkError,
            AppError::Validation(_) | AppError::Config(_) => ErrorKind::InvalidInput,
        }
    }
}
