//! Storage error types for the coefficient database

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("storage unavailable: {message}")]
    Unavailable { message: String },

    #[error("migration failed: {message}")]
    MigrationFailed { message: String },

    #[error("corrupted data: {message}")]
    CorruptedData { message: String },

    #[error("cannot create storage directory {path}: {message}")]
    DirectoryCreateFailed { path: String, message: String },
}

impl UserFacingError for StorageError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::Unavailable { .. } => {
                Some("Check that the database path is readable and writable, then retry.")
            }
            Self::DirectoryCreateFailed { .. } => {
                Some("Choose a writable location with --db-path or PACOS_DB_PATH.")
            }
            Self::CorruptedData { .. } => {
                Some("Run `pacos reset` to discard the stored coefficient.")
            }
            Self::MigrationFailed { .. } => None,
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::Unavailable { .. } => "storage.unavailable",
            Self::MigrationFailed { .. } => "storage.migration_failed",
            Self::CorruptedData { .. } => "storage.corrupted_data",
            Self::DirectoryCreateFailed { .. } => "storage.directory_create_failed",
        };
        Some(code)
    }
}
