//! Application layer errors.
//!
//! These represent orchestration failures against the outside world;
//! business-rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving the ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The workspace root does not exist (or none was given).
    #[error("no workspace is opened at {path}")]
    WorkspaceNotFound { path: PathBuf },

    /// Refusing to overwrite: the scaffold target already exists.
    #[error("file already exists: {path}")]
    FileExists { path: PathBuf },

    /// A filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::WorkspaceNotFound { path } => vec![
                format!("No project directory at {}", path.display()),
                "Run from inside a project, or pass --workspace <DIR>".into(),
            ],
            Self::FileExists { path } => vec![
                format!("Refusing to overwrite {}", path.display()),
                "Choose a different file name".into(),
                "Or remove the existing file first".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::WorkspaceNotFound { .. } | Self::FileExists { .. } => ErrorCategory::Validation,
            Self::Filesystem { .. } => ErrorCategory::Internal,
        }
    }
}
