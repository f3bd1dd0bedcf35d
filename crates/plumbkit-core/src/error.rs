//! Structured errors for the scaffold workflow.
//!
//! Conflicts are distinct, named variants carrying the offending path in its
//! user-displayable (aliased) form — never a generic failure. I/O variants
//! keep the underlying cause attached for error-chain display.

use thiserror::Error;

use crate::domain::ConflictKind;

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Everything that can go wrong while creating a project skeleton.
///
/// The classifier never fails; this type belongs to the scaffolder alone.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Project name rejected before any I/O.
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    /// The requested parent is not an existing directory.
    #[error("'{path}' is not an existing directory")]
    InvalidParent { path: String },

    /// The target path exists and is not a directory.
    #[error("the directory '{path}' already exists and is not a directory")]
    TargetNotADirectory { path: String },

    /// The target directory exists and is not empty.
    #[error("the directory '{path}' already exists and is not empty")]
    DirectoryNotEmpty { path: String },

    /// The template file is already present in the target directory.
    #[error("the file '{path}' already exists")]
    FileAlreadyExists { path: String },

    /// An environmental filesystem failure (permissions, disk full, …).
    #[error("failed to {op} '{path}'")]
    Io {
        op: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// The named conflict this error represents, if it is one.
    pub fn conflict(&self) -> Option<ConflictKind> {
        match self {
            Self::TargetNotADirectory { .. } => Some(ConflictKind::TargetNotADirectory),
            Self::DirectoryNotEmpty { .. } => Some(ConflictKind::DirectoryNotEmpty),
            Self::FileAlreadyExists { .. } => Some(ConflictKind::FileAlreadyExists),
            _ => None,
        }
    }

    /// Error category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidName { .. } | Self::InvalidParent { .. } => ErrorCategory::Validation,
            Self::TargetNotADirectory { .. }
            | Self::DirectoryNotEmpty { .. }
            | Self::FileAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }

    /// The user-displayable path this error refers to.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::InvalidName { .. } => None,
            Self::InvalidParent { path }
            | Self::TargetNotADirectory { path }
            | Self::DirectoryNotEmpty { path }
            | Self::FileAlreadyExists { path }
            | Self::Io { path, .. } => Some(path),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Io,
}
