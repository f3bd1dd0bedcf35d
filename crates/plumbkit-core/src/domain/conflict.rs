//! Pre-existing filesystem state that makes scaffold creation unsafe.

use serde::{Deserialize, Serialize};

/// The specific conflict a scaffold request ran into.
///
/// Closed set so callers can match exhaustively instead of sniffing
/// message strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictKind {
    /// The target path exists but is not a directory.
    TargetNotADirectory,
    /// The target directory exists and already has entries.
    DirectoryNotEmpty,
    /// The template file itself already exists in the target directory.
    FileAlreadyExists,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TargetNotADirectory => write!(f, "target is not a directory"),
            Self::DirectoryNotEmpty => write!(f, "directory is not empty"),
            Self::FileAlreadyExists => write!(f, "file already exists"),
        }
    }
}
