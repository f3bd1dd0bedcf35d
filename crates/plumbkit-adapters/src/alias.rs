//! Path aliasing for user-facing messages.
//!
//! Conflict messages and scaffold results show paths in aliased form; the
//! scaffold logic itself always works on the real paths.

use std::path::{Path, PathBuf};

use plumbkit_core::application::ports::PathAliaser;

/// Abbreviates the home-directory prefix to `~`.
#[derive(Debug, Clone)]
pub struct HomeAliaser {
    home: Option<PathBuf>,
}

impl HomeAliaser {
    /// Create an aliaser for the current user's home directory.
    pub fn new() -> Self {
        Self {
            home: dirs::home_dir(),
        }
    }

    /// Create an aliaser with an explicit home directory (testing helper).
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Self {
            home: Some(home.into()),
        }
    }
}

impl Default for HomeAliaser {
    fn default() -> Self {
        Self::new()
    }
}

impl PathAliaser for HomeAliaser {
    fn display(&self, path: &Path) -> String {
        match self.home.as_deref().map(|home| path.strip_prefix(home)) {
            Some(Ok(rest)) if rest.as_os_str().is_empty() => "~".to_string(),
            Some(Ok(rest)) => format!("~/{}", rest.display()),
            _ => path.display().to_string(),
        }
    }
}

/// Renders paths verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityAliaser;

impl PathAliaser for IdentityAliaser {
    fn display(&self, path: &Path) -> String {
        path.display().to_string()
    }
}
