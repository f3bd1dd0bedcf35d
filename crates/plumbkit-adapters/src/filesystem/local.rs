//! Local filesystem adapter using std::fs.

use std::io;
use std::path::{Path, PathBuf};

use plumbkit_core::{
    application::ports::Filesystem,
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<PathBuf>> {
        let entries = std::fs::read_dir(path).map_err(|e| io_error(path, e, "list directory"))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error(path, e, "list directory"))?;
            children.push(entry.path());
        }
        Ok(children)
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir(path).map_err(|e| io_error(path, e, "create directory"))
    }
}

fn io_error(path: &Path, source: io::Error, op: &'static str) -> ScaffoldError {
    ScaffoldError::Io {
        op,
        path: path.display().to_string(),
        source,
    }
}
