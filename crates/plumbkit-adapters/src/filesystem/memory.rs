//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use plumbkit_core::{
    application::ports::Filesystem,
    error::{ScaffoldError, ScaffoldResult},
};

/// In-memory filesystem for testing. Cloning shares state.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a directory (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().directories.insert(path.into());
    }

    /// Seed a file (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.inner
            .write()
            .unwrap()
            .files
            .insert(path.into(), content.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().unwrap().files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner.read().unwrap().files.keys().cloned().collect()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.read().unwrap().directories.contains(path)
    }

    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<PathBuf>> {
        let inner = self.inner.read().unwrap();
        if !inner.directories.contains(path) {
            return Err(ScaffoldError::Io {
                op: "list directory",
                path: path.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
            });
        }
        Ok(inner
            .files
            .keys()
            .chain(inner.directories.iter())
            .filter(|p| p.parent() == Some(path))
            .cloned()
            .collect())
    }

    fn create_dir(&self, path: &Path) -> ScaffoldResult<()> {
        let mut inner = self.inner.write().unwrap();
        match path.parent() {
            Some(parent) if inner.directories.contains(parent) => {
                inner.directories.insert(path.to_path_buf());
                Ok(())
            }
            _ => Err(ScaffoldError::Io {
                op: "create directory",
                path: path.display().to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "parent does not exist"),
            }),
        }
    }
}
