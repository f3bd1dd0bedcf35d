//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffold service needs from the outside
//! world. The `plumbkit-adapters` crate provides implementations; tests may
//! supply fakes.

use std::path::{Path, PathBuf};

use crate::error::ScaffoldResult;

/// Port for the filesystem checks and mutations the scaffolder performs.
///
/// Implemented by:
/// - `plumbkit_adapters::filesystem::LocalFilesystem` (production)
/// - `plumbkit_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// List the immediate children of a directory.
    fn read_dir(&self, path: &Path) -> ScaffoldResult<Vec<PathBuf>>;

    /// Create a single leaf directory. Parents must already exist.
    fn create_dir(&self, path: &Path) -> ScaffoldResult<()>;
}

/// Port for resolving and installing the named project template.
///
/// The template collection is read-only for the process lifetime; `install`
/// must preserve the source file's permissions on the destination when the
/// template is filesystem-backed.
///
/// Implemented by:
/// - `plumbkit_adapters::DirTemplateSource` (template root from config)
/// - `plumbkit_adapters::BuiltinTemplate` (embedded fallback)
pub trait TemplateSource: Send + Sync {
    /// Copy the template named `name` to `dest`.
    fn install(&self, name: &str, dest: &Path) -> ScaffoldResult<()>;
}

/// Port for converting internal paths to their user-displayable aliased form.
///
/// Used only to produce messages and results, never for logic decisions.
pub trait PathAliaser: Send + Sync {
    /// Render a path for display (e.g. abbreviate the home directory).
    fn display(&self, path: &Path) -> String;
}

/// Port for the permission-change notification hook.
///
/// Invoked synchronously once after a successful template copy so dependent
/// file-watchers can refresh cached permission state.
pub trait PermissionsObserver: Send + Sync {
    fn on_permissions_changed(&self, path: &Path);
}
