//! The scaffold-creation workflow.
//!
//! `ScaffoldService` establishes a new project directory under a parent and
//! populates it from the single named template. Creation is non-destructive:
//! every precondition is checked before the first write, and each failure
//! names the offending path. A directory left behind by a previous failed
//! run is tolerated (reused), never rolled back.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::application::ports::{Filesystem, PathAliaser, PermissionsObserver, TemplateSource};
use crate::error::{ScaffoldError, ScaffoldResult};

/// The single template installed into a new project. Not caller-configurable.
pub const TEMPLATE_FILE: &str = "plumber.R";

/// Successful scaffold: where the template landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldOutcome {
    /// Absolute path of the created template file.
    pub path: PathBuf,
    /// Aliased form of `path`, suitable for display and storage.
    pub display: String,
}

/// Stateful scaffold workflow over injected collaborators.
pub struct ScaffoldService {
    fs: Box<dyn Filesystem>,
    templates: Box<dyn TemplateSource>,
    aliaser: Box<dyn PathAliaser>,
    observer: Box<dyn PermissionsObserver>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(
        fs: Box<dyn Filesystem>,
        templates: Box<dyn TemplateSource>,
        aliaser: Box<dyn PathAliaser>,
        observer: Box<dyn PermissionsObserver>,
    ) -> Self {
        Self {
            fs,
            templates,
            aliaser,
            observer,
        }
    }

    /// Create `parent_dir/name` and populate it with the project template.
    ///
    /// Check order is fixed: name, parent, target directory state, template
    /// file presence — only then the one write. On any failure the
    /// filesystem is unchanged (except a leaf directory that was freshly
    /// created in this call, which a re-run will reuse).
    #[instrument(skip_all, fields(project = %name, parent = %parent_dir.display()))]
    pub fn create_project(&self, name: &str, parent_dir: &Path) -> ScaffoldResult<ScaffoldOutcome> {
        validate_project_name(name)?;

        if !self.fs.is_dir(parent_dir) {
            return Err(ScaffoldError::InvalidParent {
                path: self.aliaser.display(parent_dir),
            });
        }

        let target_dir = parent_dir.join(name);
        if self.fs.exists(&target_dir) {
            self.check_reusable(&target_dir)?;
        } else {
            self.fs.create_dir(&target_dir)?;
            debug!(dir = %target_dir.display(), "created project directory");
        }

        let target_file = target_dir.join(TEMPLATE_FILE);
        let display_path = self.aliaser.display(&target_file);
        if self.fs.exists(&target_file) {
            return Err(ScaffoldError::FileAlreadyExists { path: display_path });
        }

        self.templates.install(TEMPLATE_FILE, &target_file)?;

        // The copy carried over the template's permissions; let dependent
        // watchers refresh their cached state.
        self.observer.on_permissions_changed(&target_file);

        info!(path = %display_path, "project scaffolded");
        Ok(ScaffoldOutcome {
            path: target_file,
            display: display_path,
        })
    }

    /// Decide whether an already-existing target directory is safe to
    /// populate. A listing failure fails closed: if emptiness cannot be
    /// established, the directory is not reusable.
    fn check_reusable(&self, target_dir: &Path) -> ScaffoldResult<()> {
        if !self.fs.is_dir(target_dir) {
            return Err(ScaffoldError::TargetNotADirectory {
                path: self.aliaser.display(target_dir),
            });
        }
        let children = self.fs.read_dir(target_dir)?;
        if !children.is_empty() {
            return Err(ScaffoldError::DirectoryNotEmpty {
                path: self.aliaser.display(target_dir),
            });
        }
        Ok(())
    }
}

fn validate_project_name(name: &str) -> ScaffoldResult<()> {
    let reject = |reason| {
        Err(ScaffoldError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };
    if name.is_empty() {
        return reject("name cannot be empty");
    }
    if name.contains('/') || name.contains('\\') {
        return reject("name cannot contain path separators");
    }
    if name == "." || name == ".." {
        return reject("name cannot be a relative path component");
    }
    Ok(())
}

// ── tests ─────────────────────────────────────────────────────────────────────
