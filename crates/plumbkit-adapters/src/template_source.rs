//! Template sources: where `plumber.R` comes from.
//!
//! Two implementations of the core `TemplateSource` port:
//!
//! - [`DirTemplateSource`] resolves templates under a read-only resource root
//!   supplied by configuration at startup. The copy preserves the template
//!   file's permissions on the destination.
//! - [`BuiltinTemplate`] falls back to the default template embedded in the
//!   binary, for installations without a resource root.

use std::path::{Path, PathBuf};

use plumbkit_core::{
    application::ports::TemplateSource,
    error::{ScaffoldError, ScaffoldResult},
};
use tracing::debug;

/// Fixed subpath of the template collection under the resource root.
const TEMPLATE_SUBDIR: &str = "templates/plumber";

/// Default `plumber.R` shipped with the binary.
const BUILTIN_PLUMBER: &str = include_str!("../templates/plumber/plumber.R");

/// Templates resolved from a directory root.
#[derive(Debug, Clone)]
pub struct DirTemplateSource {
    root: PathBuf,
}

impl DirTemplateSource {
    /// Create a source over the given resource root.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Full path of a named template under the root.
    pub fn template_path(&self, name: &str) -> PathBuf {
        self.root.join(TEMPLATE_SUBDIR).join(name)
    }
}

impl TemplateSource for DirTemplateSource {
    fn install(&self, name: &str, dest: &Path) -> ScaffoldResult<()> {
        let src = self.template_path(name);
        // std::fs::copy carries the source permission bits to the destination.
        std::fs::copy(&src, dest).map_err(|e| ScaffoldError::Io {
            op: "copy template to",
            path: dest.display().to_string(),
            source: e,
        })?;
        debug!(template = %src.display(), dest = %dest.display(), "template installed");
        Ok(())
    }
}

/// The embedded default template.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplate;

impl BuiltinTemplate {
    pub fn new() -> Self {
        Self
    }

    /// Content of the named builtin, if it exists.
    pub fn content(name: &str) -> Option<&'static str> {
        match name {
            "plumber.R" => Some(BUILTIN_PLUMBER),
            _ => None,
        }
    }
}

impl TemplateSource for BuiltinTemplate {
    fn install(&self, name: &str, dest: &Path) -> ScaffoldResult<()> {
        let content = Self::content(name).ok_or_else(|| ScaffoldError::Io {
            op: "resolve template for",
            path: dest.display().to_string(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no builtin template named '{name}'"),
            ),
        })?;
        std::fs::write(dest, content).map_err(|e| ScaffoldError::Io {
            op: "write template to",
            path: dest.display().to_string(),
            source: e,
        })?;
        debug!(template = name, dest = %dest.display(), "builtin template installed");
        Ok(())
    }
}
