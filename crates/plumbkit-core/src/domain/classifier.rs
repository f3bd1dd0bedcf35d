//! File-role classification for R plumber sources.
//!
//! A file is recognised by a lightweight heuristic, not a parse: either its
//! base name is the reserved `entrypoint` literal, or some line carries a
//! plumber annotation comment (`#' @get /path`, `#* @filter auth`, …).
//! False positives and negatives are acceptable — classification only drives
//! optional editor affordances, never build correctness.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Extended-type tag hosts attach to annotated plumber documents.
pub const EXTENDED_TYPE_FILE: &str = "plumber-file";
/// Extended-type tag for the entrypoint file.
pub const EXTENDED_TYPE_ENTRYPOINT: &str = "plumber-entrypoint";

/// The reserved base name that marks a project bootstrap file.
const ENTRYPOINT_STEM: &str = "entrypoint";

/// An annotation line: comment opener (`#'` or `#*`), optional whitespace,
/// `@`, one of the plumber verbs, then at least one whitespace character.
/// Multiline so any line in the file qualifies.
static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^#['*]\s*@(get|put|post|filter|assets|use|delete|head|options|patch)\s")
        .expect("annotation pattern is valid")
});

/// Semantic role of a scanned source file.
///
/// Closed set, derived fresh on every classification call — never cached
/// beyond the caller's own metadata store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileRole {
    /// Not a plumber file.
    #[default]
    None,
    /// Carries at least one plumber annotation line.
    Annotated,
    /// Base name is exactly `entrypoint` — the canonical project bootstrap,
    /// regardless of content.
    Entrypoint,
}

impl FileRole {
    /// The extended-type string hosts store on the document, or `""` for
    /// [`FileRole::None`].
    pub fn as_extended_type(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Annotated => EXTENDED_TYPE_FILE,
            Self::Entrypoint => EXTENDED_TYPE_ENTRYPOINT,
        }
    }

    /// Inverse of [`Self::as_extended_type`]; unknown tags map to `None`.
    pub fn from_extended_type(extended_type: &str) -> Self {
        match extended_type {
            EXTENDED_TYPE_FILE => Self::Annotated,
            EXTENDED_TYPE_ENTRYPOINT => Self::Entrypoint,
            _ => Self::None,
        }
    }
}

impl std::fmt::Display for FileRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Annotated => write!(f, "annotated"),
            Self::Entrypoint => write!(f, "entrypoint"),
        }
    }
}

/// Classify a source file from its base name (extension already stripped by
/// the caller) and full text content.
///
/// Total and side-effect free: malformed or binary content simply fails to
/// match and yields [`FileRole::None`]. The entrypoint check short-circuits —
/// an `entrypoint` file is `Entrypoint` even if its content also carries
/// annotations.
pub fn classify(base_name: &str, content: &str) -> FileRole {
    if base_name == ENTRYPOINT_STEM {
        return FileRole::Entrypoint;
    }
    if ANNOTATION.is_match(content) {
        FileRole::Annotated
    } else {
        FileRole::None
    }
}
