//! Permission-change notification hooks.

use std::path::Path;

use plumbkit_core::application::ports::PermissionsObserver;
use tracing::debug;

/// Emits a structured tracing event for each permission change.
///
/// Host integrations that keep permission caches can provide their own
/// observer; the CLI only needs the event for diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPermissionsObserver;

impl PermissionsObserver for TracingPermissionsObserver {
    fn on_permissions_changed(&self, path: &Path) {
        debug!(path = %path.display(), "permissions changed");
    }
}
