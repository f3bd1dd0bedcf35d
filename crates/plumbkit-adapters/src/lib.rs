//! Infrastructure adapters for Plumbkit.
//!
//! Implementations of the ports declared in `plumbkit_core::application::ports`:
//!
//! - [`LocalFilesystem`] / [`MemoryFilesystem`] — production and test
//!   filesystems for the scaffold service.
//! - [`DirTemplateSource`] / [`BuiltinTemplate`] — template resolution from a
//!   configured resource root, or the embedded default.
//! - [`HomeAliaser`] / [`IdentityAliaser`] — user-displayable path forms.
//! - [`TracingPermissionsObserver`] — permission-change notification hook.

pub mod alias;
pub mod filesystem;
pub mod observer;
pub mod template_source;

pub use alias::{HomeAliaser, IdentityAliaser};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use observer::TracingPermissionsObserver;
pub use template_source::{BuiltinTemplate, DirTemplateSource};
