//! Plumbkit Core - classifier and scaffold service
//!
//! This crate provides the domain and application layers for Plumbkit,
//! following a ports and adapters layout.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         plumbkit-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Services             │
//! │          (ScaffoldService)              │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Filesystem, TemplateSource, Aliaser,   │
//! │        PermissionsObserver)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   plumbkit-adapters (Infrastructure)    │
//! │ (LocalFilesystem, DirTemplateSource, …) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (the [`domain::classify`] function and its role/conflict
//! enums) has no port dependencies at all — it is pure and total.

pub mod application;
pub mod domain;
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldOutcome, ScaffoldService,
        ports::{Filesystem, PathAliaser, PermissionsObserver, TemplateSource},
    };
    pub use crate::domain::{ConflictKind, FileRole, classify};
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
