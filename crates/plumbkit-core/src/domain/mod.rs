//! Domain layer: pure classification logic and closed enumerations.
//!
//! Nothing in this module performs I/O. The scaffold workflow lives in
//! [`crate::application`]; this layer only decides.

mod classifier;
mod conflict;

pub use classifier::{FileRole, classify};
pub use conflict::ConflictKind;
