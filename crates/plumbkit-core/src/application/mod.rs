//! Application layer: the scaffold workflow and the ports it drives.

pub mod ports;
mod scaffold;

pub use scaffold::{ScaffoldOutcome, ScaffoldService, TEMPLATE_FILE};
