//! Command handlers. Each submodule owns one subcommand.

pub mod caps;
pub mod classify;
pub mod completions;
pub mod new;
