//! Implementation of the `plumbkit caps` command.
//!
//! Thin capability probe: asks the local R installation whether the plumber
//! package is available. A missing or failing `Rscript` simply reports
//! "not installed" — the probe is informational, never fatal.

use std::process::Command;

use serde::Serialize;
use tracing::debug;

use crate::{cli::CapsArgs, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct Capabilities {
    installed: bool,
}

/// Execute the `plumbkit caps` command.
pub fn execute(args: CapsArgs, output: OutputManager) -> CliResult<()> {
    let caps = Capabilities {
        installed: plumber_installed(&args.rscript),
    };

    if output.is_json() {
        output.result(&serde_json::to_string_pretty(&caps).expect("serializable"))?;
    } else if caps.installed {
        output.result("plumber: installed")?;
    } else {
        output.result("plumber: not installed")?;
    }

    Ok(())
}

/// Query the R installation for the plumber package.
fn plumber_installed(rscript: &str) -> bool {
    let probe = Command::new(rscript)
        .args([
            "--vanilla",
            "-e",
            "cat(requireNamespace('plumber', quietly = TRUE))",
        ])
        .output();

    match probe {
        Ok(out) => {
            let stdout = String::from_utf8_lossy(&out.stdout);
            let installed = out.status.success() && stdout.trim().ends_with("TRUE");
            debug!(%rscript, installed, "capability probe finished");
            installed
        }
        Err(e) => {
            debug!(%rscript, error = %e, "capability probe could not run");
            false
        }
    }
}
