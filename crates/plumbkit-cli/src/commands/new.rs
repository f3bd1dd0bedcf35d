//! Implementation of the `plumbkit new` command.
//!
//! Responsibility: wire the adapters together, call the core scaffold
//! service, and display results. The creation semantics themselves live in
//! `plumbkit_core`.

use std::path::PathBuf;

use tracing::{info, instrument};

use plumbkit_adapters::{
    BuiltinTemplate, DirTemplateSource, HomeAliaser, LocalFilesystem, TracingPermissionsObserver,
};
use plumbkit_core::application::{ScaffoldService, TEMPLATE_FILE, ports::TemplateSource};

use crate::{
    cli::{GlobalArgs, NewArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `plumbkit new` command.
///
/// Dispatch sequence:
/// 1. Resolve the template source (flag > config > builtin)
/// 2. Confirm with the user unless `--yes` or `--quiet`
/// 3. Early-exit if `--dry-run`
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(project = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let template_root = effective_template_root(args.templates_dir.clone(), &config);

    if !global.quiet && !args.yes {
        show_configuration(&args, template_root.as_deref(), &output)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    if args.dry_run {
        output.info(&format!(
            "Dry run: would create '{}/{}' under {}",
            args.name,
            TEMPLATE_FILE,
            args.dir.display(),
        ))?;
        return Ok(());
    }

    let templates: Box<dyn TemplateSource> = match template_root {
        Some(root) => Box::new(DirTemplateSource::new(root)),
        None => Box::new(BuiltinTemplate::new()),
    };
    let service = ScaffoldService::new(
        Box::new(LocalFilesystem::new()),
        templates,
        Box::new(HomeAliaser::new()),
        Box::new(TracingPermissionsObserver),
    );

    output.header(&format!("Creating '{}'...", args.name))?;
    info!(project = %args.name, parent = %args.dir.display(), "scaffold started");

    let outcome = service.create_project(&args.name, &args.dir)?;

    info!(path = %outcome.display, "scaffold completed");
    output.success(&format!("Created {}", outcome.display))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", args.name))?;
        output.print(&format!(
            "  Rscript -e 'plumber::pr_run(plumber::pr(\"{TEMPLATE_FILE}\"))'"
        ))?;
    }

    Ok(())
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    args: &NewArgs,
    template_root: Option<&std::path::Path>,
    out: &OutputManager,
) -> CliResult<()> {
    out.header("Configuration")?;
    out.print(&format!("  Project:   {}", args.name))?;
    out.print(&format!("  Location:  {}", args.dir.display()))?;
    out.print(&format!("  Template:  {TEMPLATE_FILE}"))?;
    match template_root {
        Some(root) => out.print(&format!("  Templates: {}", root.display()))?,
        None => out.print("  Templates: built-in")?,
    }
    out.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

/// Resolve the effective template root: flag beats config, config beats the
/// built-in fallback.
fn effective_template_root(flag: Option<PathBuf>, config: &AppConfig) -> Option<PathBuf> {
    flag.or_else(|| config.templates.root.clone())
}
