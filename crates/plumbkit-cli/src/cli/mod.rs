//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name = "plumbkit",
    bin_name = "plumbkit",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Classify and scaffold R plumber API projects",
    long_about = "Plumbkit scaffolds new plumber API projects from a template \
                  and classifies R sources by their plumber annotations.",
    after_help = "EXAMPLES:\n\
        \x20 plumbkit new myapi\n\
        \x20 plumbkit new myapi --dir ~/projects --yes\n\
        \x20 plumbkit classify api.R entrypoint.R\n\
        \x20 plumbkit caps --output-format json",
    arg_required_else_help = true,
    subcommand_required = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new plumber API project.
    #[command(
        visible_alias = "n",
        about = "Create a new plumber API project",
        after_help = "EXAMPLES:\n\
            \x20 plumbkit new myapi\n\
            \x20 plumbkit new myapi --dir ~/projects\n\
            \x20 plumbkit new myapi --templates-dir /opt/r-resources --yes"
    )]
    New(NewArgs),

    /// Classify R source files by their plumber annotations.
    #[command(
        visible_alias = "cl",
        about = "Classify R files as plumber sources",
        after_help = "EXAMPLES:\n\
            \x20 plumbkit classify api.R\n\
            \x20 plumbkit classify src/*.R --output-format json"
    )]
    Classify(ClassifyArgs),

    /// Report plumber capabilities of the local R installation.
    #[command(about = "Report whether the plumber package is installed")]
    Caps(CapsArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 plumbkit completions bash > ~/.local/share/bash-completion/completions/plumbkit\n\
            \x20 plumbkit completions zsh  > ~/.zfunc/_plumbkit"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `plumbkit new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Name of the project directory to create.
    #[arg(value_name = "NAME", help = "Project name")]
    pub name: String,

    /// Parent directory the project is created under.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the new project"
    )]
    pub dir: PathBuf,

    /// Template resource root (overrides the configured one).
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Template resource root; falls back to the built-in template"
    )]
    pub templates_dir: Option<PathBuf>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── classify ──────────────────────────────────────────────────────────────────

/// Arguments for `plumbkit classify`.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Files to classify.
    #[arg(value_name = "FILE", required = true, help = "R source files")]
    pub files: Vec<PathBuf>,
}

// ── caps ──────────────────────────────────────────────────────────────────────

/// Arguments for `plumbkit caps`.
#[derive(Debug, Args)]
pub struct CapsArgs {
    /// Rscript binary used for the query.
    #[arg(
        long = "rscript",
        value_name = "BIN",
        default_value = "Rscript",
        help = "Rscript executable to query"
    )]
    pub rscript: String,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `plumbkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: clap_complete::Shell,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["plumbkit", "new", "myapi", "--dir", "/tmp", "--yes"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.name, "myapi");
                assert_eq!(args.dir, PathBuf::from("/tmp"));
                assert!(args.yes);
                assert!(!args.dry_run);
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn new_parent_defaults_to_cwd() {
        let cli = Cli::parse_from(["plumbkit", "new", "myapi"]);
        if let Commands::New(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("."));
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn classify_requires_at_least_one_file() {
        assert!(Cli::try_parse_from(["plumbkit", "classify"]).is_err());
    }

    #[test]
    fn classify_accepts_multiple_files() {
        let cli = Cli::parse_from(["plumbkit", "classify", "a.R", "b.R"]);
        if let Commands::Classify(args) = cli.command {
            assert_eq!(args.files.len(), 2);
        } else {
            panic!("expected Classify command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["plumbkit", "--quiet", "--verbose", "caps"]);
        assert!(result.is_err());
    }
}
