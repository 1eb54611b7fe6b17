//! Command-line interface.

pub mod check;
pub mod completions;
pub mod inject;
pub mod output;
pub mod strip;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Stencil - reversible secret redaction for deployment templates.
#[derive(Parser)]
#[command(
    name = "stencil",
    about = "Reversible secret redaction for deployment templates",
    version,
    after_help = "Cut clean. Commit safe. ✂️"
)]
pub struct Cli {
    /// Increase log verbosity (STENCIL_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Redact secrets from a template (stdin to stdout; git clean filter)
    Strip {
        /// Template file to read instead of standard input
        template: Option<PathBuf>,
    },

    /// Restore secrets into a redacted template
    Inject {
        /// Redacted template (falls back to .stencil.toml)
        template: Option<PathBuf>,
        /// KEY=VALUE secrets file (falls back to .stencil.toml)
        secrets: Option<PathBuf>,
        /// Private key file (falls back to .stencil.toml)
        key: Option<PathBuf>,
        /// Write here atomically instead of standard output
        output: Option<PathBuf>,
    },

    /// Verify that templates contain no live secret material
    Check {
        /// Templates to check
        #[arg(required = true)]
        templates: Vec<PathBuf>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported completion shells.
#[derive(Copy, Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Dispatch a parsed command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    match command {
        Command::Strip { template } => strip::execute(template.as_deref()),
        Command::Inject {
            template,
            secrets,
            key,
            output,
        } => inject::execute(template, secrets, key, output),
        Command::Check { templates, json } => check::execute(&templates, json),
        Command::Completions { shell } => completions::execute(shell),
    }
}
