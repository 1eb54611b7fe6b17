//! Stencil - reversible secret redaction for deployment templates.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use stencil::cli::output;
use stencil::cli::{execute, Cli};
use stencil::error::{Error, WriteError};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("STENCIL_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("stencil=debug")
        } else {
            EnvFilter::new("stencil=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Write(WriteError::SelfOverwrite { .. }) => {
                Some("pass a different output path, or drop it to write to stdout")
            }
            Error::CheckFailed { .. } => None, // check prints its own hint
            Error::Usage(_) => Some("see: stencil --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
