//! Strip command.
//!
//! Reads a populated template, writes its redacted form to stdout. With no
//! file argument it filters stdin, which is the shape git clean filters
//! expect.

use std::io::{self, Read, Write};
use std::path::Path;

use crate::cli::output;
use crate::core::redact;
use crate::error::{Result, StoreError};

/// Redact a template to stdout.
pub fn execute(template: Option<&Path>) -> Result<()> {
    let input = match template {
        Some(path) => {
            std::fs::read_to_string(path).map_err(|source| StoreError::TemplateUnreadable {
                path: path.to_path_buf(),
                source,
            })?
        }
        None => {
            if atty::is(atty::Stream::Stdin) {
                output::hint("reading template from standard input; pipe a file or pass a path");
            }
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let result = redact::strip(&input)?;
    for warning in &result.warnings {
        output::warn(&warning.to_string());
    }

    io::stdout().write_all(result.text.as_bytes())?;
    Ok(())
}
