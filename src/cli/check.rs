//! Check command.
//!
//! Commit-time guard: a template is clean when strip would leave it
//! unchanged. Dirty files are listed and the command exits nonzero, so it
//! can anchor a pre-commit hook.

use std::path::{Path, PathBuf};

use console::style;
use serde::Serialize;

use crate::cli::output;
use crate::core::redact;
use crate::error::{Error, Result, StoreError};

/// Per-file verdict in the JSON report.
#[derive(Serialize)]
struct FileReport {
    path: String,
    clean: bool,
    /// Lines strip would rewrite.
    live_lines: usize,
}

/// Check templates for live secret material.
pub fn execute(templates: &[PathBuf], json: bool) -> Result<()> {
    let mut reports = Vec::with_capacity(templates.len());
    let mut failed = 0usize;

    for path in templates {
        let report = check_one(path)?;
        if !report.clean {
            failed += 1;
        }
        reports.push(report);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            if report.clean {
                println!("{} {}: clean", style("✓").green(), report.path);
            } else {
                println!(
                    "{} {}: {} line(s) of live secret material",
                    style("✗").red(),
                    report.path,
                    report.live_lines
                );
            }
        }
    }

    if failed > 0 {
        if !json {
            output::hint(&format!("run: {}", output::cmd("stencil strip")));
        }
        return Err(Error::CheckFailed {
            checked: templates.len(),
            failed,
        });
    }
    Ok(())
}

/// Strip a single template in memory and compare.
///
/// Structural errors (unterminated blocks) propagate: a template that
/// cannot be classified safely is worse than a dirty one.
fn check_one(path: &Path) -> Result<FileReport> {
    let input = std::fs::read_to_string(path).map_err(|source| StoreError::TemplateUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let result = redact::strip(&input)?;
    let clean = result.text == input;
    Ok(FileReport {
        path: path.display().to_string(),
        clean,
        live_lines: if clean { 0 } else { count_differing_lines(&input, &result.text) },
    })
}

fn count_differing_lines(before: &str, after: &str) -> usize {
    // Stripping only rewrites or deletes lines, so pairing up to the
    // shorter side and counting the overhang is exact enough for a report.
    let b: Vec<&str> = before.lines().collect();
    let a: Vec<&str> = after.lines().collect();
    let paired = a.len().min(b.len());
    let differing = (0..paired).filter(|&i| a[i] != b[i]).count();
    differing + b.len().saturating_sub(a.len())
}
