//! Inject command.
//!
//! Restores secrets into a redacted template from a KEY=VALUE secrets file
//! and a private key file. Writes to stdout, or atomically to an output
//! path. Path arguments fall back to `.stencil.toml`.

use std::io::{self, Write};
use std::path::PathBuf;

use crate::cli::output;
use crate::core::config::Config;
use crate::core::keymat::KeyMaterial;
use crate::core::restore;
use crate::core::secrets::SecretMap;
use crate::core::writer;
use crate::error::{Error, Result, StoreError};

/// Restore secrets into a template.
pub fn execute(
    template: Option<PathBuf>,
    secrets: Option<PathBuf>,
    key: Option<PathBuf>,
    output_path: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load()?;

    let template = resolve(template, config.files.template, "template")?;
    let secrets_path = resolve(secrets, config.files.secrets, "secrets file")?;
    let key_path = resolve(key, config.files.key, "key file")?;

    let input =
        std::fs::read_to_string(&template).map_err(|source| StoreError::TemplateUnreadable {
            path: template.clone(),
            source,
        })?;
    let secrets = SecretMap::load(&secrets_path)?;
    let key = KeyMaterial::load(&key_path)?;

    let result = restore::inject(&input, &secrets, &key);
    for warning in &result.warnings {
        output::warn(&warning.to_string());
    }

    match output_path {
        Some(path) => {
            writer::write_atomic(&path, &template, &result.text)?;
            output::success(&format!(
                "wrote {} ({} secret{} injected)",
                output::path(&path.display().to_string()),
                result.substitutions,
                if result.substitutions == 1 { "" } else { "s" }
            ));
        }
        None => io::stdout().write_all(result.text.as_bytes())?,
    }

    Ok(())
}

/// Pick an explicit argument over the configured default.
fn resolve(arg: Option<PathBuf>, configured: Option<PathBuf>, what: &str) -> Result<PathBuf> {
    arg.or(configured)
        .ok_or_else(|| Error::Usage(format!("no {what} given and none configured")))
}
