//! Optional per-project configuration (`.stencil.toml`).
//!
//! Supplies default paths so `stencil inject` can be run bare inside a
//! checkout. CLI arguments always win over config values; the tool never
//! writes this file.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{ConfigError, Result};

/// Configuration file name, looked up in the current directory.
pub const CONFIG_FILE: &str = ".stencil.toml";

/// Project configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub files: Files,
}

/// Default paths for the inject inputs.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Files {
    /// Default template for `inject` and `check`.
    pub template: Option<PathBuf>,
    /// Default `KEY=VALUE` secrets file.
    pub secrets: Option<PathBuf>,
    /// Default private key file.
    pub key: Option<PathBuf>,
}

impl Config {
    /// Load `.stencil.toml` from the current directory.
    ///
    /// A missing file yields the default (empty) configuration; an
    /// unreadable or malformed file is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Unreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}
