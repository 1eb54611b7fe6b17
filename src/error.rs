//! Error types and exit-code mapping.
//!
//! Fatal conditions are typed per subsystem; per-line recoverable conditions
//! are `core::types::Warning`s, not errors.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all stencil operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("{failed} of {checked} file(s) still contain secret material")]
    CheckFailed { checked: usize, failed: usize },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// `2` flags unsafe usage (self-overwrite) and structural template
    /// errors; everything else exits `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Template(_) => 2,
            Error::Write(WriteError::SelfOverwrite { .. }) => 2,
            _ => 1,
        }
    }
}

/// Structural errors in the template itself.
///
/// Raised only on the strip path; the inject path downgrades the same
/// conditions to warnings and passes the affected region through untouched.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("secret env block opened on line {line} is never closed")]
    UnterminatedEnvBlock { line: usize },

    #[error("private key block opened on line {line} is never closed")]
    UnterminatedKeyBlock { line: usize },
}

/// Failures reading the tool's inputs.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read template {path}: {source}")]
    TemplateUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read secrets file {path}: {source}")]
    SecretsUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read key file {path}: {source}")]
    KeyUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Failures loading `.stencil.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Failures in the atomic writer.
#[derive(Error, Debug)]
pub enum WriteError {
    #[error("refusing to overwrite the source template {path} in place")]
    SelfOverwrite { path: PathBuf },

    #[error("cannot create temporary file in {dir}: {source}")]
    TempFile {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write output: {source}")]
    Write { source: std::io::Error },

    #[error("cannot set permissions on {path}: {source}")]
    Permissions {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot replace {path}: {source}")]
    Replace {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
