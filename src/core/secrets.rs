//! Secret store: the `KEY=VALUE` file feeding the inject transform.
//!
//! The format is dotenv-shaped: one pair per line, `#` comments, blank
//! lines ignored, optional double quotes around the value. Individual
//! malformed lines are skipped, not fatal — only an unreadable file is an
//! error.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::{Result, StoreError};

/// In-memory map of secret names to values.
///
/// Values are zeroized when the map is dropped and never appear in the
/// `Debug` representation.
#[derive(Default)]
pub struct SecretMap {
    entries: HashMap<String, Zeroizing<String>>,
}

impl std::fmt::Debug for SecretMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("SecretMap").field("names", &names).finish()
    }
}

impl SecretMap {
    /// Load a secret store from a file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::SecretsUnreadable` if the file cannot be read;
    /// malformed lines inside a readable file are skipped.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| StoreError::SecretsUnreadable {
                path: path.to_path_buf(),
                source,
            })?;
        let map = Self::parse(&contents);
        debug!(path = %path.display(), entries = map.len(), "loaded secret store");
        Ok(map)
    }

    /// Parse secret store contents. Duplicate keys resolve last-wins.
    pub fn parse(contents: &str) -> Self {
        let mut entries = HashMap::new();

        for (idx, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                debug!(line = idx + 1, "skipping line without '='");
                continue;
            };

            let key = key.trim();
            if !is_identifier(key) {
                debug!(line = idx + 1, "skipping line with invalid key");
                continue;
            }

            let value = unquote(value.trim());
            entries.insert(key.to_string(), Zeroizing::new(value.to_string()));
        }

        Self { entries }
    }

    /// Look up a secret value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(|v| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Strip at most one matching pair of surrounding double quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Valid env-style variable name: A-Z, a-z, 0-9, underscore; no leading
/// digit; non-empty.
fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
