//! Test support utilities for stencil integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// No process-global state is mutated — child processes use
/// `.current_dir()` so tests can safely run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment seeded with the standard fixture files:
    /// `seed.py` (populated), `seed.redacted.py`, `secrets.env`, and
    /// `id_deploy`.
    pub fn with_fixtures() -> Self {
        let t = Self::new();
        t.write("seed.py", fixtures::POPULATED_TEMPLATE);
        t.write("seed.redacted.py", fixtures::REDACTED_TEMPLATE);
        t.write("secrets.env", fixtures::SECRETS_ENV);
        t.write("id_deploy", fixtures::DEPLOY_KEY);
        t
    }

    /// Write a file into the test directory, returning its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("failed to create parent dir");
        }
        std::fs::write(&path, content).expect("failed to write fixture file");
        path
    }

    /// Read a file from the test directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("failed to read file")
    }

    /// Absolute path of a file in the test directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}
