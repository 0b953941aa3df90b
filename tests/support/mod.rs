//! Test support utilities for cardvault integration tests.
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

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary project dir and home dir.
/// Child processes use `.current_dir()` so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new environment with no configuration.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create an environment with `.cardvault.toml` in the project dir.
    pub fn configured() -> Self {
        Self::with_config(SAMPLE_CONFIG)
    }

    /// Create an environment with the given `.cardvault.toml` contents.
    pub fn with_config(contents: &str) -> Self {
        let t = Self::new();
        std::fs::write(t.config_path(), contents).expect("failed to write config");
        t
    }

    /// Path of the project config file.
    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".cardvault.toml")
    }
}
