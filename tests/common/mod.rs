//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

use pkgset::core::options::ResolveOptions;
use pkgset::core::system::{Architecture, Distro, System};

/// Isolated config directory for CLI runs
///
/// Every run of the binary points `PKGSET_CONFIG_DIR` here so the user's
/// own settings never leak into a test.
pub struct TestEnv {
    /// Temporary config directory
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new empty config directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the config directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Write `config.toml` into the config directory
    pub fn write_config(&self, content: &str) {
        self.create_file("config.toml", content);
    }

    /// Create a file in the config directory
    pub fn create_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run the pkgset binary with `args`
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_pkgset"))
            .env("PKGSET_CONFIG_DIR", self.path())
            .env_remove("PKGSET_CONFIG")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .expect("Failed to execute pkgset")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Stdout of a run as text
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a run as text
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Shorthand for a system descriptor
pub fn system(distro: Distro, arch: Architecture, version: &str) -> System {
    System::new(distro, arch, version)
}

/// Resolve against the built-in catalogs
pub fn resolve_builtin(system: &System, options: &ResolveOptions) -> Vec<String> {
    pkgset::core::resolver::resolve(system, options, pkgset::catalogs::builtin())
        .expect("resolution should succeed")
}

/// Sample settings enabling trusted boot and expansion
pub const SAMPLE_SETTINGS: &str = r#"
[build]
trusted_boot = true

[log]
level = "warn"

[templates]
expand = true

[templates.params]
flavor = "generic"
"#;
