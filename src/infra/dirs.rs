//! Platform-specific directory management
//!
//! Locates the configuration directory following the XDG Base Directory
//! Specification on Linux and standard locations on macOS.
//!
//! `PKGSET_CONFIG_DIR` overrides the default directory.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the config directory
pub const ENV_CONFIG_DIR: &str = "PKGSET_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "pkgset";

/// Settings file name inside the config directory
const CONFIG_FILE: &str = "config.toml";

/// Platform-specific directory provider for pkgset
#[derive(Debug, Clone)]
pub struct PkgsetDirs {
    config_dir: PathBuf,
}

impl PkgsetDirs {
    /// Create a new `PkgsetDirs` instance
    ///
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/pkgset` or `~/.config/pkgset`
    /// - macOS: `~/Library/Application Support/pkgset`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the settings file path
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for PkgsetDirs {
    fn default() -> Self {
        Self::new()
    }
}
