//! Settings file
//!
//! Reads defaults for the global build flags from `config.toml` in the
//! config directory. Every value is optional and command-line flags take
//! precedence. Example:
//!
//! ```toml
//! [build]
//! trusted_boot = false
//! board = "rpi4"
//!
//! [log]
//! level = "debug"
//!
//! [templates]
//! expand = true
//! derive = true
//!
//! [templates.params]
//! version = "24.04"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::options::BootMode;
use crate::core::system::{Board, System};
use crate::core::template::{self, TemplateParams};
use crate::error::SettingsError;
use crate::infra::dirs::PkgsetDirs;

/// Settings for pkgset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Global build flags
    #[serde(default)]
    pub build: BuildSettings,

    /// Logging
    #[serde(default)]
    pub log: LogSettings,

    /// Package name template expansion
    #[serde(default)]
    pub templates: TemplateSettings,
}

/// Global build flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Build trusted boot images
    pub trusted_boot: Option<bool>,

    /// Board model to add support packages for
    pub board: Option<Board>,
}

/// Logging settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default log level or filter directive
    pub level: Option<String>,
}

/// Template settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSettings {
    /// Expand placeholders in resolved names
    pub expand: Option<bool>,

    /// Seed parameters from the target system
    pub derive: Option<bool>,

    /// Explicit parameters, overriding derived ones
    #[serde(default)]
    pub params: TemplateParams,
}

impl Settings {
    /// Load settings from the config directory
    ///
    /// A missing file yields the defaults.
    pub fn load(dirs: &PkgsetDirs) -> Result<Self, SettingsError> {
        Self::load_from_path(&dirs.config_path())
    }

    /// Load settings from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.display().to_string(),
            error: e.to_string(),
        })
    }

    /// Effective boot mode
    #[must_use]
    pub fn boot_mode(&self) -> BootMode {
        BootMode::from_trusted_boot(self.build.trusted_boot.unwrap_or(false))
    }

    /// Effective log level
    #[must_use]
    pub fn log_level(&self) -> &str {
        self.log
            .level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    /// Whether resolved names should be expanded
    #[must_use]
    pub fn expand(&self) -> bool {
        self.templates.expand.unwrap_or(false)
    }

    /// Template parameters for `system`
    ///
    /// Derived parameters first (when enabled), then the explicit ones.
    #[must_use]
    pub fn template_params(&self, system: &System) -> TemplateParams {
        let mut params = if self
            .templates
            .derive
            .unwrap_or(defaults::DEFAULT_DERIVE_PARAMS)
        {
            template::derive_params(system)
        } else {
            TemplateParams::new()
        };
        params.extend(self.templates.params.clone());
        params
    }
}
