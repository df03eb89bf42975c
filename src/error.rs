//! Error types for pkgset
//!
//! Domain-specific error types using thiserror.

use thiserror::Error;

/// Version and constraint parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// System version could not be parsed
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    /// Version constraint could not be parsed
    #[error("Invalid version constraint '{constraint}': {reason}")]
    InvalidConstraint { constraint: String, reason: String },
}

/// Package name template errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Malformed placeholder syntax
    #[error("Invalid template '{template}': {reason}")]
    Syntax { template: String, reason: String },

    /// Placeholder references a key that was not supplied
    #[error("Template '{template}' references missing parameter '{key}'")]
    MissingKey { template: String, key: String },
}

/// Package set resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The target system version is not a valid version
    #[error("Cannot resolve packages for {target}: {source}")]
    Version {
        target: String,
        #[source]
        source: VersionError,
    },

    /// A package entry failed to expand
    #[error("Failed to expand package entry: {0}")]
    Template(#[from] TemplateError),
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: String, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: String, error: String },
}

/// Errors parsing target descriptors from user input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TargetError {
    /// Unknown distro, family, architecture or board name
    #[error("Unknown {kind} '{value}'. Expected one of: {}", expected.join(", "))]
    Unknown {
        kind: &'static str,
        value: String,
        expected: Vec<String>,
    },

    /// Malformed `key=value` template parameter
    #[error("Invalid template parameter '{0}': expected key=value")]
    InvalidParam(String),
}
