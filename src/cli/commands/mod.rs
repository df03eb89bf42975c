//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod resolve;
pub mod targets;

use anyhow::Result;
use clap::Subcommand;

use crate::core::settings::Settings;
use crate::core::system::{parse_target, Architecture, Board, Distro, Family};
use crate::error::TargetError;

use super::output::OutputFormat;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve the package list for a target system
    Resolve(ResolveArgs),

    /// List supported distros, families, architectures and boards
    Targets,
}

/// Arguments of `pkgset resolve`
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Target distribution
    #[arg(short, long, value_parser = |s: &str| parse_target::<Distro>("distro", s))]
    pub distro: Distro,

    /// Target CPU architecture
    #[arg(short, long, value_parser = |s: &str| parse_target::<Architecture>("architecture", s))]
    pub arch: Architecture,

    /// Target distribution release, e.g. 24.04
    #[arg(short = 'r', long = "os-version", value_name = "VERSION")]
    pub os_version: String,

    /// Override the family derived from the distro
    #[arg(long, value_parser = |s: &str| parse_target::<Family>("family", s))]
    pub family: Option<Family>,

    /// Resolve for a trusted boot image
    #[arg(long, conflicts_with = "legacy")]
    pub trusted_boot: bool,

    /// Resolve for a legacy (grub) image, overriding the settings file
    #[arg(long)]
    pub legacy: bool,

    /// Add support packages for a board model
    #[arg(short, long, value_parser = |s: &str| parse_target::<Board>("board", s))]
    pub board: Option<Board>,

    /// Expand {{.key}} placeholders in package names
    #[arg(long)]
    pub expand: bool,

    /// Leave placeholders as written, overriding the settings file
    #[arg(long, conflicts_with_all = ["expand", "params"])]
    pub no_expand: bool,

    /// Template parameter (implies --expand)
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Do not seed template parameters from the target system
    #[arg(long)]
    pub no_derive: bool,

    /// Group the output by catalog
    #[arg(short, long)]
    pub group: bool,
}

/// Parse a `key=value` template parameter
pub fn parse_param(s: &str) -> Result<(String, String), TargetError> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(TargetError::InvalidParam(s.to_string())),
    }
}

impl Commands {
    /// Execute the command
    pub fn run(self, settings: &Settings, format: OutputFormat) -> Result<()> {
        match self {
            Self::Resolve(args) => resolve::execute(&args, settings, format),
            Self::Targets => targets::execute(format),
        }
    }
}
