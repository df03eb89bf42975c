//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::core::settings::Settings;
use crate::infra::dirs::PkgsetDirs;
use commands::Commands;
use output::OutputFormat;

/// pkgset - Resolve OS packages for an image build target
///
/// Computes the ordered package list for a distro, architecture and release
/// from the built-in catalogs.
#[derive(Parser, Debug)]
#[command(name = "pkgset")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (defaults to config.toml in the config directory)
    #[arg(long, global = true, env = "PKGSET_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Load the settings file selected by `--config` or the config directory
    pub fn load_settings(&self) -> Result<Settings> {
        let settings = match &self.config {
            Some(path) => Settings::load_from_path(path)?,
            None => Settings::load(&PkgsetDirs::new())?,
        };
        Ok(settings)
    }

    /// Log filter directive: `-v` flags win over the settings file
    pub fn log_level<'a>(&self, settings: &'a Settings) -> &'a str {
        match self.verbose {
            0 => settings.log_level(),
            1 => "info",
            _ => "debug",
        }
    }

    /// Execute the CLI command
    pub fn run(self, settings: &Settings) -> Result<()> {
        let format = OutputFormat::from_json_flag(self.json);
        if let Some(cmd) = self.command {
            cmd.run(settings, format)
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
