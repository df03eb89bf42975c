//! Output formatting
//!
//! Package names go to stdout, one per line or as JSON. Diagnostics and
//! errors go to stderr so the output can be piped straight into a package
//! manager.

use anyhow::Result;

use crate::core::resolver::CatalogPackages;

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Json,
}

impl OutputFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Plain
        }
    }
}

/// Status message prefixes
pub mod status {
    /// Error prefix (red X)
    pub const ERROR: &str = "✗";
}

/// Render a flat package list
pub fn render_packages(packages: &[String], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => packages.join("\n"),
        OutputFormat::Json => serde_json::to_string_pretty(packages)?,
    })
}

/// Render packages grouped by catalog
pub fn render_groups(groups: &[CatalogPackages], format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Plain => groups
            .iter()
            .filter(|g| !g.packages.is_empty())
            .map(|g| format!("# {}\n{}", g.catalog, g.packages.join("\n")))
            .collect::<Vec<_>>()
            .join("\n\n"),
        OutputFormat::Json => serde_json::to_string_pretty(groups)?,
    })
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} Error: {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
