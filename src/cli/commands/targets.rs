//! Targets command implementation
//!
//! Implements `pkgset targets`, listing the values accepted by `resolve`.

use anyhow::Result;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::cli::output::OutputFormat;
use crate::core::system::{Architecture, Board, Distro, Family};

#[derive(Debug, Serialize)]
struct DistroEntry {
    distro: Distro,
    family: Family,
}

#[derive(Debug, Serialize)]
struct Targets {
    distros: Vec<DistroEntry>,
    architectures: Vec<Architecture>,
    boards: Vec<Board>,
}

fn targets() -> Targets {
    Targets {
        distros: Distro::iter()
            .map(|distro| DistroEntry {
                distro,
                family: distro.family(),
            })
            .collect(),
        architectures: Architecture::iter().collect(),
        boards: Board::iter().collect(),
    }
}

/// Execute the targets command
pub fn execute(format: OutputFormat) -> Result<()> {
    let targets = targets();

    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&targets)?);
        return Ok(());
    }

    println!("Distros:");
    for entry in &targets.distros {
        println!("  {:<22} {}", entry.distro, entry.family);
    }
    println!();
    println!(
        "Architectures: {}",
        targets
            .architectures
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!(
        "Boards: {}",
        targets
            .boards
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
