//! Package catalogs
//!
//! A catalog is an immutable table keyed on three axes:
//!
//! - a [`Selector`]: either a distro or a family, never both
//! - an [`ArchAxis`]: a specific architecture or any architecture
//! - a [`Gate`]: unconditional, a version constraint, or a board model
//!
//! Each (selector, architecture) pair holds at most one [`Section`] whose
//! [`Rule`]s keep their declaration order. Catalogs are `'static` data and
//! are never mutated once built.

use std::fmt;

use serde::Serialize;
use strum::{Display, EnumIter};

use crate::core::system::{Architecture, Board, Distro, Family};
use crate::core::version::{self, Constraint, VersionError};

/// Which concern a catalog covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Common,
    Base,
    Kernel,
    KernelTrustedBoot,
    BootloaderGrub,
    BootManagerSystemd,
    InitrdTooling,
    BoardSupport,
}

/// First lookup axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Distro(Distro),
    Family(Family),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distro(d) => d.fmt(f),
            Self::Family(fam) => fam.fmt(f),
        }
    }
}

/// Second lookup axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchAxis {
    /// Applies regardless of architecture
    Any,
    Only(Architecture),
}

impl fmt::Display for ArchAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Only(arch) => arch.fmt(f),
        }
    }
}

/// Condition under which a rule's packages apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Always applies
    Always,
    /// Applies when the system version satisfies the constraint
    Version(&'static str),
    /// Applies when building for the given board
    Board(Board),
}

impl Gate {
    /// Parse the constraint of a [`Gate::Version`]
    pub fn constraint(&self) -> Option<Result<Constraint, VersionError>> {
        match self {
            Self::Version(expr) => Some(version::parse_constraint(expr)),
            Self::Always | Self::Board(_) => None,
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str(version::UNCONDITIONAL),
            Self::Version(expr) => f.write_str(expr),
            Self::Board(board) => write!(f, "board={board}"),
        }
    }
}

/// Ordered package names guarded by a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub gate: Gate,
    pub packages: &'static [&'static str],
}

impl Rule {
    pub const fn always(packages: &'static [&'static str]) -> Self {
        Self {
            gate: Gate::Always,
            packages,
        }
    }

    pub const fn when(constraint: &'static str, packages: &'static [&'static str]) -> Self {
        Self {
            gate: Gate::Version(constraint),
            packages,
        }
    }

    pub const fn board(board: Board, packages: &'static [&'static str]) -> Self {
        Self {
            gate: Gate::Board(board),
            packages,
        }
    }
}

/// All rules for one (selector, architecture) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub selector: Selector,
    pub arch: ArchAxis,
    pub rules: &'static [Rule],
}

impl Section {
    pub const fn distro(distro: Distro, arch: ArchAxis, rules: &'static [Rule]) -> Self {
        Self {
            selector: Selector::Distro(distro),
            arch,
            rules,
        }
    }

    pub const fn family(family: Family, arch: ArchAxis, rules: &'static [Rule]) -> Self {
        Self {
            selector: Selector::Family(family),
            arch,
            rules,
        }
    }
}

/// One named package table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catalog {
    pub kind: CatalogKind,
    pub sections: &'static [Section],
}

impl Catalog {
    /// Rules for a (selector, architecture) pair; empty when absent
    pub fn lookup(&self, selector: Selector, arch: ArchAxis) -> &'static [Rule] {
        self.sections
            .iter()
            .find(|s| s.selector == selector && s.arch == arch)
            .map(|s| s.rules)
            .unwrap_or_default()
    }

    /// Every rule in the catalog
    pub fn rules(&self) -> impl Iterator<Item = (&'static Section, &'static Rule)> + '_ {
        let sections: &'static [Section] = self.sections;
        sections
            .iter()
            .flat_map(|section| section.rules.iter().map(move |rule| (section, rule)))
    }

    /// Pairs that are declared by more than one section
    pub fn duplicate_sections(&self) -> Vec<(Selector, ArchAxis)> {
        let mut seen = Vec::new();
        let mut duplicates = Vec::new();
        for section in self.sections {
            let key = (section.selector, section.arch);
            if seen.contains(&key) {
                duplicates.push(key);
            } else {
                seen.push(key);
            }
        }
        duplicates
    }
}
