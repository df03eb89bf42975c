//! Target system model
//!
//! Closed enumerations for the axes a package catalog is keyed on, the
//! distro to family table, and the [`System`] descriptor handed to the
//! resolver.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::TargetError;

/// Operating system distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Distro {
    Ubuntu,
    Debian,
    Fedora,
    #[strum(to_string = "rockylinux", serialize = "rocky")]
    #[serde(alias = "rocky")]
    RockyLinux,
    #[strum(to_string = "almalinux", serialize = "alma")]
    #[serde(alias = "alma")]
    AlmaLinux,
    #[strum(serialize = "rhel")]
    #[serde(rename = "rhel")]
    RedHat,
    #[strum(serialize = "opensuse-leap")]
    #[serde(rename = "opensuse-leap")]
    OpenSuseLeap,
    #[strum(serialize = "opensuse-tumbleweed")]
    #[serde(rename = "opensuse-tumbleweed")]
    OpenSuseTumbleweed,
    Sles,
    Alpine,
    Arch,
}

impl Distro {
    /// Family this distro belongs to.
    ///
    /// This is the only place a family is derived from a distro. The
    /// resolver never does it implicitly; it reads [`System::family`].
    pub const fn family(self) -> Family {
        match self {
            Self::Ubuntu | Self::Debian => Family::Debian,
            Self::Fedora | Self::RockyLinux | Self::AlmaLinux | Self::RedHat => Family::RedHat,
            Self::OpenSuseLeap | Self::OpenSuseTumbleweed | Self::Sles => Family::Suse,
            Self::Alpine => Family::Alpine,
            Self::Arch => Family::Arch,
        }
    }
}

/// Group of distributions sharing a package ecosystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Family {
    #[strum(serialize = "debian-family")]
    #[serde(rename = "debian-family")]
    Debian,
    #[strum(serialize = "redhat-family")]
    #[serde(rename = "redhat-family")]
    RedHat,
    #[strum(serialize = "suse-family")]
    #[serde(rename = "suse-family")]
    Suse,
    #[strum(serialize = "alpine-family")]
    #[serde(rename = "alpine-family")]
    Alpine,
    #[strum(serialize = "arch-family")]
    #[serde(rename = "arch-family")]
    Arch,
}

/// CPU architecture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Architecture {
    #[strum(to_string = "amd64", serialize = "x86_64")]
    #[serde(rename = "amd64", alias = "x86_64")]
    Amd64,
    #[strum(to_string = "arm64", serialize = "aarch64")]
    #[serde(rename = "arm64", alias = "aarch64")]
    Arm64,
}

/// Board model with dedicated support packages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Board {
    Rpi3,
    Rpi4,
}

/// Parse one of the closed target enums, listing the valid names on failure
pub fn parse_target<T>(kind: &'static str, value: &str) -> Result<T, TargetError>
where
    T: FromStr + IntoEnumIterator + fmt::Display,
{
    value.trim().parse().map_err(|_| TargetError::Unknown {
        kind,
        value: value.to_string(),
        expected: T::iter().map(|v| v.to_string()).collect(),
    })
}

/// Descriptor of the system a package set is resolved for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    /// Distribution
    pub distro: Distro,
    /// Distribution family, queried independently of the distro
    pub family: Family,
    /// CPU architecture
    pub arch: Architecture,
    /// Distribution release, e.g. `24.04`
    pub version: String,
}

impl System {
    /// Create a descriptor, taking the family from [`Distro::family`]
    pub fn new(distro: Distro, arch: Architecture, version: impl Into<String>) -> Self {
        Self {
            distro,
            family: distro.family(),
            arch,
            version: version.into(),
        }
    }

    /// Override the family reported by the detection layer
    #[must_use]
    pub fn with_family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, {})",
            self.distro, self.version, self.family, self.arch
        )
    }
}
