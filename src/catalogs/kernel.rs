//! Kernel packages
//!
//! Trusted boot images get their own table so the signed boot chain can be
//! kept smaller than the legacy one. Ubuntu ships no slim kernel yet, so it
//! has no trusted boot entry.

use crate::core::catalog::{ArchAxis, Catalog, CatalogKind, Rule, Section};
use crate::core::system::{Architecture, Distro, Family};

const DEBIAN_AMD64: &[Rule] = &[Rule::always(&["linux-image-amd64", "firmware-linux-free"])];
const DEBIAN_ARM64: &[Rule] = &[Rule::always(&["linux-image-arm64", "firmware-linux-free"])];
const REDHAT: &[Rule] = &[Rule::always(&["kernel", "kernel-modules", "kernel-modules-extra"])];
const ALPINE: &[Rule] = &[Rule::always(&["linux-lts"])];
const SUSE: &[Rule] = &[Rule::always(&["kernel-default"])];

pub static KERNEL: Catalog = Catalog {
    kind: CatalogKind::Kernel,
    sections: &[
        Section::distro(
            Distro::Ubuntu,
            ArchAxis::Any,
            &[
                Rule::when(">=20.04, != 24.10", &["linux-image-generic-hwe-{{.version}}"]),
                // 24.10 has no hwe kernel of its own
                Rule::when("24.10", &["linux-image-generic-hwe-24.04"]),
            ],
        ),
        Section::distro(Distro::Debian, ArchAxis::Only(Architecture::Amd64), DEBIAN_AMD64),
        Section::distro(Distro::Debian, ArchAxis::Only(Architecture::Arm64), DEBIAN_ARM64),
        Section::family(Family::RedHat, ArchAxis::Any, REDHAT),
        Section::family(Family::Alpine, ArchAxis::Any, ALPINE),
        Section::family(Family::Suse, ArchAxis::Any, SUSE),
    ],
};

pub static KERNEL_TRUSTED_BOOT: Catalog = Catalog {
    kind: CatalogKind::KernelTrustedBoot,
    sections: &[
        Section::distro(Distro::Debian, ArchAxis::Only(Architecture::Amd64), DEBIAN_AMD64),
        Section::distro(Distro::Debian, ArchAxis::Only(Architecture::Arm64), DEBIAN_ARM64),
        Section::family(Family::RedHat, ArchAxis::Any, REDHAT),
        Section::family(Family::Alpine, ArchAxis::Any, ALPINE),
        Section::family(Family::Suse, ArchAxis::Any, SUSE),
    ],
};
