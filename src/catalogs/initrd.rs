//! Packages needed to build the initrd with dracut

use crate::core::catalog::{ArchAxis, Catalog, CatalogKind, Rule, Section};
use crate::core::system::{Distro, Family};

pub static INITRD_TOOLING: Catalog = Catalog {
    kind: CatalogKind::InitrdTooling,
    sections: &[
        Section::family(
            Family::Debian,
            ArchAxis::Any,
            &[Rule::always(&[
                "dracut",
                "dracut-network",
                "isc-dhcp-common",
                "isc-dhcp-client",
                "cloud-guest-utils",
            ])],
        ),
        Section::distro(
            Distro::Ubuntu,
            ArchAxis::Any,
            // livenet support moved to its own package in jammy
            &[Rule::when(">=22.04", &["dracut-live"])],
        ),
        Section::distro(Distro::Debian, ArchAxis::Any, &[Rule::always(&["dracut-live"])]),
        Section::family(
            Family::RedHat,
            ArchAxis::Any,
            &[Rule::always(&[
                "dracut",
                "dracut-live",
                "dracut-network",
                "dracut-squash",
                "squashfs-tools",
                "dhcp-client",
            ])],
        ),
        Section::family(
            Family::Suse,
            ArchAxis::Any,
            &[Rule::always(&["dracut", "squashfs", "dhcp-client"])],
        ),
    ],
};
