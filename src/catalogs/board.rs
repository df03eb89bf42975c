//! Board support packages
//!
//! Rules here are gated on the board model instead of the OS version.

use crate::core::catalog::{ArchAxis, Catalog, CatalogKind, Rule, Section};
use crate::core::system::{Architecture, Board, Distro, Family};

const RPI_SUSE: &[&str] = &[
    "raspberrypi-eeprom",
    "raspberrypi-firmware",
    "raspberrypi-firmware-dt",
    "sysconfig",
    "sysconfig-netconfig",
    "sysvinit-tools",
    "wireless-tools",
    "wpa_supplicant",
];

pub static BOARD_SUPPORT: Catalog = Catalog {
    kind: CatalogKind::BoardSupport,
    sections: &[
        // Needs the non-free-firmware component enabled in the apt sources
        Section::distro(
            Distro::Debian,
            ArchAxis::Only(Architecture::Arm64),
            &[Rule::board(Board::Rpi4, &["raspi-firmware"])],
        ),
        Section::distro(
            Distro::Arch,
            ArchAxis::Only(Architecture::Arm64),
            &[
                Rule::board(Board::Rpi3, &["linux-rpi"]),
                Rule::board(Board::Rpi4, &["linux-rpi4"]),
            ],
        ),
        Section::family(
            Family::Suse,
            ArchAxis::Only(Architecture::Arm64),
            &[Rule::board(Board::Rpi3, RPI_SUSE), Rule::board(Board::Rpi4, RPI_SUSE)],
        ),
    ],
};
