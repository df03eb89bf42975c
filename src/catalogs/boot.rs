//! Bootloader packages
//!
//! Legacy images boot through grub with shim for secure boot. Trusted boot
//! images boot through systemd-boot and carry nothing from the grub table.

use crate::core::catalog::{ArchAxis, Catalog, CatalogKind, Rule, Section};
use crate::core::system::{Architecture, Distro, Family};

const AMD64: ArchAxis = ArchAxis::Only(Architecture::Amd64);
const ARM64: ArchAxis = ArchAxis::Only(Architecture::Arm64);

pub static BOOTLOADER_GRUB: Catalog = Catalog {
    kind: CatalogKind::BootloaderGrub,
    sections: &[
        Section::family(
            Family::Debian,
            ArchAxis::Any,
            &[Rule::always(&["kbd", "lldpd", "shim-signed", "snmpd", "squashfs-tools"])],
        ),
        Section::family(
            Family::Debian,
            AMD64,
            &[Rule::always(&[
                "grub2",
                "grub-efi-amd64-bin",
                "grub-efi-amd64-signed",
                "grub-pc-bin",
                "grub2-common",
            ])],
        ),
        Section::family(
            Family::Debian,
            ARM64,
            &[Rule::always(&["grub-efi-arm64", "grub-efi-arm64-bin", "grub-efi-arm64-signed"])],
        ),
        Section::family(Family::RedHat, ArchAxis::Any, &[Rule::always(&["grub2"])]),
        Section::family(
            Family::RedHat,
            AMD64,
            &[Rule::always(&["grub2-efi-x64", "grub2-efi-x64-modules", "grub2-pc", "shim-x64"])],
        ),
        Section::family(
            Family::RedHat,
            ARM64,
            &[Rule::always(&["grub2-efi-aa64", "grub2-efi-aa64-modules", "shim-aa64"])],
        ),
        Section::family(Family::Alpine, ArchAxis::Any, &[Rule::always(&["grub", "grub-efi"])]),
        Section::family(Family::Alpine, AMD64, &[Rule::always(&["grub-bios"])]),
        Section::family(
            Family::Suse,
            ArchAxis::Any,
            &[Rule::always(&["nethogs", "patch", "shim", "iw"])],
        ),
        Section::family(
            Family::Suse,
            AMD64,
            &[Rule::always(&["grub2-i386-pc", "grub2-x86_64-efi", "kernel-firmware-all"])],
        ),
        Section::family(
            Family::Suse,
            ARM64,
            &[Rule::always(&[
                "bcm43xx-firmware",
                "grub2-arm64-efi",
                "kernel-firmware-ath10k",
                "kernel-firmware-ath11k",
                "kernel-firmware-atheros",
                "kernel-firmware-bluetooth",
                "kernel-firmware-brcm",
                "kernel-firmware-iwlwifi",
                "kernel-firmware-network",
                "kernel-firmware-realtek",
                "kernel-firmware-serial",
                "kernel-firmware-usb-network",
            ])],
        ),
        // Kept out of trusted boot images to keep them small
        Section::distro(Distro::Ubuntu, ArchAxis::Any, &[Rule::always(&["zfsutils-linux"])]),
    ],
};

pub static BOOT_MANAGER_SYSTEMD: Catalog = Catalog {
    kind: CatalogKind::BootManagerSystemd,
    sections: &[Section::distro(
        Distro::Ubuntu,
        ArchAxis::Any,
        &[
            Rule::always(&["systemd"]),
            // systemd-boot became its own package in noble
            Rule::when(">=24.04", &["iucode-tool", "kmod", "linux-base", "systemd-boot"]),
        ],
    )],
};
