//! Built-in package catalogs
//!
//! # Submodules
//!
//! - [`common`] - Packages shared by every target
//! - [`base`] - Base system packages
//! - [`kernel`] - Kernel packages, legacy and trusted boot
//! - [`boot`] - grub and systemd-boot packages
//! - [`initrd`] - initrd build tooling
//! - [`board`] - Board support packages

pub mod base;
pub mod board;
pub mod boot;
pub mod common;
pub mod initrd;
pub mod kernel;

use crate::core::catalog::{Catalog, CatalogKind};
use crate::core::options::BootMode;

/// The fixed set of catalogs a resolution draws from
#[derive(Debug, Clone, Copy)]
pub struct CatalogSet {
    pub common: &'static [&'static str],
    pub base: &'static Catalog,
    pub kernel: &'static Catalog,
    pub kernel_trusted_boot: &'static Catalog,
    pub bootloader_grub: &'static Catalog,
    pub boot_manager_systemd: &'static Catalog,
    pub initrd_tooling: &'static Catalog,
    pub board_support: &'static Catalog,
}

static BUILTIN: CatalogSet = CatalogSet {
    common: common::COMMON,
    base: &base::BASE,
    kernel: &kernel::KERNEL,
    kernel_trusted_boot: &kernel::KERNEL_TRUSTED_BOOT,
    bootloader_grub: &boot::BOOTLOADER_GRUB,
    boot_manager_systemd: &boot::BOOT_MANAGER_SYSTEMD,
    initrd_tooling: &initrd::INITRD_TOOLING,
    board_support: &board::BOARD_SUPPORT,
};

/// The catalogs compiled into this crate
pub fn builtin() -> &'static CatalogSet {
    &BUILTIN
}

impl CatalogSet {
    /// Catalogs consulted after the common list, in output order
    pub fn select(&self, boot_mode: BootMode, with_board: bool) -> Vec<&'static Catalog> {
        let mut selected = vec![self.base];
        match boot_mode {
            BootMode::TrustedBoot => {
                selected.push(self.kernel_trusted_boot);
                selected.push(self.boot_manager_systemd);
            }
            BootMode::Legacy => {
                selected.push(self.kernel);
                selected.push(self.bootloader_grub);
                selected.push(self.initrd_tooling);
            }
        }
        if with_board {
            selected.push(self.board_support);
        }
        selected
    }

    /// Every lookup catalog, excluding the common list
    pub fn catalogs(&self) -> [&'static Catalog; 7] {
        [
            self.base,
            self.kernel,
            self.kernel_trusted_boot,
            self.bootloader_grub,
            self.boot_manager_systemd,
            self.initrd_tooling,
            self.board_support,
        ]
    }

    /// Look up a catalog by kind; `None` for [`CatalogKind::Common`]
    pub fn get(&self, kind: CatalogKind) -> Option<&'static Catalog> {
        self.catalogs().into_iter().find(|c| c.kind == kind)
    }
}
