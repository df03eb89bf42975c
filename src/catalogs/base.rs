//! Base system packages
//!
//! Everything a booted image needs regardless of boot mode.

use crate::core::catalog::{ArchAxis, Catalog, CatalogKind, Rule, Section};
use crate::core::system::{Distro, Family};

pub static BASE: Catalog = Catalog {
    kind: CatalogKind::Base,
    sections: &[
        Section::family(
            Family::Debian,
            ArchAxis::Any,
            &[Rule::always(&[
                "ca-certificates",
                "curl",
                "binutils",
                "conntrack",
                "console-setup",
                "coreutils",
                "cryptsetup",
                "debianutils",
                "ethtool",
                "fuse3",
                "gdisk",
                "gnupg",
                "gnupg1-l10n",
                "haveged",
                "iproute2",
                "iptables",
                "iputils-ping",
                "krb5-locales",
                "libatm1",
                "libglib2.0-data",
                "libgpm2",
                "libldap-common",
                "libnss-systemd",
                "libpam-cap",
                "libsasl2-modules",
                "mdadm",
                "nbd-client",
                "ncurses-term",
                "neovim",
                "nfs-common",
                "nftables",
                "open-iscsi",
                "openssh-server",
                "open-vm-tools",
                "os-prober",
                "patch",
                "pigz",
                "pkg-config",
                "psmisc",
                "publicsuffix",
                "python3-pynvim",
                "shared-mime-info",
                "snapd",
                "systemd",
                "systemd-timesyncd",
                "systemd-sysv",
                "xauth",
                "xclip",
                "xdg-user-dirs",
                "xxd",
                "xz-utils",
                "zerofree",
            ])],
        ),
        Section::family(
            Family::Suse,
            ArchAxis::Any,
            &[Rule::always(&[
                "curl",
                "bash-completion",
                "conntrack-tools",
                "cryptsetup",
                "coreutils",
                "device-mapper",
                "fail2ban",
                "findutils",
                "growpart",
                "gptfdisk",
                "haveged",
                "htop",
                "iproute2",
                "iputils",
                "issue-generator",
                "logrotate",
                "lsscsi",
                "mdadm",
                "multipath-tools",
                "open-iscsi",
                "openssh",
                "open-vm-tools",
                "pigz",
                "policycoreutils",
                "polkit",
                "procps",
                "qemu-guest-agent",
                "strace",
                "systemd",
                "systemd-network",
                "timezone",
                "tmux",
                "vim",
                "which",
                // Shell glob, expanded by zypper
                "tpm2*",
            ])],
        ),
        Section::family(
            Family::Alpine,
            ArchAxis::Any,
            &[Rule::always(&[
                "curl",
                "bash",
                "bash-completion",
                "blkid",
                "cloud-utils-growpart",
                "bonding",
                "bridge",
                "busybox-openrc",
                "ca-certificates",
                "connman",
                "conntrack-tools",
                "coreutils",
                "cryptsetup",
                "device-mapper-udev",
                "dbus",
                "dmidecode",
                "dosfstools",
                "e2fsprogs",
                "e2fsprogs-extra",
                "efibootmgr",
                "eudev",
                "eudev-hwids",
                "fail2ban",
                "findutils",
                "findmnt",
                "gcompat",
                "gettext",
                "haveged",
                "htop",
                "hvtools",
                "iproute2",
                "irqbalance",
                "iscsi-scst",
                "kbd-bkeymaps",
                "libc6-compat",
                "libusb",
                "lm-sensors",
                "logrotate",
                "lsscsi",
                "lvm2-extra",
                "mdadm",
                "mdadm-misc",
                "mdadm-udev",
                "multipath-tools",
                "ncurses",
                "ncurses-terminfo",
                "nfs-utils",
                "open-iscsi",
                "openrc",
                "openssh-client",
                "openssh-server",
                "open-vm-tools",
                "open-vm-tools-deploypkg",
                "open-vm-tools-guestinfo",
                "open-vm-tools-static",
                "open-vm-tools-vmbackup",
                "procps",
                "qemu-guest-agent",
                "rbd-nbd",
                "sgdisk",
                "smartmontools",
                "squashfs-tools",
                "strace",
                "tzdata",
                "util-linux",
                "vim",
                "which",
                "wireguard-tools",
                "wpa_supplicant",
                "xfsprogs",
                "xfsprogs-extra",
                "xz",
            ])],
        ),
        Section::family(
            Family::RedHat,
            ArchAxis::Any,
            &[Rule::always(&[
                "gdisk",
                "audit",
                "cracklib-dicts",
                "cloud-utils-growpart",
                "device-mapper",
                "openssh-server",
                "openssh-clients",
                "polkit",
                "qemu-guest-agent",
                "systemd",
                "systemd-resolved",
                "which",
                "cryptsetup",
            ])],
        ),
        Section::distro(
            Distro::Debian,
            ArchAxis::Any,
            &[
                Rule::always(&["systemd-resolved", "nohang", "polkitd"]),
                // Split out of systemd in trixie
                Rule::when(">=13", &["systemd-cryptsetup"]),
            ],
        ),
        Section::distro(
            Distro::Ubuntu,
            ArchAxis::Any,
            &[
                Rule::always(&[
                    "fdisk",
                    "conntrack",
                    "console-data",
                    "cloud-guest-utils",
                    "gettext",
                    "systemd-container",
                    "ubuntu-advantage-tools",
                    "tpm2-tools",
                    "dmsetup",
                    "networkd-dispatcher",
                    "packagekit-tools",
                    "publicsuffix",
                    "xdg-user-dirs",
                    "zfsutils-linux",
                ]),
                Rule::when(">=24.04", &["systemd-resolved"]),
            ],
        ),
        Section::distro(
            Distro::Fedora,
            ArchAxis::Any,
            &[Rule::always(&["haveged", "systemd-networkd"])],
        ),
    ],
};
