//! Packages named the same on every distro and architecture

/// Installed for every target, ahead of any catalog lookup
pub const COMMON: &[&str] = &[
    "file",
    "gawk",
    "iptables",
    "less",
    "nano",
    "sudo",
    "tar",
    "zstd",
    "rsync",
    "lvm2",
    "jq",
    "dosfstools",
    "e2fsprogs",
    "parted",
];
