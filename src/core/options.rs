//! Resolution options
//!
//! Global build flags are passed to the resolver explicitly through
//! [`ResolveOptions`] instead of being read from process-wide state.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::core::system::Board;
use crate::core::template::TemplateParams;

/// How the built image boots
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum BootMode {
    /// grub, full kernel and dracut initrd tooling
    #[default]
    Legacy,
    /// systemd-boot with a minimal signed kernel
    TrustedBoot,
}

impl BootMode {
    pub const fn from_trusted_boot(trusted_boot: bool) -> Self {
        if trusted_boot {
            Self::TrustedBoot
        } else {
            Self::Legacy
        }
    }
}

/// Options for a single resolution call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// Selects the kernel and bootloader catalogs
    pub boot_mode: BootMode,
    /// Adds the board support catalog when set
    pub board: Option<Board>,
    /// Expand `{{.key}}` placeholders with these parameters; `None` returns
    /// entries verbatim
    pub params: Option<TemplateParams>,
}

impl ResolveOptions {
    pub fn new(boot_mode: BootMode) -> Self {
        Self {
            boot_mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    #[must_use]
    pub fn with_params(mut self, params: TemplateParams) -> Self {
        self.params = Some(params);
        self
    }
}
