// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, JsonDisplay, ProvError};

/// First interface version carrying `ipv4ProvisioningMode` and
/// `ipv6ProvisioningMode` in the stable representation.
pub const VERSION_ADDED_PROVISIONING_MODE: u32 = 12;
/// Interface version produced by this library.
pub const CURRENT_INTERFACE_VERSION: u32 = 12;

/// Description of the historical stable representation contracts, supplied
/// by whoever owns the IPC boundary.
///
/// Example YAML:
/// ```yaml
/// ---
/// provisioning-mode-since: 12
/// current-version: 12
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonDisplay,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct WireContract {
    /// Interface versions older than this only carry the legacy
    /// `enableIPv4` and `enableIPv6` flags.
    #[serde(default = "default_provisioning_mode_since")]
    pub provisioning_mode_since: u32,
    /// Interface version to claim when producing a stable representation.
    #[serde(default = "default_current_version")]
    pub current_version: u32,
}

fn default_provisioning_mode_since() -> u32 {
    VERSION_ADDED_PROVISIONING_MODE
}

fn default_current_version() -> u32 {
    CURRENT_INTERFACE_VERSION
}

impl Default for WireContract {
    fn default() -> Self {
        Self {
            provisioning_mode_since: VERSION_ADDED_PROVISIONING_MODE,
            current_version: CURRENT_INTERFACE_VERSION,
        }
    }
}

impl WireContract {
    pub fn new(provisioning_mode_since: u32, current_version: u32) -> Self {
        Self {
            provisioning_mode_since,
            current_version,
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, ProvError> {
        let contract: Self = serde_yaml::from_str(content).map_err(|e| {
            ProvError::new(
                ErrorKind::InvalidWireContract,
                format!("Invalid wire contract: {e}"),
            )
        })?;
        contract.validate()?;
        Ok(contract)
    }

    pub fn from_file(path: &str) -> Result<Self, ProvError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ProvError::new(
                ErrorKind::InvalidArgument,
                format!("Failed to read wire contract file {path}: {e}"),
            )
        })?;
        Self::from_yaml(&content)
    }

    pub fn validate(&self) -> Result<(), ProvError> {
        if self.provisioning_mode_since > self.current_version {
            Err(ProvError::new(
                ErrorKind::InvalidWireContract,
                format!(
                    "provisioning-mode-since {} is newer than \
                     current-version {}",
                    self.provisioning_mode_since, self.current_version
                ),
            ))
        } else {
            Ok(())
        }
    }

    /// Whether stable data produced by `interface_version` carries the
    /// explicit provisioning mode codes.
    pub fn carries_provisioning_mode(&self, interface_version: u32) -> bool {
        interface_version >= self.provisioning_mode_since
    }
}
