// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, ProvError};

pub const PROV_IPV4_DISABLED: i32 = 0x00;
pub const PROV_IPV4_STATIC: i32 = 0x01;
pub const PROV_IPV4_DHCP: i32 = 0x02;

pub const PROV_IPV6_DISABLED: i32 = 0x00;
pub const PROV_IPV6_SLAAC: i32 = 0x01;
pub const PROV_IPV6_LINKLOCAL: i32 = 0x02;

pub const HOSTNAME_SETTING_UNSET: i32 = 0x00;
pub const HOSTNAME_SETTING_SEND: i32 = 0x01;
pub const HOSTNAME_SETTING_DO_NOT_SEND: i32 = 0x02;

const UNKNOWN_PREFIX: &str = "unknown:";

/// A wire code outside the known range of its mode family.
///
/// Only the `From<i32>` conversion of the owning enum creates it, so a known
/// code never ends up in an `Unknown` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnknownCode(i32);

impl UnknownCode {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for UnknownCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How IPv4 is provisioned on the link.
///
/// Codes this library does not know are kept in [Self::Unknown] so they can
/// travel through a conversion unchanged. Use `From<i32>` to build it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub enum Ipv4ProvisioningMode {
    #[default]
    Disabled,
    Static,
    Dhcp,
    Unknown(UnknownCode),
}

impl Ipv4ProvisioningMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Static => "static",
            Self::Dhcp => "dhcp",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Disabled => PROV_IPV4_DISABLED,
            Self::Static => PROV_IPV4_STATIC,
            Self::Dhcp => PROV_IPV4_DHCP,
            Self::Unknown(c) => c.value(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Static | Self::Dhcp)
    }
}

impl From<i32> for Ipv4ProvisioningMode {
    fn from(code: i32) -> Self {
        match code {
            PROV_IPV4_DISABLED => Self::Disabled,
            PROV_IPV4_STATIC => Self::Static,
            PROV_IPV4_DHCP => Self::Dhcp,
            c => Self::Unknown(UnknownCode(c)),
        }
    }
}

impl From<Ipv4ProvisioningMode> for i32 {
    fn from(v: Ipv4ProvisioningMode) -> Self {
        v.code()
    }
}

impl std::fmt::Display for Ipv4ProvisioningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Ipv4ProvisioningMode> for String {
    fn from(v: Ipv4ProvisioningMode) -> Self {
        match v {
            Ipv4ProvisioningMode::Unknown(c) => format!("{UNKNOWN_PREFIX}{c}"),
            v => v.as_str().to_string(),
        }
    }
}

impl TryFrom<String> for Ipv4ProvisioningMode {
    type Error = ProvError;

    fn try_from(value: String) -> Result<Self, ProvError> {
        match value.as_str() {
            "disabled" => Ok(Self::Disabled),
            "static" => Ok(Self::Static),
            "dhcp" => Ok(Self::Dhcp),
            v => parse_unknown_code(v).map(Self::from).ok_or_else(|| {
                ProvError::new(
                    ErrorKind::InvalidArgument,
                    format!(
                        "Invalid IPv4 provisioning mode {v}, valid values \
                         are disabled, static, dhcp, `unknown:<code>`"
                    ),
                )
            }),
        }
    }
}

/// How IPv6 is provisioned on the link.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub enum Ipv6ProvisioningMode {
    #[default]
    Disabled,
    Slaac,
    /// Only the IPv6 link-local address is configured.
    LinkLocal,
    Unknown(UnknownCode),
}

impl Ipv6ProvisioningMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Slaac => "slaac",
            Self::LinkLocal => "link-local",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Disabled => PROV_IPV6_DISABLED,
            Self::Slaac => PROV_IPV6_SLAAC,
            Self::LinkLocal => PROV_IPV6_LINKLOCAL,
            Self::Unknown(c) => c.value(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Slaac | Self::LinkLocal)
    }
}

impl From<i32> for Ipv6ProvisioningMode {
    fn from(code: i32) -> Self {
        match code {
            PROV_IPV6_DISABLED => Self::Disabled,
            PROV_IPV6_SLAAC => Self::Slaac,
            PROV_IPV6_LINKLOCAL => Self::LinkLocal,
            c => Self::Unknown(UnknownCode(c)),
        }
    }
}

impl From<Ipv6ProvisioningMode> for i32 {
    fn from(v: Ipv6ProvisioningMode) -> Self {
        v.code()
    }
}

impl std::fmt::Display for Ipv6ProvisioningMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Ipv6ProvisioningMode> for String {
    fn from(v: Ipv6ProvisioningMode) -> Self {
        match v {
            Ipv6ProvisioningMode::Unknown(c) => format!("{UNKNOWN_PREFIX}{c}"),
            v => v.as_str().to_string(),
        }
    }
}

impl TryFrom<String> for Ipv6ProvisioningMode {
    type Error = ProvError;

    fn try_from(value: String) -> Result<Self, ProvError> {
        match value.as_str() {
            "disabled" => Ok(Self::Disabled),
            "slaac" => Ok(Self::Slaac),
            "link-local" => Ok(Self::LinkLocal),
            v => parse_unknown_code(v).map(Self::from).ok_or_else(|| {
                ProvError::new(
                    ErrorKind::InvalidArgument,
                    format!(
                        "Invalid IPv6 provisioning mode {v}, valid values \
                         are disabled, slaac, link-local, `unknown:<code>`"
                    ),
                )
            }),
        }
    }
}

/// Whether the DHCP client should send the device hostname.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
#[non_exhaustive]
pub enum HostnameSetting {
    /// Follow the system wide setting.
    #[default]
    Unset,
    DoNotSend,
    Send,
    Unknown(UnknownCode),
}

impl HostnameSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unset => "unset",
            Self::DoNotSend => "do-not-send",
            Self::Send => "send",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn code(&self) -> i32 {
        match self {
            Self::Unset => HOSTNAME_SETTING_UNSET,
            Self::DoNotSend => HOSTNAME_SETTING_DO_NOT_SEND,
            Self::Send => HOSTNAME_SETTING_SEND,
            Self::Unknown(c) => c.value(),
        }
    }
}

impl From<i32> for HostnameSetting {
    fn from(code: i32) -> Self {
        match code {
            HOSTNAME_SETTING_UNSET => Self::Unset,
            HOSTNAME_SETTING_DO_NOT_SEND => Self::DoNotSend,
            HOSTNAME_SETTING_SEND => Self::Send,
            c => Self::Unknown(UnknownCode(c)),
        }
    }
}

impl std::fmt::Display for HostnameSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<HostnameSetting> for String {
    fn from(v: HostnameSetting) -> Self {
        match v {
            HostnameSetting::Unknown(c) => format!("{UNKNOWN_PREFIX}{c}"),
            v => v.as_str().to_string(),
        }
    }
}

impl TryFrom<String> for HostnameSetting {
    type Error = ProvError;

    fn try_from(value: String) -> Result<Self, ProvError> {
        match value.as_str() {
            "unset" => Ok(Self::Unset),
            "do-not-send" => Ok(Self::DoNotSend),
            "send" => Ok(Self::Send),
            v => parse_unknown_code(v).map(Self::from).ok_or_else(|| {
                ProvError::new(
                    ErrorKind::InvalidArgument,
                    format!(
                        "Invalid hostname setting {v}, valid values are \
                         unset, do-not-send, send, `unknown:<code>`"
                    ),
                )
            }),
        }
    }
}

fn parse_unknown_code(value: &str) -> Option<i32> {
    value
        .strip_prefix(UNKNOWN_PREFIX)
        .and_then(|c| c.parse::<i32>().ok())
}

/// Name of an IPv4 provisioning mode code, `unknown` for codes out of range.
pub fn ipv4_provisioning_mode_to_string(mode: i32) -> &'static str {
    Ipv4ProvisioningMode::from(mode).as_str()
}

/// Name of an IPv6 provisioning mode code, `unknown` for codes out of range.
pub fn ipv6_provisioning_mode_to_string(mode: i32) -> &'static str {
    Ipv6ProvisioningMode::from(mode).as_str()
}

/// Value of the legacy `enableIPv4` flag for this mode.
pub fn mode_enables_ipv4(mode: Ipv4ProvisioningMode) -> bool {
    mode.is_enabled()
}

/// Value of the legacy `enableIPv6` flag for this mode.
pub fn mode_enables_ipv6(mode: Ipv6ProvisioningMode) -> bool {
    mode.is_enabled()
}
