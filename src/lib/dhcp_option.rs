// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    StableParcelable,
    parcelable::{fmt_bytes, fmt_opt},
};

/// Vendor class identifier
pub const DHCP_VENDOR_CLASS_ID: u8 = 60;
/// User class
pub const DHCP_USER_CLASS: u8 = 77;

/// Customized DHCP option the client should put into its requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
#[non_exhaustive]
pub struct DhcpOption {
    #[serde(rename = "type")]
    pub option_type: u8,
    /// `None` means only request this option from server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Vec<u8>>,
}

impl DhcpOption {
    pub fn new(option_type: u8, value: Option<Vec<u8>>) -> Self {
        Self { option_type, value }
    }
}

impl std::fmt::Display for DhcpOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DhcpOption{{type: {}, value: {}}}",
            self.option_type,
            fmt_opt(self.value.as_deref().map(fmt_bytes).as_ref()),
        )
    }
}

impl StableParcelable for DhcpOption {
    type Parcel = Self;

    fn to_stable_parcelable(&self) -> Self {
        self.clone()
    }

    fn from_stable_parcelable(parcel: &Self) -> Self {
        parcel.clone()
    }
}
