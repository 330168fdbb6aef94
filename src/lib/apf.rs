// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::StableParcelable;

const APF_VERSION_WITH_DATA_ACCESS: i32 = 4;

/// Android Packet Filter support reported by the network driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct ApfCapabilities {
    /// Version of the packet filter interpreter, 0 means not supported.
    pub apf_version_supported: i32,
    /// Maximum size of the filter program in bytes.
    pub maximum_apf_program_size: i32,
    /// Link layer header type the filter program expects, e.g. ARPHRD_ETHER.
    pub apf_packet_format: i32,
}

impl ApfCapabilities {
    pub fn new(
        apf_version_supported: i32,
        maximum_apf_program_size: i32,
        apf_packet_format: i32,
    ) -> Self {
        Self {
            apf_version_supported,
            maximum_apf_program_size,
            apf_packet_format,
        }
    }

    pub fn has_data_access(&self) -> bool {
        self.apf_version_supported >= APF_VERSION_WITH_DATA_ACCESS
    }
}

impl std::fmt::Display for ApfCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ApfCapabilities{{version: {}, maxSize: {}, format: {}}}",
            self.apf_version_supported,
            self.maximum_apf_program_size,
            self.apf_packet_format
        )
    }
}

impl StableParcelable for ApfCapabilities {
    type Parcel = Self;

    fn to_stable_parcelable(&self) -> Self {
        *self
    }

    fn from_stable_parcelable(parcel: &Self) -> Self {
        *parcel
    }
}
