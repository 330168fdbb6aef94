// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

use crate::{ErrorKind, ProvError};

pub const MAC_ADDR_LEN: usize = 6;

/// Ethernet hardware address, displayed as lower case hex separated by `:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddress {
    bytes: [u8; MAC_ADDR_LEN],
}

impl MacAddress {
    pub fn new(bytes: [u8; MAC_ADDR_LEN]) -> Self {
        Self { bytes }
    }

    pub fn from_bytes(src: &[u8]) -> Result<Self, ProvError> {
        let bytes: [u8; MAC_ADDR_LEN] = src.try_into().map_err(|_| {
            ProvError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Invalid length of MAC address: {} vs {MAC_ADDR_LEN}",
                    src.len()
                ),
            )
        })?;
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl FromStr for MacAddress {
    type Err = ProvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            ProvError::new(
                ErrorKind::InvalidArgument,
                format!(
                    "Invalid MAC address {s}, expecting format like \
                     00:01:02:03:04:05"
                ),
            )
        };
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != MAC_ADDR_LEN {
            return Err(invalid());
        }
        let mut bytes = [0u8; MAC_ADDR_LEN];
        for (byte, part) in bytes.iter_mut().zip(parts) {
            if part.len() != 2 {
                return Err(invalid());
            }
            *byte = u8::from_str_radix(part, 16).map_err(|_| invalid())?;
        }
        Ok(Self { bytes })
    }
}

impl std::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let b = &self.bytes;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl Serialize for MacAddress {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for MacAddress {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(D::Error::custom)
    }
}
