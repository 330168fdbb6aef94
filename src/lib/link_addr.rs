// SPDX-License-Identifier: Apache-2.0

use std::{
    net::{IpAddr, Ipv4Addr, Ipv6Addr},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{ErrorKind, ProvError};

const IPV4_ADDR_LEN: u8 = 32;
const IPV6_ADDR_LEN: u8 = 128;

/// IP address with the prefix length of the subnet it is assigned to.
///
/// Serialize and deserialize to/from string like `192.0.2.1/24`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct LinkAddress {
    address: IpAddr,
    prefix_length: u8,
}

impl LinkAddress {
    pub fn new(address: IpAddr, prefix_length: u8) -> Result<Self, ProvError> {
        check_prefix_length(&address, prefix_length)?;
        Ok(Self {
            address,
            prefix_length,
        })
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn is_ipv4(&self) -> bool {
        self.address.is_ipv4()
    }

    pub fn is_ipv6(&self) -> bool {
        self.address.is_ipv6()
    }
}

impl std::fmt::Display for LinkAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

impl FromStr for LinkAddress {
    type Err = ProvError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (address, prefix_length) = split_ip_and_prefix(value)?;
        Self::new(address, prefix_length)
    }
}

impl From<LinkAddress> for String {
    fn from(v: LinkAddress) -> Self {
        v.to_string()
    }
}

impl TryFrom<String> for LinkAddress {
    type Error = ProvError;

    fn try_from(value: String) -> Result<Self, ProvError> {
        Self::from_str(value.as_str())
    }
}

/// IP network: address with host bits cleared plus prefix length.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct IpPrefix {
    address: IpAddr,
    prefix_length: u8,
}

impl IpPrefix {
    /// Host bits of `address` are cleared.
    pub fn new(address: IpAddr, prefix_length: u8) -> Result<Self, ProvError> {
        check_prefix_length(&address, prefix_length)?;
        Ok(Self {
            address: mask_address(address, prefix_length),
            prefix_length,
        })
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn contains(&self, ip: &IpAddr) -> bool {
        ip.is_ipv4() == self.address.is_ipv4()
            && mask_address(*ip, self.prefix_length) == self.address
    }

    /// `::/0`
    pub fn is_ipv6_default_route(&self) -> bool {
        self.address.is_ipv6() && self.prefix_length == 0
    }
}

impl std::fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.address, self.prefix_length)
    }
}

impl FromStr for IpPrefix {
    type Err = ProvError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (address, prefix_length) = split_ip_and_prefix(value)?;
        Self::new(address, prefix_length)
    }
}

impl From<IpPrefix> for String {
    fn from(v: IpPrefix) -> Self {
        v.to_string()
    }
}

impl TryFrom<String> for IpPrefix {
    type Error = ProvError;

    fn try_from(value: String) -> Result<Self, ProvError> {
        Self::from_str(value.as_str())
    }
}

fn split_ip_and_prefix(value: &str) -> Result<(IpAddr, u8), ProvError> {
    let Some((ip, prefix)) = value.split_once('/') else {
        return Err(ProvError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid address {value}, expecting format like ip/prefix"),
        ));
    };
    let ip = IpAddr::from_str(ip)?;
    let prefix_length = prefix.parse::<u8>().map_err(|e| {
        ProvError::new(
            ErrorKind::InvalidArgument,
            format!("Invalid prefix length {prefix} in {value}: {e}"),
        )
    })?;
    Ok((ip, prefix_length))
}

fn check_prefix_length(
    ip: &IpAddr,
    prefix_length: u8,
) -> Result<(), ProvError> {
    let max = if ip.is_ipv4() {
        IPV4_ADDR_LEN
    } else {
        IPV6_ADDR_LEN
    };
    if prefix_length > max {
        Err(ProvError::new(
            ErrorKind::InvalidArgument,
            format!(
                "Invalid network prefix length '{prefix_length}' for {ip}, \
                 should be in the range of 0 to {max}"
            ),
        ))
    } else {
        Ok(())
    }
}

fn mask_address(ip: IpAddr, prefix_length: u8) -> IpAddr {
    match ip {
        IpAddr::V4(ip) => {
            let mask = u32::MAX
                .checked_shl((IPV4_ADDR_LEN - prefix_length) as u32)
                .unwrap_or(0);
            IpAddr::V4(Ipv4Addr::from(u32::from(ip) & mask))
        }
        IpAddr::V6(ip) => {
            let mask = u128::MAX
                .checked_shl((IPV6_ADDR_LEN - prefix_length) as u32)
                .unwrap_or(0);
            IpAddr::V6(Ipv6Addr::from(u128::from(ip) & mask))
        }
    }
}
