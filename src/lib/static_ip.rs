// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::{
    LinkAddress, StableParcelable,
    parcelable::{fmt_list, fmt_opt},
};

/// Statically assigned IP address, gateway and DNS settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
#[non_exhaustive]
pub struct StaticIpConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<LinkAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<IpAddr>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_servers: Vec<IpAddr>,
    /// Space separated search domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<String>,
}

impl StaticIpConfiguration {
    pub fn new() -> Self {
        Self::default()
    }
}

impl std::fmt::Display for StaticIpConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "StaticIpConfiguration{{ipAddress: {}, gateway: {}, \
             dnsServers: {}, domains: {}}}",
            fmt_opt(self.ip_address.as_ref()),
            fmt_opt(self.gateway.as_ref()),
            fmt_list(&self.dns_servers),
            fmt_opt(self.domains.as_ref()),
        )
    }
}

impl StableParcelable for StaticIpConfiguration {
    type Parcel = Self;

    fn to_stable_parcelable(&self) -> Self {
        self.clone()
    }

    fn from_stable_parcelable(parcel: &Self) -> Self {
        parcel.clone()
    }
}
