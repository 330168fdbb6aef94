// SPDX-License-Identifier: Apache-2.0

use std::net::IpAddr;

use serde::{Deserialize, Serialize};

use crate::{
    ErrorKind, IpPrefix, LinkAddress, ProvError, StableParcelable,
    parcelable::fmt_list,
};

const IPV6_PREFIX_LENGTH_FOR_SLAAC: u8 = 64;

/// Addresses, routes and DNS servers to configure on the link before any
/// dynamic provisioning happens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
#[non_exhaustive]
pub struct InitialConfiguration {
    pub ip_addresses: Vec<LinkAddress>,
    pub directly_connected_routes: Vec<IpPrefix>,
    pub dns_servers: Vec<IpAddr>,
}

impl InitialConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// * At least one IP address.
    /// * No IPv6 default route among the directly connected routes.
    /// * Every IP address and DNS server is reachable through one of the
    ///   directly connected routes.
    /// * IPv6 addresses use /64.
    /// * No more than one IPv4 address.
    pub fn validate(&self) -> Result<(), ProvError> {
        if self.ip_addresses.is_empty() {
            return Err(invalid("no IP address defined".to_string()));
        }
        if let Some(route) = self
            .directly_connected_routes
            .iter()
            .find(|r| r.is_ipv6_default_route())
        {
            return Err(invalid(format!(
                "IPv6 default route {route} cannot be directly connected"
            )));
        }
        for addr in self.ip_addresses.iter() {
            if !self.is_directly_connected(&addr.address()) {
                return Err(invalid(format!(
                    "IP address {addr} is not covered by any directly \
                     connected route"
                )));
            }
        }
        for dns in self.dns_servers.iter() {
            if !self.is_directly_connected(dns) {
                return Err(invalid(format!(
                    "DNS server {dns} is not covered by any directly \
                     connected route"
                )));
            }
        }
        if let Some(addr) = self.ip_addresses.iter().find(|a| {
            a.is_ipv6() && a.prefix_length() != IPV6_PREFIX_LENGTH_FOR_SLAAC
        }) {
            return Err(invalid(format!(
                "IPv6 address {addr} should use prefix length \
                 {IPV6_PREFIX_LENGTH_FOR_SLAAC}"
            )));
        }
        if self.ip_addresses.iter().filter(|a| a.is_ipv4()).count() > 1 {
            return Err(invalid(
                "more than one IPv4 address defined".to_string(),
            ));
        }
        Ok(())
    }

    fn is_directly_connected(&self, ip: &IpAddr) -> bool {
        self.directly_connected_routes.iter().any(|r| r.contains(ip))
    }
}

fn invalid(msg: String) -> ProvError {
    ProvError::new(
        ErrorKind::InvalidConfiguration,
        format!("Invalid initial configuration: {msg}"),
    )
}

/// Stable form of [InitialConfiguration].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct InitialConfigurationParcelable {
    pub ip_addresses: Vec<LinkAddress>,
    pub directly_connected_routes: Vec<IpPrefix>,
    pub dns_servers: Vec<IpAddr>,
}

impl std::fmt::Display for InitialConfigurationParcelable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InitialConfigurationParcelable{{ipAddresses: {}, \
             directlyConnectedRoutes: {}, dnsServers: {}}}",
            fmt_list(&self.ip_addresses),
            fmt_list(&self.directly_connected_routes),
            fmt_list(&self.dns_servers),
        )
    }
}

impl StableParcelable for InitialConfiguration {
    type Parcel = InitialConfigurationParcelable;

    fn to_stable_parcelable(&self) -> InitialConfigurationParcelable {
        InitialConfigurationParcelable {
            ip_addresses: self.ip_addresses.clone(),
            directly_connected_routes: self.directly_connected_routes.clone(),
            dns_servers: self.dns_servers.clone(),
        }
    }

    fn from_stable_parcelable(parcel: &InitialConfigurationParcelable) -> Self {
        Self {
            ip_addresses: parcel.ip_addresses.clone(),
            directly_connected_routes: parcel.directly_connected_routes.clone(),
            dns_servers: parcel.dns_servers.clone(),
        }
    }
}
