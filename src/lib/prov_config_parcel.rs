// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    ApfCapabilities, DhcpOption, ErrorKind, InitialConfigurationParcelable,
    Layer2InformationParcelable, Network, ProvError, ScanResultInfoParcelable,
    StaticIpConfiguration,
    parcelable::{fmt_opt, fmt_opt_list},
};

/// Stable representation of [crate::ProvisioningConfiguration] exchanged
/// across processes or persisted.
///
/// The schema only grows: fields missing from the input take their default
/// value, so data written by older producers still decodes. The legacy
/// `enableIPv4` and `enableIPv6` flags are always written next to the
/// explicit provisioning modes for consumers that predate the latter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct ProvisioningConfigurationParcelable {
    #[serde(rename = "enableIPv4")]
    pub enable_ipv4: bool,
    #[serde(rename = "enableIPv6")]
    pub enable_ipv6: bool,
    pub using_multinetwork_policy_tracker: bool,
    pub using_ip_reachability_monitor: bool,
    pub requested_pre_dhcp_action_ms: i32,
    pub initial_config: Option<InitialConfigurationParcelable>,
    pub static_ip_config: Option<StaticIpConfiguration>,
    pub apf_capabilities: Option<ApfCapabilities>,
    pub provisioning_timeout_ms: i32,
    pub ipv6_addr_gen_mode: i32,
    pub network: Option<Network>,
    pub display_name: Option<String>,
    pub enable_preconnection: bool,
    pub scan_result_info: Option<ScanResultInfoParcelable>,
    pub layer2_info: Option<Layer2InformationParcelable>,
    #[serde(rename = "options")]
    pub dhcp_options: Option<Vec<DhcpOption>>,
    pub ipv4_provisioning_mode: i32,
    pub ipv6_provisioning_mode: i32,
    pub unique_eui64_addresses_only: bool,
    pub creator_uid: i32,
    pub hostname_setting: i32,
}

impl ProvisioningConfigurationParcelable {
    pub fn to_json(&self) -> Result<String, ProvError> {
        serde_json::to_string(self).map_err(|e| {
            ProvError::new(
                ErrorKind::Bug,
                format!("Failed to generate JSON string for {self:?}: {e}"),
            )
        })
    }

    pub fn from_json(content: &str) -> Result<Self, ProvError> {
        Ok(serde_json::from_str(content)?)
    }
}

impl std::fmt::Display for ProvisioningConfigurationParcelable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProvisioningConfigurationParcelable{{\
             enableIPv4: {}, \
             enableIPv6: {}, \
             usingMultinetworkPolicyTracker: {}, \
             usingIpReachabilityMonitor: {}, \
             requestedPreDhcpActionMs: {}, \
             initialConfig: {}, \
             staticIpConfig: {}, \
             apfCapabilities: {}, \
             provisioningTimeoutMs: {}, \
             ipv6AddrGenMode: {}, \
             network: {}, \
             displayName: {}, \
             enablePreconnection: {}, \
             scanResultInfo: {}, \
             layer2Info: {}, \
             options: {}, \
             ipv4ProvisioningMode: {}, \
             ipv6ProvisioningMode: {}, \
             uniqueEui64AddressesOnly: {}, \
             creatorUid: {}, \
             hostnameSetting: {}}}",
            self.enable_ipv4,
            self.enable_ipv6,
            self.using_multinetwork_policy_tracker,
            self.using_ip_reachability_monitor,
            self.requested_pre_dhcp_action_ms,
            fmt_opt(self.initial_config.as_ref()),
            fmt_opt(self.static_ip_config.as_ref()),
            fmt_opt(self.apf_capabilities.as_ref()),
            self.provisioning_timeout_ms,
            self.ipv6_addr_gen_mode,
            fmt_opt(self.network.as_ref()),
            fmt_opt(self.display_name.as_ref()),
            self.enable_preconnection,
            fmt_opt(self.scan_result_info.as_ref()),
            fmt_opt(self.layer2_info.as_ref()),
            fmt_opt_list(self.dhcp_options.as_deref()),
            self.ipv4_provisioning_mode,
            self.ipv6_provisioning_mode,
            self.unique_eui64_addresses_only,
            self.creator_uid,
            self.hostname_setting,
        )
    }
}
