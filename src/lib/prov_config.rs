// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    ApfCapabilities, DhcpOption, ErrorKind, FieldCount, HostnameSetting,
    InitialConfiguration, Ipv4ProvisioningMode, Ipv6ProvisioningMode,
    Layer2Information, Network, ProvError, ScanResultInfo,
    StableParcelable, StaticIpConfiguration,
    parcelable::{fmt_opt, fmt_opt_list},
};

/// How a network interface should be provisioned.
///
/// Every field takes part in equality and in the conversion to and from
/// [crate::ProvisioningConfigurationParcelable].
///
/// `Clone` is deep: no nested collection is shared between the clone and
/// the original. Sharing an instance across threads is fine as long as
/// nobody holds it mutably, which the borrow checker already guarantees.
///
/// Example YAML:
/// ```yaml
/// ---
/// using-multinetwork-policy-tracker: true
/// provisioning-timeout-ms: 18000
/// display-name: wlan0
/// layer2-info:
///   l2-key: some l2key
///   cluster: some cluster
///   bssid: 00:01:02:03:04:05
/// dhcp-options:
///   - type: 60
///     value: [97, 110, 100]
/// ipv4-provisioning-mode: dhcp
/// ipv6-provisioning-mode: slaac
/// hostname-setting: send
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, FieldCount)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
#[non_exhaustive]
pub struct ProvisioningConfiguration {
    pub using_multinetwork_policy_tracker: bool,
    pub using_ip_reachability_monitor: bool,
    /// How long to wait for the pre-DHCP action to complete, 0 means no
    /// pre-DHCP action.
    pub requested_pre_dhcp_action_ms: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_config: Option<InitialConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_ip_config: Option<StaticIpConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apf_capabilities: Option<ApfCapabilities>,
    pub provisioning_timeout_ms: i32,
    /// IPv6 address generation mode code passed to the kernel as is.
    pub ipv6_addr_gen_mode: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<Network>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub enable_preconnection: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_result_info: Option<ScanResultInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layer2_info: Option<Layer2Information>,
    /// `None` means no customized option, which is not the same as
    /// `Some(Vec::new())`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_options: Option<Vec<DhcpOption>>,
    pub ipv4_provisioning_mode: Ipv4ProvisioningMode,
    pub ipv6_provisioning_mode: Ipv6ProvisioningMode,
    pub unique_eui64_addresses_only: bool,
    pub creator_uid: i32,
    pub hostname_setting: HostnameSetting,
}

// Destructuring without `..` keeps this from compiling when a field is added
// but not compared.
impl PartialEq for ProvisioningConfiguration {
    fn eq(&self, other: &Self) -> bool {
        let Self {
            using_multinetwork_policy_tracker,
            using_ip_reachability_monitor,
            requested_pre_dhcp_action_ms,
            initial_config,
            static_ip_config,
            apf_capabilities,
            provisioning_timeout_ms,
            ipv6_addr_gen_mode,
            network,
            display_name,
            enable_preconnection,
            scan_result_info,
            layer2_info,
            dhcp_options,
            ipv4_provisioning_mode,
            ipv6_provisioning_mode,
            unique_eui64_addresses_only,
            creator_uid,
            hostname_setting,
        } = self;

        *using_multinetwork_policy_tracker
            == other.using_multinetwork_policy_tracker
            && *using_ip_reachability_monitor
                == other.using_ip_reachability_monitor
            && *requested_pre_dhcp_action_ms
                == other.requested_pre_dhcp_action_ms
            && *initial_config == other.initial_config
            && *static_ip_config == other.static_ip_config
            && *apf_capabilities == other.apf_capabilities
            && *provisioning_timeout_ms == other.provisioning_timeout_ms
            && *ipv6_addr_gen_mode == other.ipv6_addr_gen_mode
            && *network == other.network
            && *display_name == other.display_name
            && *enable_preconnection == other.enable_preconnection
            && *scan_result_info == other.scan_result_info
            && *layer2_info == other.layer2_info
            && *dhcp_options == other.dhcp_options
            && *ipv4_provisioning_mode == other.ipv4_provisioning_mode
            && *ipv6_provisioning_mode == other.ipv6_provisioning_mode
            && *unique_eui64_addresses_only
                == other.unique_eui64_addresses_only
            && *creator_uid == other.creator_uid
            && *hostname_setting == other.hostname_setting
    }
}

impl Eq for ProvisioningConfiguration {}

impl ProvisioningConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn validate(&self) -> Result<(), ProvError> {
        if let Some(initial_config) = self.initial_config.as_ref() {
            initial_config.validate()?;
        }
        Ok(())
    }

    pub fn from_yaml(content: &str) -> Result<Self, ProvError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String, ProvError> {
        serde_yaml::to_string(self).map_err(|e| {
            ProvError::new(
                ErrorKind::Bug,
                format!("Failed to generate YAML for {self:?}: {e}"),
            )
        })
    }
}

impl std::fmt::Display for ProvisioningConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ProvisioningConfiguration{{\
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
             dhcpOptions: {}, \
             ipv4ProvisioningMode: {}, \
             ipv6ProvisioningMode: {}, \
             uniqueEui64AddressesOnly: {}, \
             creatorUid: {}, \
             hostnameSetting: {}}}",
            self.using_multinetwork_policy_tracker,
            self.using_ip_reachability_monitor,
            self.requested_pre_dhcp_action_ms,
            fmt_opt(
                self.initial_config
                    .as_ref()
                    .map(|c| c.to_stable_parcelable())
                    .as_ref()
            ),
            fmt_opt(self.static_ip_config.as_ref()),
            fmt_opt(self.apf_capabilities.as_ref()),
            self.provisioning_timeout_ms,
            self.ipv6_addr_gen_mode,
            fmt_opt(self.network.as_ref()),
            fmt_opt(self.display_name.as_ref()),
            self.enable_preconnection,
            fmt_opt(
                self.scan_result_info
                    .as_ref()
                    .map(|s| s.to_stable_parcelable())
                    .as_ref()
            ),
            fmt_opt(
                self.layer2_info
                    .as_ref()
                    .map(|l| l.to_stable_parcelable())
                    .as_ref()
            ),
            fmt_opt_list(self.dhcp_options.as_deref()),
            self.ipv4_provisioning_mode,
            self.ipv6_provisioning_mode,
            self.unique_eui64_addresses_only,
            self.creator_uid,
            self.hostname_setting,
        )
    }
}
