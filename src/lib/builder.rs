// SPDX-License-Identifier: Apache-2.0

use crate::{
    ApfCapabilities, DhcpOption, ErrorKind, HostnameSetting,
    InitialConfiguration, Ipv4ProvisioningMode, Ipv6ProvisioningMode,
    Layer2Information, Network, ProvError, ProvisioningConfiguration,
    ScanResultInfo, StaticIpConfiguration,
};

pub const DEFAULT_PROVISIONING_TIMEOUT_MS: i32 = 18_000;
pub const DEFAULT_REQUESTED_PRE_DHCP_ACTION_MS: i32 = 36_000;

pub const IPV6_ADDR_GEN_MODE_EUI64: i32 = 0;
pub const IPV6_ADDR_GEN_MODE_STABLE_PRIVACY: i32 = 2;

/// Build [ProvisioningConfiguration] starting from what a normal client
/// wants: DHCPv4, SLAAC, stable privacy IPv6 addresses and both trackers
/// enabled.
///
/// ```
/// use ipprov::{Ipv4ProvisioningMode, ProvisioningConfigurationBuilder};
///
/// let config = ProvisioningConfigurationBuilder::new()
///     .without_ipv6()
///     .with_display_name("wlan0")
///     .build()
///     .unwrap();
/// assert_eq!(config.ipv4_provisioning_mode, Ipv4ProvisioningMode::Dhcp);
/// ```
#[derive(Debug, Clone)]
pub struct ProvisioningConfigurationBuilder {
    config: ProvisioningConfiguration,
}

impl Default for ProvisioningConfigurationBuilder {
    fn default() -> Self {
        Self {
            config: ProvisioningConfiguration {
                using_multinetwork_policy_tracker: true,
                using_ip_reachability_monitor: true,
                provisioning_timeout_ms: DEFAULT_PROVISIONING_TIMEOUT_MS,
                ipv6_addr_gen_mode: IPV6_ADDR_GEN_MODE_STABLE_PRIVACY,
                ipv4_provisioning_mode: Ipv4ProvisioningMode::Dhcp,
                ipv6_provisioning_mode: Ipv6ProvisioningMode::Slaac,
                ..Default::default()
            },
        }
    }
}

impl ProvisioningConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_ipv4(mut self) -> Self {
        self.config.ipv4_provisioning_mode = Ipv4ProvisioningMode::Disabled;
        self
    }

    pub fn without_ipv6(mut self) -> Self {
        self.config.ipv6_provisioning_mode = Ipv6ProvisioningMode::Disabled;
        self
    }

    pub fn with_static_configuration(
        mut self,
        static_config: StaticIpConfiguration,
    ) -> Self {
        self.config.ipv4_provisioning_mode = Ipv4ProvisioningMode::Static;
        self.config.static_ip_config = Some(static_config);
        self
    }

    /// Requires IPv4 to be disabled, checked by [Self::build()].
    pub fn with_ipv6_link_local_only(mut self) -> Self {
        self.config.ipv6_provisioning_mode = Ipv6ProvisioningMode::LinkLocal;
        self
    }

    /// `None` means [DEFAULT_REQUESTED_PRE_DHCP_ACTION_MS].
    pub fn with_pre_dhcp_action(mut self, timeout_ms: Option<i32>) -> Self {
        self.config.requested_pre_dhcp_action_ms =
            timeout_ms.unwrap_or(DEFAULT_REQUESTED_PRE_DHCP_ACTION_MS);
        self
    }

    pub fn with_pre_connection(mut self) -> Self {
        self.config.enable_preconnection = true;
        self
    }

    pub fn with_initial_configuration(
        mut self,
        initial_config: InitialConfiguration,
    ) -> Self {
        self.config.initial_config = Some(initial_config);
        self
    }

    pub fn with_apf_capabilities(mut self, apf: ApfCapabilities) -> Self {
        self.config.apf_capabilities = Some(apf);
        self
    }

    pub fn with_provisioning_timeout_ms(mut self, timeout_ms: i32) -> Self {
        self.config.provisioning_timeout_ms = timeout_ms;
        self
    }

    pub fn with_random_mac_address(mut self) -> Self {
        self.config.ipv6_addr_gen_mode = IPV6_ADDR_GEN_MODE_EUI64;
        self
    }

    pub fn with_stable_mac_address(mut self) -> Self {
        self.config.ipv6_addr_gen_mode = IPV6_ADDR_GEN_MODE_STABLE_PRIVACY;
        self
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.config.network = Some(network);
        self
    }

    pub fn with_display_name(mut self, display_name: &str) -> Self {
        self.config.display_name = Some(display_name.to_string());
        self
    }

    pub fn with_scan_result_info(mut self, info: ScanResultInfo) -> Self {
        self.config.scan_result_info = Some(info);
        self
    }

    pub fn with_layer2_information(mut self, info: Layer2Information) -> Self {
        self.config.layer2_info = Some(info);
        self
    }

    pub fn with_dhcp_options(mut self, options: Vec<DhcpOption>) -> Self {
        self.config.dhcp_options = Some(options);
        self
    }

    pub fn without_ip_reachability_monitor(mut self) -> Self {
        self.config.using_ip_reachability_monitor = false;
        self
    }

    pub fn without_multinetwork_policy_tracker(mut self) -> Self {
        self.config.using_multinetwork_policy_tracker = false;
        self
    }

    pub fn with_unique_eui64_addresses_only(mut self) -> Self {
        self.config.unique_eui64_addresses_only = true;
        self
    }

    pub fn with_creator_uid(mut self, uid: i32) -> Self {
        self.config.creator_uid = uid;
        self
    }

    pub fn with_hostname_setting(mut self, setting: HostnameSetting) -> Self {
        self.config.hostname_setting = setting;
        self
    }

    pub fn build(self) -> Result<ProvisioningConfiguration, ProvError> {
        if self.config.ipv6_provisioning_mode == Ipv6ProvisioningMode::LinkLocal
            && self.config.ipv4_provisioning_mode
                != Ipv4ProvisioningMode::Disabled
        {
            return Err(ProvError::new(
                ErrorKind::InvalidConfiguration,
                format!(
                    "IPv4 must be disabled in IPv6 link-local only mode, \
                     got IPv4 provisioning mode {}",
                    self.config.ipv4_provisioning_mode
                ),
            ));
        }
        Ok(self.config)
    }
}
