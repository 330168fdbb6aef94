// SPDX-License-Identifier: Apache-2.0

use crate::{
    ApfCapabilities, DhcpOption, HostnameSetting, InitialConfiguration,
    Ipv4ProvisioningMode, Ipv6ProvisioningMode, Layer2Information, Network,
    ProvisioningConfiguration, ProvisioningConfigurationParcelable,
    ScanResultInfo, StableParcelable, StaticIpConfiguration, WireContract,
    mode_enables_ipv4, mode_enables_ipv6,
};

impl ProvisioningConfiguration {
    pub fn to_stable_parcelable(&self) -> ProvisioningConfigurationParcelable {
        ProvisioningConfigurationParcelable {
            enable_ipv4: mode_enables_ipv4(self.ipv4_provisioning_mode),
            enable_ipv6: mode_enables_ipv6(self.ipv6_provisioning_mode),
            using_multinetwork_policy_tracker: self
                .using_multinetwork_policy_tracker,
            using_ip_reachability_monitor: self.using_ip_reachability_monitor,
            requested_pre_dhcp_action_ms: self.requested_pre_dhcp_action_ms,
            initial_config: self
                .initial_config
                .as_ref()
                .map(StableParcelable::to_stable_parcelable),
            static_ip_config: self
                .static_ip_config
                .as_ref()
                .map(StableParcelable::to_stable_parcelable),
            apf_capabilities: self
                .apf_capabilities
                .as_ref()
                .map(StableParcelable::to_stable_parcelable),
            provisioning_timeout_ms: self.provisioning_timeout_ms,
            ipv6_addr_gen_mode: self.ipv6_addr_gen_mode,
            network: self
                .network
                .as_ref()
                .map(StableParcelable::to_stable_parcelable),
            display_name: self.display_name.clone(),
            enable_preconnection: self.enable_preconnection,
            scan_result_info: self
                .scan_result_info
                .as_ref()
                .map(StableParcelable::to_stable_parcelable),
            layer2_info: self
                .layer2_info
                .as_ref()
                .map(StableParcelable::to_stable_parcelable),
            dhcp_options: self.dhcp_options.as_ref().map(|opts| {
                opts.iter()
                    .map(StableParcelable::to_stable_parcelable)
                    .collect()
            }),
            ipv4_provisioning_mode: self.ipv4_provisioning_mode.code(),
            ipv6_provisioning_mode: self.ipv6_provisioning_mode.code(),
            unique_eui64_addresses_only: self.unique_eui64_addresses_only,
            creator_uid: self.creator_uid,
            hostname_setting: self.hostname_setting.code(),
        }
    }

    /// Rebuild from stable data produced by `interface_version`, using
    /// [WireContract::default()] to decide which fields that version carried.
    pub fn from_stable_parcelable(
        parcel: &ProvisioningConfigurationParcelable,
        interface_version: u32,
    ) -> Self {
        Self::from_stable_parcelable_with_contract(
            parcel,
            interface_version,
            &WireContract::default(),
        )
    }

    pub fn from_stable_parcelable_with_contract(
        parcel: &ProvisioningConfigurationParcelable,
        interface_version: u32,
        contract: &WireContract,
    ) -> Self {
        Self {
            using_multinetwork_policy_tracker: parcel
                .using_multinetwork_policy_tracker,
            using_ip_reachability_monitor: parcel.using_ip_reachability_monitor,
            requested_pre_dhcp_action_ms: parcel.requested_pre_dhcp_action_ms,
            initial_config: parcel
                .initial_config
                .as_ref()
                .map(InitialConfiguration::from_stable_parcelable),
            static_ip_config: parcel
                .static_ip_config
                .as_ref()
                .map(StaticIpConfiguration::from_stable_parcelable),
            apf_capabilities: parcel
                .apf_capabilities
                .as_ref()
                .map(ApfCapabilities::from_stable_parcelable),
            provisioning_timeout_ms: parcel.provisioning_timeout_ms,
            ipv6_addr_gen_mode: parcel.ipv6_addr_gen_mode,
            network: parcel
                .network
                .as_ref()
                .map(Network::from_stable_parcelable),
            display_name: parcel.display_name.clone(),
            enable_preconnection: parcel.enable_preconnection,
            scan_result_info: parcel
                .scan_result_info
                .as_ref()
                .map(ScanResultInfo::from_stable_parcelable),
            layer2_info: parcel
                .layer2_info
                .as_ref()
                .map(Layer2Information::from_stable_parcelable),
            dhcp_options: parcel.dhcp_options.as_ref().map(|opts| {
                opts.iter()
                    .map(DhcpOption::from_stable_parcelable)
                    .collect()
            }),
            ipv4_provisioning_mode: decode_ipv4_provisioning_mode(
                parcel,
                interface_version,
                contract,
            ),
            ipv6_provisioning_mode: decode_ipv6_provisioning_mode(
                parcel,
                interface_version,
                contract,
            ),
            unique_eui64_addresses_only: parcel.unique_eui64_addresses_only,
            creator_uid: parcel.creator_uid,
            hostname_setting: HostnameSetting::from(parcel.hostname_setting),
        }
    }
}

/// IPv4 provisioning mode carried by stable data of `interface_version`.
///
/// Versions predating the explicit mode only have `enableIPv4`, which maps
/// to [Ipv4ProvisioningMode::Dhcp]: static provisioning cannot be expressed
/// there.
pub fn decode_ipv4_provisioning_mode(
    parcel: &ProvisioningConfigurationParcelable,
    interface_version: u32,
    contract: &WireContract,
) -> Ipv4ProvisioningMode {
    if contract.carries_provisioning_mode(interface_version) {
        let mode = Ipv4ProvisioningMode::from(parcel.ipv4_provisioning_mode);
        if let Ipv4ProvisioningMode::Unknown(code) = mode {
            log::warn!(
                "Carrying unknown IPv4 provisioning mode {code} from \
                 interface version {interface_version}"
            );
        }
        mode
    } else {
        log::debug!(
            "Interface version {interface_version} predates explicit IPv4 \
             provisioning mode, deriving from enableIPv4 {}",
            parcel.enable_ipv4
        );
        if parcel.enable_ipv4 {
            Ipv4ProvisioningMode::Dhcp
        } else {
            Ipv4ProvisioningMode::Disabled
        }
    }
}

/// IPv6 provisioning mode carried by stable data of `interface_version`.
///
/// Versions predating the explicit mode only have `enableIPv6`, which maps
/// to [Ipv6ProvisioningMode::Slaac]: link-local only provisioning cannot be
/// expressed there.
pub fn decode_ipv6_provisioning_mode(
    parcel: &ProvisioningConfigurationParcelable,
    interface_version: u32,
    contract: &WireContract,
) -> Ipv6ProvisioningMode {
    if contract.carries_provisioning_mode(interface_version) {
        let mode = Ipv6ProvisioningMode::from(parcel.ipv6_provisioning_mode);
        if let Ipv6ProvisioningMode::Unknown(code) = mode {
            log::warn!(
                "Carrying unknown IPv6 provisioning mode {code} from \
                 interface version {interface_version}"
            );
        }
        mode
    } else {
        log::debug!(
            "Interface version {interface_version} predates explicit IPv6 \
             provisioning mode, deriving from enableIPv6 {}",
            parcel.enable_ipv6
        );
        if parcel.enable_ipv6 {
            Ipv6ProvisioningMode::Slaac
        } else {
            Ipv6ProvisioningMode::Disabled
        }
    }
}
