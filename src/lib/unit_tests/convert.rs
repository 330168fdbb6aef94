// SPDX-License-Identifier: Apache-2.0

use super::fixture::{make_legacy_parcel, make_test_config};
use crate::{
    CURRENT_INTERFACE_VERSION, HostnameSetting, Ipv4ProvisioningMode,
    Ipv6ProvisioningMode, PROV_IPV4_DHCP, PROV_IPV4_STATIC,
    PROV_IPV6_LINKLOCAL, PROV_IPV6_SLAAC, ProvisioningConfiguration,
    ProvisioningConfigurationParcelable, WireContract,
    decode_ipv4_provisioning_mode, decode_ipv6_provisioning_mode,
    mode_enables_ipv4, mode_enables_ipv6,
};

const LEGACY_INTERFACE_VERSION: u32 = 11;

fn do_parcel_unparcel_test(config: &ProvisioningConfiguration) {
    let unparceled = ProvisioningConfiguration::from_stable_parcelable(
        &config.to_stable_parcelable(),
        CURRENT_INTERFACE_VERSION,
    );
    assert_eq!(config, &unparceled);
}

#[test]
fn test_parcel_unparcel() {
    do_parcel_unparcel_test(&make_test_config());
}

#[test]
fn test_parcel_unparcel_null_initial_configuration() {
    let mut config = make_test_config();
    config.initial_config = None;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_null_static_configuration() {
    let mut config = make_test_config();
    config.static_ip_config = None;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_null_apf_capabilities() {
    let mut config = make_test_config();
    config.apf_capabilities = None;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_null_network() {
    let mut config = make_test_config();
    config.network = None;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_null_scan_result_info() {
    let mut config = make_test_config();
    config.scan_result_info = None;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_null_dhcp_options() {
    let mut config = make_test_config();
    config.dhcp_options = None;
    do_parcel_unparcel_test(&config);

    let parcel = config.to_stable_parcelable();
    assert!(parcel.dhcp_options.is_none());
    let unparceled = ProvisioningConfiguration::from_stable_parcelable(
        &parcel,
        CURRENT_INTERFACE_VERSION,
    );
    assert!(unparceled.dhcp_options.is_none());
}

#[test]
fn test_parcel_unparcel_empty_dhcp_options() {
    let mut config = make_test_config();
    config.dhcp_options = Some(Vec::new());
    do_parcel_unparcel_test(&config);
    assert_eq!(config.to_stable_parcelable().dhcp_options, Some(Vec::new()));
}

#[test]
fn test_parcel_unparcel_with_pre_dhcp_connection() {
    let mut config = make_test_config();
    config.enable_preconnection = true;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_disabled_ip_provisioning_mode() {
    let mut config = make_test_config();
    config.ipv4_provisioning_mode = Ipv4ProvisioningMode::Disabled;
    config.ipv6_provisioning_mode = Ipv6ProvisioningMode::Disabled;
    do_parcel_unparcel_test(&config);

    assert!(!config.to_stable_parcelable().enable_ipv4);
    assert!(!config.to_stable_parcelable().enable_ipv6);
}

#[test]
fn test_parcel_unparcel_enabled_ip_provisioning_mode() {
    let mut config = make_test_config();
    config.ipv4_provisioning_mode = Ipv4ProvisioningMode::Dhcp;
    config.ipv6_provisioning_mode = Ipv6ProvisioningMode::Slaac;
    do_parcel_unparcel_test(&config);

    assert!(config.to_stable_parcelable().enable_ipv4);
    assert!(config.to_stable_parcelable().enable_ipv6);
}

#[test]
fn test_parcel_unparcel_with_ipv6_link_local_only() {
    let mut config = make_test_config();
    config.ipv6_provisioning_mode = Ipv6ProvisioningMode::LinkLocal;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_static_ipv4() {
    let mut config = make_test_config();
    config.ipv4_provisioning_mode = Ipv4ProvisioningMode::Static;
    do_parcel_unparcel_test(&config);
}

#[test]
fn test_parcel_unparcel_unknown_mode_carried() {
    let mut config = make_test_config();
    config.ipv4_provisioning_mode = Ipv4ProvisioningMode::from(7);
    config.ipv6_provisioning_mode = Ipv6ProvisioningMode::from(9);
    do_parcel_unparcel_test(&config);

    let parcel = config.to_stable_parcelable();
    assert!(!parcel.enable_ipv4);
    assert!(!parcel.enable_ipv6);
    assert_eq!(parcel.ipv4_provisioning_mode, 7);
}

#[test]
fn test_parcel_unparcel_every_mode_code() {
    let mut config = make_test_config();
    for code in -1..=4 {
        config.ipv4_provisioning_mode = Ipv4ProvisioningMode::from(code);
        config.ipv6_provisioning_mode = Ipv6ProvisioningMode::from(code);
        config.hostname_setting = HostnameSetting::from(code);
        do_parcel_unparcel_test(&config);

        let parcel = config.to_stable_parcelable();
        assert_eq!(parcel.ipv4_provisioning_mode, code);
        assert_eq!(parcel.ipv6_provisioning_mode, code);
        assert_eq!(parcel.hostname_setting, code);
        assert_eq!(
            parcel.enable_ipv4,
            code == PROV_IPV4_STATIC || code == PROV_IPV4_DHCP
        );
        assert_eq!(
            parcel.enable_ipv6,
            code == PROV_IPV6_SLAAC || code == PROV_IPV6_LINKLOCAL
        );
    }
}

#[test]
fn test_mode_and_legacy_flag_consistent() {
    let mut config = make_test_config();
    for ipv4_mode in [
        Ipv4ProvisioningMode::Disabled,
        Ipv4ProvisioningMode::Static,
        Ipv4ProvisioningMode::Dhcp,
    ] {
        for ipv6_mode in [
            Ipv6ProvisioningMode::Disabled,
            Ipv6ProvisioningMode::Slaac,
            Ipv6ProvisioningMode::LinkLocal,
        ] {
            config.ipv4_provisioning_mode = ipv4_mode;
            config.ipv6_provisioning_mode = ipv6_mode;
            let parcel = config.to_stable_parcelable();
            assert_eq!(parcel.enable_ipv4, mode_enables_ipv4(ipv4_mode));
            assert_eq!(parcel.enable_ipv6, mode_enables_ipv6(ipv6_mode));
            assert_eq!(parcel.ipv4_provisioning_mode, ipv4_mode.code());
            assert_eq!(parcel.ipv6_provisioning_mode, ipv6_mode.code());
        }
    }
}

#[test]
fn test_ip_provisioning_mode_from_old_stable_parcelable() {
    let unparceled = ProvisioningConfiguration::from_stable_parcelable(
        &make_legacy_parcel(),
        LEGACY_INTERFACE_VERSION,
    );
    assert_eq!(unparceled, make_test_config());
}

#[test]
fn test_old_stable_parcelable_disabled_flags() {
    let mut parcel = make_legacy_parcel();
    parcel.enable_ipv4 = false;
    parcel.enable_ipv6 = false;
    let unparceled = ProvisioningConfiguration::from_stable_parcelable(
        &parcel,
        LEGACY_INTERFACE_VERSION,
    );
    assert_eq!(
        unparceled.ipv4_provisioning_mode,
        Ipv4ProvisioningMode::Disabled
    );
    assert_eq!(
        unparceled.ipv6_provisioning_mode,
        Ipv6ProvisioningMode::Disabled
    );
}

#[test]
fn test_old_version_ignores_explicit_mode() {
    let mut config = make_test_config();
    config.ipv4_provisioning_mode = Ipv4ProvisioningMode::Static;
    config.ipv6_provisioning_mode = Ipv6ProvisioningMode::LinkLocal;
    let parcel = config.to_stable_parcelable();

    // Static and link-local cannot be expressed by the legacy flags.
    let unparceled = ProvisioningConfiguration::from_stable_parcelable(
        &parcel,
        LEGACY_INTERFACE_VERSION,
    );
    assert_eq!(unparceled.ipv4_provisioning_mode, Ipv4ProvisioningMode::Dhcp);
    assert_eq!(
        unparceled.ipv6_provisioning_mode,
        Ipv6ProvisioningMode::Slaac
    );
    assert_ne!(unparceled, config);
}

#[test]
fn test_decode_mode_with_custom_contract() {
    let mut parcel = ProvisioningConfigurationParcelable::default();
    parcel.enable_ipv4 = true;
    parcel.enable_ipv6 = true;
    parcel.ipv4_provisioning_mode = PROV_IPV4_STATIC;
    parcel.ipv6_provisioning_mode = PROV_IPV6_LINKLOCAL;
    let contract = WireContract::new(20, 21);

    assert_eq!(
        decode_ipv4_provisioning_mode(&parcel, 19, &contract),
        Ipv4ProvisioningMode::Dhcp
    );
    assert_eq!(
        decode_ipv6_provisioning_mode(&parcel, 19, &contract),
        Ipv6ProvisioningMode::Slaac
    );
    assert_eq!(
        decode_ipv4_provisioning_mode(&parcel, 20, &contract),
        Ipv4ProvisioningMode::Static
    );
    assert_eq!(
        decode_ipv6_provisioning_mode(&parcel, 21, &contract),
        Ipv6ProvisioningMode::LinkLocal
    );

    let unparceled =
        ProvisioningConfiguration::from_stable_parcelable_with_contract(
            &parcel, 19, &contract,
        );
    assert_eq!(unparceled.ipv4_provisioning_mode, Ipv4ProvisioningMode::Dhcp);
}

#[test]
fn test_json_round_trip() {
    let parcel = make_test_config().to_stable_parcelable();
    let json = parcel.to_json().unwrap();
    assert!(json.contains("\"enableIPv4\":true"));
    assert!(json.contains("\"options\":"));
    assert_eq!(
        ProvisioningConfigurationParcelable::from_json(&json).unwrap(),
        parcel
    );
}

#[test]
fn test_json_null_dhcp_options() {
    let mut config = make_test_config();
    config.dhcp_options = None;
    let json = config.to_stable_parcelable().to_json().unwrap();
    assert!(json.contains("\"options\":null"));
    let parcel = ProvisioningConfigurationParcelable::from_json(&json).unwrap();
    assert!(parcel.dhcp_options.is_none());
}

#[test]
fn test_json_from_legacy_producer() {
    // Written before ipv4ProvisioningMode and ipv6ProvisioningMode existed
    let parcel = ProvisioningConfigurationParcelable::from_json(
        r#"{"enableIPv4": true, "enableIPv6": false, "creatorUid": 1000}"#,
    )
    .unwrap();
    assert_eq!(parcel.ipv4_provisioning_mode, 0);

    let config = ProvisioningConfiguration::from_stable_parcelable(
        &parcel,
        LEGACY_INTERFACE_VERSION,
    );
    assert_eq!(config.ipv4_provisioning_mode, Ipv4ProvisioningMode::Dhcp);
    assert_eq!(
        config.ipv6_provisioning_mode,
        Ipv6ProvisioningMode::Disabled
    );
    assert_eq!(config.creator_uid, 1000);
}

#[test]
fn test_json_invalid() {
    let result = ProvisioningConfigurationParcelable::from_json("{");
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), crate::ErrorKind::InvalidStableData);
    }
}
