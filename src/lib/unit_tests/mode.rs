// SPDX-License-Identifier: Apache-2.0

use crate::{
    HostnameSetting, Ipv4ProvisioningMode, Ipv6ProvisioningMode,
    PROV_IPV4_DHCP, PROV_IPV4_DISABLED, PROV_IPV4_STATIC, PROV_IPV6_DISABLED,
    PROV_IPV6_LINKLOCAL, PROV_IPV6_SLAAC, ipv4_provisioning_mode_to_string,
    ipv6_provisioning_mode_to_string, mode_enables_ipv4, mode_enables_ipv6,
};

#[test]
fn test_ip_provisioning_mode_to_string() {
    assert_eq!("disabled", ipv4_provisioning_mode_to_string(PROV_IPV4_DISABLED));
    assert_eq!("static", ipv4_provisioning_mode_to_string(PROV_IPV4_STATIC));
    assert_eq!("dhcp", ipv4_provisioning_mode_to_string(PROV_IPV4_DHCP));
    assert_eq!("unknown", ipv4_provisioning_mode_to_string(0x03));

    assert_eq!("disabled", ipv6_provisioning_mode_to_string(PROV_IPV6_DISABLED));
    assert_eq!("slaac", ipv6_provisioning_mode_to_string(PROV_IPV6_SLAAC));
    assert_eq!(
        "link-local",
        ipv6_provisioning_mode_to_string(PROV_IPV6_LINKLOCAL)
    );
    assert_eq!("unknown", ipv6_provisioning_mode_to_string(0x03));
}

#[test]
fn test_negative_mode_code_is_unknown() {
    assert_eq!("unknown", ipv4_provisioning_mode_to_string(-1));
    assert_eq!("unknown", ipv6_provisioning_mode_to_string(i32::MAX));
}

#[test]
fn test_mode_enables_ip() {
    assert!(!mode_enables_ipv4(Ipv4ProvisioningMode::Disabled));
    assert!(mode_enables_ipv4(Ipv4ProvisioningMode::Static));
    assert!(mode_enables_ipv4(Ipv4ProvisioningMode::Dhcp));
    assert!(!mode_enables_ipv4(Ipv4ProvisioningMode::from(3)));

    assert!(!mode_enables_ipv6(Ipv6ProvisioningMode::Disabled));
    assert!(mode_enables_ipv6(Ipv6ProvisioningMode::Slaac));
    assert!(mode_enables_ipv6(Ipv6ProvisioningMode::LinkLocal));
    assert!(!mode_enables_ipv6(Ipv6ProvisioningMode::from(3)));
}

#[test]
fn test_mode_code_conversion() {
    assert_eq!(
        Ipv4ProvisioningMode::from(PROV_IPV4_DHCP).code(),
        PROV_IPV4_DHCP
    );
    assert!(matches!(
        Ipv4ProvisioningMode::from(5),
        Ipv4ProvisioningMode::Unknown(c) if c.value() == 5
    ));
    assert_eq!(i32::from(Ipv6ProvisioningMode::LinkLocal), PROV_IPV6_LINKLOCAL);
    assert_eq!(HostnameSetting::from(2), HostnameSetting::DoNotSend);
    assert_eq!(HostnameSetting::Send.code(), 1);
}

#[test]
fn test_mode_serde_string() {
    let mode: Ipv6ProvisioningMode =
        serde_yaml::from_str("link-local").unwrap();
    assert_eq!(mode, Ipv6ProvisioningMode::LinkLocal);

    let mode: Ipv4ProvisioningMode =
        serde_yaml::from_str("unknown:9").unwrap();
    assert_eq!(mode, Ipv4ProvisioningMode::from(9));
    assert_eq!(
        serde_json::to_string(&Ipv4ProvisioningMode::from(9)).unwrap(),
        "\"unknown:9\""
    );

    let result: Result<HostnameSetting, _> = serde_yaml::from_str("maybe");
    assert!(result.is_err());
}

#[test]
fn test_known_code_never_unknown() {
    for code in [PROV_IPV4_DISABLED, PROV_IPV4_STATIC, PROV_IPV4_DHCP] {
        let mode = Ipv4ProvisioningMode::from(code);
        assert!(!matches!(mode, Ipv4ProvisioningMode::Unknown(_)));
        assert_eq!(mode.code(), code);
    }
    for code in [PROV_IPV6_DISABLED, PROV_IPV6_SLAAC, PROV_IPV6_LINKLOCAL] {
        let mode = Ipv6ProvisioningMode::from(code);
        assert!(!matches!(mode, Ipv6ProvisioningMode::Unknown(_)));
        assert_eq!(mode.code(), code);
    }
    for code in 0..=2 {
        assert!(!matches!(
            HostnameSetting::from(code),
            HostnameSetting::Unknown(_)
        ));
    }

    // Text form of a known code resolves to the named variant.
    let mode: Ipv4ProvisioningMode =
        serde_yaml::from_str("unknown:2").unwrap();
    assert_eq!(mode, Ipv4ProvisioningMode::Dhcp);
    let setting: HostnameSetting = serde_yaml::from_str("unknown:1").unwrap();
    assert_eq!(setting, HostnameSetting::Send);
}
