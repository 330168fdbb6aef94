// SPDX-License-Identifier: Apache-2.0

use std::{net::IpAddr, str::FromStr};

use crate::{ErrorKind, IpPrefix, LinkAddress};

#[test]
fn test_link_address_parse() {
    let addr = LinkAddress::from_str("2001:db8::42/90").unwrap();
    assert_eq!(addr.address(), IpAddr::from_str("2001:db8::42").unwrap());
    assert_eq!(addr.prefix_length(), 90);
    assert!(addr.is_ipv6());
    assert_eq!(addr.to_string(), "2001:db8::42/90");
}

#[test]
fn test_link_address_invalid_prefix_length() {
    let result = LinkAddress::from_str("192.0.2.1/33");
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
    assert!(LinkAddress::from_str("::1/129").is_err());
}

#[test]
fn test_link_address_missing_prefix() {
    assert!(LinkAddress::from_str("192.0.2.1").is_err());
    assert!(LinkAddress::from_str("192.0.2/24").is_err());
}

#[test]
fn test_ip_prefix_masks_host_bits() {
    let prefix = IpPrefix::from_str("192.0.3.1/23").unwrap();
    assert_eq!(prefix.to_string(), "192.0.2.0/23");

    let prefix = IpPrefix::from_str("2001:db8:1::1/64").unwrap();
    assert_eq!(prefix.to_string(), "2001:db8:1::/64");

    let prefix = IpPrefix::from_str("::1/0").unwrap();
    assert_eq!(prefix.to_string(), "::/0");
    assert!(prefix.is_ipv6_default_route());
}

#[test]
fn test_ip_prefix_contains() {
    let prefix = IpPrefix::from_str("192.168.42.0/24").unwrap();
    assert!(prefix.contains(&IpAddr::from_str("192.168.42.42").unwrap()));
    assert!(!prefix.contains(&IpAddr::from_str("192.168.43.1").unwrap()));
    assert!(!prefix.contains(&IpAddr::from_str("::ffff:c0a8:2a2a").unwrap()));

    let all = IpPrefix::from_str("0.0.0.0/0").unwrap();
    assert!(all.contains(&IpAddr::from_str("203.0.113.1").unwrap()));
}

#[test]
fn test_link_address_serde() {
    let addrs: Vec<LinkAddress> = serde_yaml::from_str(
        r#"---
        - 192.168.42.42/24
        - 2001:db8::42/64
        "#,
    )
    .unwrap();
    assert_eq!(addrs[0].to_string(), "192.168.42.42/24");
    assert_eq!(
        serde_json::to_string(&addrs[1]).unwrap(),
        "\"2001:db8::42/64\""
    );
}
