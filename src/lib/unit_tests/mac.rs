// SPDX-License-Identifier: Apache-2.0

use std::str::FromStr;

use crate::{ErrorKind, MacAddress};

#[test]
fn test_mac_address_parse() {
    let mac = MacAddress::from_str("12:34:56:78:9a:BC").unwrap();
    assert_eq!(mac.as_bytes(), [0x12u8, 0x34, 0x56, 0x78, 0x9a, 0xbc]);
    assert_eq!(mac.to_string(), "12:34:56:78:9a:bc");
}

#[test]
fn test_mac_address_invalid() {
    // too long
    assert!(MacAddress::from_str("aa:aa:aa:aa:aa:aa:aa").is_err());
    // invalid hex
    assert!(MacAddress::from_str("aa:aa:aa:aa:aa:ax").is_err());
    // single digit
    assert!(MacAddress::from_str("aa:aa:aa:aa:aa:b").is_err());
    // more than two digits
    let result = MacAddress::from_str("aa:aa:aa:aa:aa:bbb");
    assert!(result.is_err());
    if let Err(e) = result {
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn test_mac_address_from_bytes() {
    assert!(MacAddress::from_bytes(&[1, 2, 3, 4, 5]).is_err());
    assert_eq!(
        MacAddress::from_bytes(&[0, 1, 2, 3, 4, 5]).unwrap().to_string(),
        "00:01:02:03:04:05"
    );
}

#[test]
fn test_mac_address_serde() {
    let mac: MacAddress =
        serde_json::from_str("\"00:01:02:03:04:05\"").unwrap();
    assert_eq!(mac, MacAddress::new([0, 1, 2, 3, 4, 5]));
    assert_eq!(serde_json::to_string(&mac).unwrap(), "\"00:01:02:03:04:05\"");
    assert!(serde_json::from_str::<MacAddress>("\"00:01\"").is_err());
}
