// SPDX-License-Identifier: Apache-2.0

//! Provisioning configuration of a network interface and its stable
//! representation.
//!
//! [ProvisioningConfiguration] describes how IPv4 and IPv6 should be
//! provisioned on a link. Before crossing a process or storage boundary it is
//! converted into [ProvisioningConfigurationParcelable], and rebuilt on the
//! other side with the interface version the producer declared:
//!
//! ```rust
//! use ipprov::{
//!     Ipv6ProvisioningMode, ProvisioningConfiguration,
//!     ProvisioningConfigurationBuilder, CURRENT_INTERFACE_VERSION,
//! };
//!
//! let config = ProvisioningConfigurationBuilder::new()
//!     .without_ipv4()
//!     .with_ipv6_link_local_only()
//!     .build()
//!     .unwrap();
//! let parcel = config.to_stable_parcelable();
//! assert!(parcel.enable_ipv6);
//!
//! let rebuilt = ProvisioningConfiguration::from_stable_parcelable(
//!     &parcel,
//!     CURRENT_INTERFACE_VERSION,
//! );
//! assert_eq!(rebuilt, config);
//! assert_eq!(rebuilt.ipv6_provisioning_mode, Ipv6ProvisioningMode::LinkLocal);
//! ```

mod apf;
mod builder;
mod convert;
mod dhcp_option;
mod error;
mod initial_config;
mod layer2;
mod link_addr;
mod mac;
mod mode;
mod network;
mod parcelable;
mod prov_config;
mod prov_config_parcel;
mod scan_result;
mod static_ip;
mod wire_contract;

pub use self::apf::ApfCapabilities;
pub use self::builder::{
    DEFAULT_PROVISIONING_TIMEOUT_MS, DEFAULT_REQUESTED_PRE_DHCP_ACTION_MS,
    IPV6_ADDR_GEN_MODE_EUI64, IPV6_ADDR_GEN_MODE_STABLE_PRIVACY,
    ProvisioningConfigurationBuilder,
};
pub use self::convert::{
    decode_ipv4_provisioning_mode, decode_ipv6_provisioning_mode,
};
pub use self::dhcp_option::{
    DHCP_USER_CLASS, DHCP_VENDOR_CLASS_ID, DhcpOption,
};
pub use self::error::{ErrorKind, ProvError};
pub use self::initial_config::{
    InitialConfiguration, InitialConfigurationParcelable,
};
pub use self::layer2::{Layer2Information, Layer2InformationParcelable};
pub use self::link_addr::{IpPrefix, LinkAddress};
pub use self::mac::{MAC_ADDR_LEN, MacAddress};
pub use self::mode::{
    HOSTNAME_SETTING_DO_NOT_SEND, HOSTNAME_SETTING_SEND,
    HOSTNAME_SETTING_UNSET, HostnameSetting, Ipv4ProvisioningMode,
    Ipv6ProvisioningMode, PROV_IPV4_DHCP, PROV_IPV4_DISABLED,
    PROV_IPV4_STATIC, PROV_IPV6_DISABLED, PROV_IPV6_LINKLOCAL,
    PROV_IPV6_SLAAC, UnknownCode, ipv4_provisioning_mode_to_string,
    ipv6_provisioning_mode_to_string, mode_enables_ipv4, mode_enables_ipv6,
};
pub use self::network::Network;
pub use self::parcelable::StableParcelable;
pub use self::prov_config::ProvisioningConfiguration;
pub use self::prov_config_parcel::ProvisioningConfigurationParcelable;
pub use self::scan_result::{
    InformationElement, InformationElementParcelable, ScanResultInfo,
    ScanResultInfoParcelable, VENDOR_SPECIFIC_IE_ID,
};
pub use self::static_ip::StaticIpConfiguration;
pub use self::wire_contract::{
    CURRENT_INTERFACE_VERSION, VERSION_ADDED_PROVISIONING_MODE, WireContract,
};

pub(crate) use ipprov_derive::{FieldCount, JsonDisplay};
