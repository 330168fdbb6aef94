// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{
    StableParcelable,
    parcelable::{fmt_bytes, fmt_list, fmt_opt},
};

/// Element ID of vendor specific information elements.
pub const VENDOR_SPECIFIC_IE_ID: i32 = 0xdd;

/// WiFi access point the link is associating with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct ScanResultInfo {
    pub ssid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bssid: Option<String>,
    /// Information elements from the beacon or probe response, in the
    /// order they were received.
    #[serde(default)]
    pub information_elements: Vec<InformationElement>,
}

impl ScanResultInfo {
    pub fn new(
        ssid: String,
        bssid: Option<String>,
        information_elements: Vec<InformationElement>,
    ) -> Self {
        Self {
            ssid,
            bssid,
            information_elements,
        }
    }

    pub fn vendor_specific_elements(
        &self,
    ) -> impl Iterator<Item = &InformationElement> {
        self.information_elements
            .iter()
            .filter(|ie| ie.id == VENDOR_SPECIFIC_IE_ID)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct InformationElement {
    pub id: i32,
    pub payload: Vec<u8>,
}

impl InformationElement {
    pub fn new(id: i32, payload: Vec<u8>) -> Self {
        Self { id, payload }
    }
}

/// Stable form of [ScanResultInfo].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct ScanResultInfoParcelable {
    pub ssid: String,
    pub bssid: Option<String>,
    pub information_elements: Vec<InformationElementParcelable>,
}

impl std::fmt::Display for ScanResultInfoParcelable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ScanResultInfoParcelable{{ssid: {}, bssid: {}, \
             informationElements: {}}}",
            self.ssid,
            fmt_opt(self.bssid.as_ref()),
            fmt_list(&self.information_elements),
        )
    }
}

/// Stable form of [InformationElement].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct InformationElementParcelable {
    pub id: i32,
    pub payload: Vec<u8>,
}

impl std::fmt::Display for InformationElementParcelable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "InformationElementParcelable{{id: {}, payload: {}}}",
            self.id,
            fmt_bytes(&self.payload)
        )
    }
}

impl StableParcelable for InformationElement {
    type Parcel = InformationElementParcelable;

    fn to_stable_parcelable(&self) -> InformationElementParcelable {
        InformationElementParcelable {
            id: self.id,
            payload: self.payload.clone(),
        }
    }

    fn from_stable_parcelable(parcel: &InformationElementParcelable) -> Self {
        Self::new(parcel.id, parcel.payload.clone())
    }
}

impl StableParcelable for ScanResultInfo {
    type Parcel = ScanResultInfoParcelable;

    fn to_stable_parcelable(&self) -> ScanResultInfoParcelable {
        ScanResultInfoParcelable {
            ssid: self.ssid.clone(),
            bssid: self.bssid.clone(),
            information_elements: self
                .information_elements
                .iter()
                .map(StableParcelable::to_stable_parcelable)
                .collect(),
        }
    }

    fn from_stable_parcelable(parcel: &ScanResultInfoParcelable) -> Self {
        Self {
            ssid: parcel.ssid.clone(),
            bssid: parcel.bssid.clone(),
            information_elements: parcel
                .information_elements
                .iter()
                .map(InformationElement::from_stable_parcelable)
                .collect(),
        }
    }
}
