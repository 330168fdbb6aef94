// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::{MacAddress, StableParcelable, parcelable::fmt_opt};

/// Layer 2 identity of the link: the key used to look up stored network
/// attributes, the cluster that key belongs to and the BSSID currently
/// associated with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields, default)]
#[non_exhaustive]
pub struct Layer2Information {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub l2_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bssid: Option<MacAddress>,
}

impl Layer2Information {
    pub fn new(
        l2_key: Option<String>,
        cluster: Option<String>,
        bssid: Option<MacAddress>,
    ) -> Self {
        Self {
            l2_key,
            cluster,
            bssid,
        }
    }
}

/// Stable form of [Layer2Information].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[non_exhaustive]
pub struct Layer2InformationParcelable {
    pub l2_key: Option<String>,
    pub cluster: Option<String>,
    pub bssid: Option<MacAddress>,
}

impl std::fmt::Display for Layer2InformationParcelable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Layer2InformationParcelable{{l2Key: {}, cluster: {}, bssid: {}}}",
            fmt_opt(self.l2_key.as_ref()),
            fmt_opt(self.cluster.as_ref()),
            fmt_opt(self.bssid.as_ref()),
        )
    }
}

impl StableParcelable for Layer2Information {
    type Parcel = Layer2InformationParcelable;

    fn to_stable_parcelable(&self) -> Layer2InformationParcelable {
        Layer2InformationParcelable {
            l2_key: self.l2_key.clone(),
            cluster: self.cluster.clone(),
            bssid: self.bssid,
        }
    }

    fn from_stable_parcelable(parcel: &Layer2InformationParcelable) -> Self {
        Self::new(parcel.l2_key.clone(), parcel.cluster.clone(), parcel.bssid)
    }
}
