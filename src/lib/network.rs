// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::StableParcelable;

/// Handle of a network. Two handles are the same network when their
/// `net_id` match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
#[non_exhaustive]
pub struct Network {
    pub net_id: i32,
}

impl Network {
    pub fn new(net_id: i32) -> Self {
        Self { net_id }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.net_id)
    }
}

impl StableParcelable for Network {
    type Parcel = Self;

    fn to_stable_parcelable(&self) -> Self {
        *self
    }

    fn from_stable_parcelable(parcel: &Self) -> Self {
        *parcel
    }
}
