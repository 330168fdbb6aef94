// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

/// Conversion between an in-process value and the form it takes in the
/// stable representation.
///
/// Both directions are total: any value converts, and any parcel produced by
/// [StableParcelable::to_stable_parcelable] (or by an older producer of the
/// same schema) converts back. For types whose stable form is the type
/// itself, `Parcel` is `Self`.
pub trait StableParcelable: Sized {
    type Parcel;

    fn to_stable_parcelable(&self) -> Self::Parcel;

    fn from_stable_parcelable(parcel: &Self::Parcel) -> Self;
}

/// `null` for `None`, the value's `Display` otherwise.
pub(crate) fn fmt_opt<T: std::fmt::Display>(value: Option<&T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

pub(crate) fn fmt_list<T: std::fmt::Display>(values: &[T]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

pub(crate) fn fmt_opt_list<T: std::fmt::Display>(
    values: Option<&[T]>,
) -> String {
    match values {
        Some(v) => fmt_list(v),
        None => "null".to_string(),
    }
}

/// Lower case hex without separator.
pub(crate) fn fmt_bytes(bytes: &[u8]) -> String {
    let mut ret = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        // Writing into String never fails.
        let _ = write!(ret, "{b:02x}");
    }
    ret
}
