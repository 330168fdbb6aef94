// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

use crate::JsonDisplay;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonDisplay,
)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Please report this as bug to upstream
    Bug,
    /// Invalid argument
    InvalidArgument,
    /// Provisioning configuration failed validation
    InvalidConfiguration,
    /// Stable representation could not be decoded
    InvalidStableData,
    /// Invalid wire contract definition
    InvalidWireContract,
}

// Try not implement From for ProvError here unless you are sure this
// error should always convert to certain type of ErrorKind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct ProvError {
    pub kind: ErrorKind,
    pub msg: String,
}

impl std::fmt::Display for ProvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl ProvError {
    pub fn new(kind: ErrorKind, msg: String) -> Self {
        Self { kind, msg }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn msg(&self) -> &str {
        self.msg.as_str()
    }
}

impl std::error::Error for ProvError {}

impl From<serde_json::Error> for ProvError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(
            ErrorKind::InvalidStableData,
            format!("serde_json::Error: {e}"),
        )
    }
}

impl From<serde_yaml::Error> for ProvError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("serde_yaml::Error: {e}"),
        )
    }
}

impl From<std::io::Error> for ProvError {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Bug, format!("std::io::Error: {e}"))
    }
}

impl From<std::net::AddrParseError> for ProvError {
    fn from(e: std::net::AddrParseError) -> Self {
        Self::new(
            ErrorKind::InvalidArgument,
            format!("Invalid IP address: {e}"),
        )
    }
}
