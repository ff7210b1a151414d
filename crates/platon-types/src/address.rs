//! Bech32 display address

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display address parsing error
#[derive(Debug, Error)]
pub enum AddressParseError {
    /// Structurally malformed display address
    #[error("malformed display address: {0}")]
    Malformed(String),
}

/// A human-readable PlatON account address: bech32-encoded raw bytes with a
/// network prefix (`atp1...` on the main network, `atx1...` on test
/// networks).
///
/// Values are produced by the SDK's address codec; `from_str` only checks
/// the bech32 surface shape, not the checksum.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Wrap an already-encoded display address.
    ///
    /// Intended for the address codec; callers holding untrusted input
    /// should go through `from_str`.
    pub fn new(encoded: impl Into<String>) -> Self {
        Address(encoded.into())
    }

    /// The display form as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Address {
    type Err = AddressParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.is_ascii() {
            return Err(AddressParseError::Malformed(s.to_string()));
        }
        // bech32 shape: <hrp> "1" <data>, hrp non-empty
        match s.rfind('1') {
            Some(sep) if sep > 0 && sep + 1 < s.len() => Ok(Address(s.to_string())),
            _ => Err(AddressParseError::Malformed(s.to_string())),
        }
    }
}
