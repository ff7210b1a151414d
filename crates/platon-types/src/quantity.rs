//! Hex-encoded quantities

use std::fmt;

use platon_primitives::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Quantity parsing error
#[derive(Debug, Error)]
pub enum QuantityParseError {
    /// Empty or non-hex input
    #[error("invalid quantity {0:?}")]
    Invalid(String),
}

/// An unsigned quantity, carried on the wire as minimal 0x-prefixed hex
/// (`0x0`, `0x41`, `0x400`, never `0x0400`).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(U256);

impl Quantity {
    /// Zero quantity
    pub const ZERO: Quantity = Quantity(U256::zero());

    /// Wrap a `U256`
    pub fn new(value: U256) -> Self {
        Quantity(value)
    }

    /// The underlying value
    pub fn value(&self) -> U256 {
        self.0
    }

    /// Narrow to `u64`, if the value fits
    pub fn to_u64(&self) -> Option<u64> {
        if self.0 > U256::from(u64::MAX) {
            None
        } else {
            Some(self.0.low_u64())
        }
    }

    /// Render as minimal 0x-prefixed hex
    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.0)
    }

    /// Parse from 0x-prefixed (or bare) hex
    pub fn from_hex(s: &str) -> Result<Self, QuantityParseError> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        if digits.is_empty() {
            return Err(QuantityParseError::Invalid(s.to_string()));
        }
        U256::from_str_radix(digits, 16)
            .map(Quantity)
            .map_err(|_| QuantityParseError::Invalid(s.to_string()))
    }
}

impl From<u64> for Quantity {
    fn from(value: u64) -> Self {
        Quantity(U256::from(value))
    }
}

impl From<U256> for Quantity {
    fn from(value: U256) -> Self {
        Quantity(value)
    }
}

impl fmt::Debug for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Quantity({})", self.to_hex())
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Quantity::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
