//! Fixed-size byte types (H160, H256)

use std::fmt;

use crate::PrimitiveError;

macro_rules! fixed_bytes {
    ($name:ident, $len:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name([u8; $len]);

        impl $name {
            /// Size in bytes
            pub const LEN: usize = $len;

            /// All-zero value
            pub const ZERO: $name = $name([0u8; $len]);

            /// Create from a byte array
            pub const fn from_bytes(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }

            /// Create from a slice, checking the length
            pub fn from_slice(slice: &[u8]) -> Result<Self, PrimitiveError> {
                if slice.len() != $len {
                    return Err(PrimitiveError::InvalidLength {
                        expected: $len,
                        got: slice.len(),
                    });
                }
                let mut bytes = [0u8; $len];
                bytes.copy_from_slice(slice);
                Ok($name(bytes))
            }

            /// Parse from a hex string, with or without the `0x` prefix
            pub fn from_hex(s: &str) -> Result<Self, PrimitiveError> {
                let s = s.strip_prefix("0x").unwrap_or(s);
                let bytes =
                    hex::decode(s).map_err(|e| PrimitiveError::InvalidHex(e.to_string()))?;
                Self::from_slice(&bytes)
            }

            /// Get the underlying bytes
            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }

            /// Check whether every byte is zero
            pub fn is_zero(&self) -> bool {
                self.0 == [0u8; $len]
            }

            /// Render as a 0x-prefixed lowercase hex string
            pub fn to_hex(&self) -> String {
                format!("0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.to_hex())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.to_hex())
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                $name(bytes)
            }
        }

        impl AsRef<[u8]> for $name {
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.to_hex())
            }
        }

        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::from_hex(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

fixed_bytes!(H160, 20, "Raw 20-byte account or contract address");
fixed_bytes!(H256, 32, "256-bit hash (32 bytes)");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h160_from_hex_roundtrip() {
        let original = "0x1000000000000000000000000000000000000002";
        let addr = H160::from_hex(original).unwrap();
        assert_eq!(addr.to_hex(), original);
        assert!(!addr.is_zero());
    }

    #[test]
    fn h160_accepts_unprefixed_and_mixed_case() {
        let a = H160::from_hex("0x742d35Cc6634C0532925a3b844Bc9e7595f0aB3d").unwrap();
        let b = H160::from_hex("742d35cc6634c0532925a3b844bc9e7595f0ab3d").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn h160_rejects_wrong_length() {
        match H160::from_hex("0x1234") {
            Err(PrimitiveError::InvalidLength { expected: 20, got: 2 }) => {}
            other => panic!("expected InvalidLength, got {other:?}"),
        }
    }

    #[test]
    fn h160_rejects_bad_hex() {
        assert!(matches!(
            H160::from_hex("0xzz2d35cc6634c0532925a3b844bc9e7595f0ab3d"),
            Err(PrimitiveError::InvalidHex(_))
        ));
    }

    #[test]
    fn h256_zero() {
        assert!(H256::ZERO.is_zero());
        assert_eq!(H256::ZERO.to_hex(), format!("0x{}", "00".repeat(32)));
    }

    #[test]
    fn h256_from_slice_exact() {
        let bytes = [0xabu8; 32];
        let hash = H256::from_slice(&bytes).unwrap();
        assert_eq!(hash.as_bytes(), &bytes);
        assert!(H256::from_slice(&[0u8; 31]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn h256_serde_roundtrip() {
        let hash = H256::from_hex(
            "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b",
        )
        .unwrap();
        let json = serde_json::to_string(&hash).unwrap();
        assert_eq!(
            json,
            "\"0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b\""
        );
        let back: H256 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hash);
    }
}
