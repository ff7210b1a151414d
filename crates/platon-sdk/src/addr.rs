//! Display-address codec capability
//!
//! The codec is an injected collaborator of client construction rather than
//! process-wide shared state, so tests can substitute their own encoder.

use platon_primitives::H160;
use platon_types::Address;

use crate::bech32;
use crate::Web3Error;

/// Capability for rendering raw addresses into their human-readable display
/// form under a network prefix.
///
/// Implementations must be deterministic: the same `(hrp, address)` pair
/// always yields the same display address.
pub trait AddressCodec: Send + Sync {
    /// Encode `address` under `hrp`, or fail with [`Web3Error::Encoding`].
    fn encode(&self, hrp: &str, address: &H160) -> Result<Address, Web3Error>;
}

/// The default codec: bech32 over the 8-to-5-bit regrouped raw bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bech32Codec;

impl Bech32Codec {
    /// Decode a display address back into its prefix and raw bytes.
    pub fn decode(&self, address: &Address) -> Result<(String, H160), Web3Error> {
        let (hrp, grouped) =
            bech32::decode(address.as_str()).map_err(|e| Web3Error::Encoding(e.to_string()))?;
        let raw = bech32::convert_bits(&grouped, 5, 8, false)
            .map_err(|e| Web3Error::Encoding(e.to_string()))?;
        let address = H160::from_slice(&raw).map_err(|e| Web3Error::Encoding(e.to_string()))?;
        Ok((hrp, address))
    }
}

impl AddressCodec for Bech32Codec {
    fn encode(&self, hrp: &str, address: &H160) -> Result<Address, Web3Error> {
        let grouped = bech32::convert_bits(address.as_bytes(), 8, 5, true)
            .map_err(|e| Web3Error::Encoding(e.to_string()))?;
        let encoded =
            bech32::encode(hrp, &grouped).map_err(|e| Web3Error::Encoding(e.to_string()))?;
        Ok(Address::new(encoded))
    }
}
