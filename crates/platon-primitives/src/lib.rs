//! # platon-primitives
//!
//! Primitive byte-level types shared across the PlatON SDK.
//!
//! These are the raw, prefix-less values: 20-byte account/contract
//! addresses ([`H160`]) and 32-byte hashes ([`H256`]). The human-readable
//! bech32 rendering of an address lives in `platon-types`; this crate only
//! knows about bytes and hex.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod hash;

pub use error::PrimitiveError;
pub use hash::{H160, H256};

// Re-export primitive-types for U256
pub use primitive_types::U256;
