//! # platon-sdk
//!
//! Typed JSON-RPC client for PlatON-style chains.
//!
//! The client maps strongly-typed method calls onto JSON-RPC envelopes and
//! routes them through a pluggable [`Provider`]. Which chain is targeted
//! (chain id, address prefix) is separate from how it is reached (the
//! provider) and from what can be asked (the method groups).
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use platon_sdk::{MockProvider, Web3};
//! use platon_types::BlockTag;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // A mock provider for testing; use `Web3::dial(url, chain_id)` for
//!     // a real node.
//!     let web3 = Web3::new(MockProvider::new(), "201018")?;
//!
//!     let network = web3.net.version().await?;
//!     let height = web3.platon.block_number().await?;
//!     println!("chain {network}, block {height}");
//!
//!     let addr = "atx1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqc8cjv3".parse()?;
//!     let balance = web3.platon.balance(&addr, BlockTag::Latest).await?;
//!     println!("balance {balance}");
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! The constructed client is read-only; method groups share one immutable
//! context and concurrent calls may complete in any order. Retries,
//! timeouts and cancellation belong to the provider, not to this layer.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod addr;
pub mod bech32;
mod client;
pub mod contracts;
mod error;
mod net;
mod network;
mod platon;
mod provider;
mod rpc;

pub use addr::{AddressCodec, Bech32Codec};
pub use client::{Properties, Web3, Web3Builder, DEFAULT_HRP, DEFAULT_RPC_ID};
pub use error::Web3Error;
pub use net::Net;
pub use network::{NetworkParameter, MAINNET_CHAIN_ID};
pub use platon::Platon;
pub use provider::{MockProvider, Provider};
pub use rpc::{RpcError, RpcRequest, RpcResponse, JSONRPC_VERSION};

#[cfg(feature = "http")]
pub use provider::HttpProvider;

// Re-export the wire types for convenience
pub use platon_primitives::{H160, H256, U256};
pub use platon_types as types;
