//! # platon-types
//!
//! Wire-level value types exchanged with a PlatON node over JSON-RPC.
//!
//! Everything here round-trips through `serde_json`: quantities as
//! 0x-prefixed hex, byte strings as 0x-prefixed hex, addresses in their
//! bech32 display form, and the block/transaction/receipt objects the node
//! returns. None of these types perform I/O.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod address;
mod block;
mod data;
mod quantity;
mod sync;
mod tag;
mod transaction;

pub use address::{Address, AddressParseError};
pub use block::{BlockObject, BlockTransaction, LogObject, ReceiptObject, TransactionObject};
pub use data::Data;
pub use quantity::{Quantity, QuantityParseError};
pub use sync::{ProgramVersion, SyncStatus};
pub use tag::BlockTag;
pub use transaction::{CallRequest, TransactionRequest};

// Re-export the raw primitives alongside the display types
pub use platon_primitives::{H160, H256, U256};
