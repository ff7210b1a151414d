//! Node-returned block, transaction, receipt and log objects

use platon_primitives::H256;
use serde::Deserialize;

use crate::{Address, Data, Quantity};

/// A block as returned by `platon_getBlockByHash` / `platon_getBlockByNumber`.
///
/// `number` and `hash` are absent for a pending block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockObject {
    /// Block height (absent when pending)
    #[serde(default)]
    pub number: Option<Quantity>,
    /// Block hash (absent when pending)
    #[serde(default)]
    pub hash: Option<H256>,
    /// Parent block hash
    pub parent_hash: H256,
    /// Root of the transaction trie
    #[serde(default)]
    pub transactions_root: Option<H256>,
    /// Root of the state trie
    #[serde(default)]
    pub state_root: Option<H256>,
    /// Root of the receipts trie
    #[serde(default)]
    pub receipts_root: Option<H256>,
    /// Logs bloom filter
    #[serde(default)]
    pub logs_bloom: Option<Data>,
    /// Proposer extra data
    #[serde(default)]
    pub extra_data: Option<Data>,
    /// Block size in bytes
    #[serde(default)]
    pub size: Option<Quantity>,
    /// Gas limit
    pub gas_limit: Quantity,
    /// Gas used by all transactions in the block
    pub gas_used: Quantity,
    /// Unix timestamp (milliseconds on PlatON)
    pub timestamp: Quantity,
    /// Transactions, as hashes or full objects depending on the request
    #[serde(default)]
    pub transactions: Vec<BlockTransaction>,
}

/// A transaction entry inside a block: a bare hash, or the full object when
/// the block was requested with `fullTransactionObjects = true`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockTransaction {
    /// Just the transaction hash
    Hash(H256),
    /// The full transaction object
    Full(Box<TransactionObject>),
}

/// A transaction as returned by the `platon_getTransaction*` lookups.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionObject {
    /// Transaction hash
    pub hash: H256,
    /// Sender nonce
    pub nonce: Quantity,
    /// Containing block hash (absent while pending)
    #[serde(default)]
    pub block_hash: Option<H256>,
    /// Containing block height (absent while pending)
    #[serde(default)]
    pub block_number: Option<Quantity>,
    /// Index within the block (absent while pending)
    #[serde(default)]
    pub transaction_index: Option<Quantity>,
    /// Sender
    pub from: Address,
    /// Recipient (absent for contract deployment)
    #[serde(default)]
    pub to: Option<Address>,
    /// Transferred value
    pub value: Quantity,
    /// Gas price
    pub gas_price: Quantity,
    /// Gas limit
    pub gas: Quantity,
    /// Input data
    pub input: Data,
}

/// A transaction receipt as returned by `platon_getTransactionReceipt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptObject {
    /// Transaction hash
    pub transaction_hash: H256,
    /// Index within the block
    pub transaction_index: Quantity,
    /// Containing block hash
    pub block_hash: H256,
    /// Containing block height
    pub block_number: Quantity,
    /// Deployed contract address, for deployment transactions
    #[serde(default)]
    pub contract_address: Option<Address>,
    /// Gas used by the block up to and including this transaction
    pub cumulative_gas_used: Quantity,
    /// Gas used by this transaction alone
    pub gas_used: Quantity,
    /// Logs emitted by this transaction
    #[serde(default)]
    pub logs: Vec<LogObject>,
    /// Logs bloom filter
    #[serde(default)]
    pub logs_bloom: Option<Data>,
    /// Execution status (`0x1` success, `0x0` failure)
    #[serde(default)]
    pub status: Option<Quantity>,
}

/// A contract log entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogObject {
    /// Emitting contract
    pub address: Address,
    /// Indexed topics
    #[serde(default)]
    pub topics: Vec<H256>,
    /// Unindexed payload
    pub data: Data,
    /// Containing block height (absent while pending)
    #[serde(default)]
    pub block_number: Option<Quantity>,
    /// Originating transaction hash (absent while pending)
    #[serde(default)]
    pub transaction_hash: Option<H256>,
    /// Log index within the block (absent while pending)
    #[serde(default)]
    pub log_index: Option<Quantity>,
}
