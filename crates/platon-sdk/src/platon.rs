//! The `platon_*` (and node-admin) method group

use std::sync::Arc;

use platon_primitives::H256;
use platon_types::{
    Address, BlockObject, BlockTag, CallRequest, Data, ProgramVersion, Quantity, ReceiptObject,
    SyncStatus, TransactionObject, TransactionRequest,
};

use crate::client::Properties;
use crate::rpc::encode_param;
use crate::Web3Error;

/// Node and chain methods.
///
/// Every function here follows the same protocol: check local
/// preconditions, assemble the positional params in the node's documented
/// order, dispatch through the shared context. No function keeps state
/// between calls.
#[derive(Clone)]
pub struct Platon {
    props: Arc<Properties>,
}

impl Platon {
    pub(crate) fn new(props: Arc<Properties>) -> Self {
        Platon { props }
    }

    /// Schnorr NIZK proof of the node's bls key, used when staking.
    ///
    /// Wire method: `admin_getSchnorrNIZKProve`.
    pub async fn schnorr_nizk_prove(&self) -> Result<String, Web3Error> {
        self.props.call("admin_getSchnorrNIZKProve", vec![]).await
    }

    /// Code version of the node plus its signature, used when staking.
    ///
    /// Wire method: `admin_getProgramVersion`.
    pub async fn program_version(&self) -> Result<ProgramVersion, Web3Error> {
        self.props.call("admin_getProgramVersion", vec![]).await
    }

    /// Wire method: `platon_protocolVersion`.
    pub async fn protocol_version(&self) -> Result<String, Web3Error> {
        self.props.call("platon_protocolVersion", vec![]).await
    }

    /// Sync progress of the node; `SyncStatus::not_syncing()` when idle.
    ///
    /// Wire method: `platon_syncing`.
    pub async fn syncing(&self) -> Result<SyncStatus, Web3Error> {
        self.props.call("platon_syncing", vec![]).await
    }

    /// Wire method: `platon_gasPrice`.
    pub async fn gas_price(&self) -> Result<Quantity, Web3Error> {
        self.props.call("platon_gasPrice", vec![]).await
    }

    /// Accounts owned by the node.
    ///
    /// Wire method: `platon_accounts`.
    pub async fn accounts(&self) -> Result<Vec<Address>, Web3Error> {
        self.props.call("platon_accounts", vec![]).await
    }

    /// Wire method: `platon_blockNumber`.
    pub async fn block_number(&self) -> Result<Quantity, Web3Error> {
        self.props.call("platon_blockNumber", vec![]).await
    }

    /// Balance of `address` at the given block.
    ///
    /// Wire method: `platon_getBalance`, params `[address, tag]`.
    pub async fn balance(&self, address: &Address, tag: BlockTag) -> Result<Quantity, Web3Error> {
        let params = vec![encode_param(address)?, encode_param(&tag)?];
        self.props.call("platon_getBalance", params).await
    }

    /// Value of the storage slot `position` under `address`.
    ///
    /// Wire method: `platon_getStorageAt`, params `[address, position, tag]`.
    pub async fn storage_at(
        &self,
        address: &Address,
        position: Quantity,
        tag: BlockTag,
    ) -> Result<Data, Web3Error> {
        let params = vec![
            encode_param(address)?,
            encode_param(&position)?,
            encode_param(&tag)?,
        ];
        self.props.call("platon_getStorageAt", params).await
    }

    /// Number of transactions sent from `address`.
    ///
    /// Wire method: `platon_getTransactionCount`, params `[address, tag]`.
    pub async fn transaction_count(
        &self,
        address: &Address,
        tag: BlockTag,
    ) -> Result<Quantity, Web3Error> {
        let params = vec![encode_param(address)?, encode_param(&tag)?];
        self.props.call("platon_getTransactionCount", params).await
    }

    /// Wire method: `platon_getBlockTransactionCountByHash`.
    pub async fn block_transaction_count_by_hash(
        &self,
        block_hash: &H256,
    ) -> Result<Quantity, Web3Error> {
        let params = vec![encode_param(block_hash)?];
        self.props
            .call("platon_getBlockTransactionCountByHash", params)
            .await
    }

    /// Wire method: `platon_getBlockTransactionCountByNumber`.
    pub async fn block_transaction_count_by_number(
        &self,
        tag: BlockTag,
    ) -> Result<Quantity, Web3Error> {
        let params = vec![encode_param(&tag)?];
        self.props
            .call("platon_getBlockTransactionCountByNumber", params)
            .await
    }

    /// Contract code at `address`.
    ///
    /// Wire method: `platon_getCode`, params `[address, tag]`.
    pub async fn code(&self, address: &Address, tag: BlockTag) -> Result<Data, Web3Error> {
        let params = vec![encode_param(address)?, encode_param(&tag)?];
        self.props.call("platon_getCode", params).await
    }

    /// Submit a transaction to be signed by the node's account.
    ///
    /// `transaction.from` must be set: it selects the signing account, so a
    /// request without it is rejected here with [`Web3Error::Request`] and
    /// never reaches the transport.
    ///
    /// Wire method: `platon_sendTransaction`, params `[transaction]`.
    /// Returns the transaction hash.
    pub async fn send_transaction(
        &self,
        transaction: &TransactionRequest,
    ) -> Result<Data, Web3Error> {
        if transaction.from.is_none() {
            return Err(Web3Error::Request(
                "transaction `from` address is required".to_string(),
            ));
        }
        let params = vec![encode_param(transaction)?];
        self.props.call("platon_sendTransaction", params).await
    }

    /// Submit an already-signed, RLP-encoded transaction.
    ///
    /// Wire method: `platon_sendRawTransaction`, params `[data]`.
    /// Returns the transaction hash.
    pub async fn send_raw_transaction(&self, raw: &Data) -> Result<Data, Web3Error> {
        let params = vec![encode_param(raw)?];
        self.props.call("platon_sendRawTransaction", params).await
    }

    /// Execute a read-only call against `call.to`.
    ///
    /// Wire method: `platon_call`, params `[call, tag]`.
    pub async fn call(&self, call: &CallRequest, tag: BlockTag) -> Result<Data, Web3Error> {
        let params = vec![encode_param(call)?, encode_param(&tag)?];
        self.props.call("platon_call", params).await
    }

    /// Estimate the gas a call would consume.
    ///
    /// Wire method: `platon_estimateGas`, params `[call]`.
    pub async fn estimate_gas(&self, call: &CallRequest) -> Result<Quantity, Web3Error> {
        let params = vec![encode_param(call)?];
        self.props.call("platon_estimateGas", params).await
    }

    /// Block with the given hash; `None` if the node does not know it.
    ///
    /// Wire method: `platon_getBlockByHash`, params `[hash, full]`.
    pub async fn block_by_hash(
        &self,
        block_hash: &H256,
        full_transactions: bool,
    ) -> Result<Option<BlockObject>, Web3Error> {
        let params = vec![encode_param(block_hash)?, encode_param(&full_transactions)?];
        self.props.call("platon_getBlockByHash", params).await
    }

    /// Block at the given height or tag; `None` if it does not exist.
    ///
    /// Wire method: `platon_getBlockByNumber`, params `[tag, full]`.
    pub async fn block_by_number(
        &self,
        tag: BlockTag,
        full_transactions: bool,
    ) -> Result<Option<BlockObject>, Web3Error> {
        let params = vec![encode_param(&tag)?, encode_param(&full_transactions)?];
        self.props.call("platon_getBlockByNumber", params).await
    }

    /// Transaction with the given hash; `None` if unknown.
    ///
    /// Wire method: `platon_getTransactionByHash`.
    pub async fn transaction_by_hash(
        &self,
        transaction_hash: &H256,
    ) -> Result<Option<TransactionObject>, Web3Error> {
        let params = vec![encode_param(transaction_hash)?];
        self.props.call("platon_getTransactionByHash", params).await
    }

    /// Wire method: `platon_getTransactionByBlockHashAndIndex`,
    /// params `[blockHash, index]`.
    pub async fn transaction_by_block_hash_and_index(
        &self,
        block_hash: &H256,
        index: Quantity,
    ) -> Result<Option<TransactionObject>, Web3Error> {
        let params = vec![encode_param(block_hash)?, encode_param(&index)?];
        self.props
            .call("platon_getTransactionByBlockHashAndIndex", params)
            .await
    }

    /// Wire method: `platon_getTransactionByBlockNumberAndIndex`,
    /// params `[tag, index]`.
    pub async fn transaction_by_block_number_and_index(
        &self,
        tag: BlockTag,
        index: Quantity,
    ) -> Result<Option<TransactionObject>, Web3Error> {
        let params = vec![encode_param(&tag)?, encode_param(&index)?];
        self.props
            .call("platon_getTransactionByBlockNumberAndIndex", params)
            .await
    }

    /// Receipt for the given transaction; `None` while it is pending or
    /// unknown.
    ///
    /// Wire method: `platon_getTransactionReceipt`.
    pub async fn transaction_receipt(
        &self,
        transaction_hash: &H256,
    ) -> Result<Option<ReceiptObject>, Web3Error> {
        let params = vec![encode_param(transaction_hash)?];
        self.props.call("platon_getTransactionReceipt", params).await
    }
}
