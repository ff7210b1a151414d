//! Client integration tests for platon-sdk
//!
//! Construction, envelope shape, typed decoding, and the error paths, all
//! against the mock provider.

use std::sync::Arc;

use platon_sdk::types::{Address, BlockTag, Data, Quantity, SyncStatus, TransactionRequest};
use platon_sdk::{
    AddressCodec, Bech32Codec, MockProvider, NetworkParameter, Web3, Web3Error, H160, U256,
};
use serde_json::{json, Value};

// ==================== Construction ====================

#[test]
fn construction_derives_contract_addresses() {
    let web3 = Web3::new(MockProvider::new(), "201018").unwrap();
    assert!(web3.staking.address().as_str().starts_with("atx1"));
    assert!(web3.reward.address().as_str().starts_with("atx1"));
    assert_ne!(web3.staking.address(), web3.proposal.address());
}

#[test]
fn construction_is_deterministic() {
    let a = Web3::new(MockProvider::new(), "201018").unwrap();
    let b = Web3::new(MockProvider::new(), "201018").unwrap();
    assert_eq!(a.staking.address(), b.staking.address());
    assert_eq!(a.restricting.address(), b.restricting.address());
}

#[test]
fn prefix_changes_derived_addresses() {
    let test = Web3::new(MockProvider::new(), "1").unwrap();
    let main = Web3::builder()
        .hrp("atp")
        .build(MockProvider::new(), "201018")
        .unwrap();
    assert!(main.staking.address().as_str().starts_with("atp1"));
    assert_ne!(test.staking.address(), main.staking.address());
}

#[test]
fn invalid_prefix_aborts_construction() {
    let result = Web3::builder().hrp("ATX").build(MockProvider::new(), "1");
    assert!(matches!(result, Err(Web3Error::Encoding(_))));

    let result = Web3::builder().hrp("").build(MockProvider::new(), "1");
    assert!(matches!(result, Err(Web3Error::Encoding(_))));
}

#[test]
fn for_network_uses_chain_parameters() {
    let main = Web3::for_network(MockProvider::new(), &NetworkParameter::MainNet).unwrap();
    assert_eq!(main.chain_id(), "201018");
    assert_eq!(main.hrp(), "atp");

    let test =
        Web3::for_network(MockProvider::new(), &NetworkParameter::test_net("7")).unwrap();
    assert_eq!(test.chain_id(), "7");
    assert_eq!(test.hrp(), "atx");
}

struct FixedCodec;

impl AddressCodec for FixedCodec {
    fn encode(&self, hrp: &str, address: &H160) -> Result<Address, Web3Error> {
        Ok(Address::new(format!("{hrp}1fixed{}", address.as_bytes()[19])))
    }
}

struct FailingCodec;

impl AddressCodec for FailingCodec {
    fn encode(&self, _hrp: &str, _address: &H160) -> Result<Address, Web3Error> {
        Err(Web3Error::Encoding("codec unavailable".to_string()))
    }
}

#[test]
fn injected_codec_is_used_for_derivation() {
    let web3 = Web3::builder()
        .codec(Arc::new(FixedCodec))
        .build(MockProvider::new(), "1")
        .unwrap();
    assert_eq!(web3.staking.address().as_str(), "atx1fixed2");
    assert_eq!(web3.reward.address().as_str(), "atx1fixed6");
}

#[test]
fn failing_codec_aborts_construction() {
    let result = Web3::builder()
        .codec(Arc::new(FailingCodec))
        .build(MockProvider::new(), "1");
    assert!(matches!(result, Err(Web3Error::Encoding(_))));
}

// ==================== Envelope shape ====================

#[tokio::test]
async fn net_version_end_to_end() {
    let mock = MockProvider::new();
    mock.set_response("net_version", Value::String("100".to_string()));
    let web3 = Web3::new(mock.clone(), "100").unwrap();

    let version = web3.net.version().await.unwrap();
    assert_eq!(version, "100");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "net_version");
    assert_eq!(requests[0].params, Vec::<Value>::new());
    assert_eq!(requests[0].id, 1);
    assert_eq!(requests[0].jsonrpc, "2.0");
}

#[tokio::test]
async fn configured_rpc_id_is_stamped_on_envelopes() {
    let mock = MockProvider::new();
    let web3 = Web3::builder()
        .rpc_id(42)
        .build(mock.clone(), "1")
        .unwrap();

    let _ = web3.platon.block_number().await.unwrap();
    assert_eq!(mock.requests()[0].id, 42);
}

#[tokio::test]
async fn balance_params_are_positional_and_ordered() {
    let mock = MockProvider::new();
    let web3 = Web3::new(mock.clone(), "1").unwrap();
    let addr: Address = "atx1sender".parse().unwrap();

    let balance = web3.platon.balance(&addr, BlockTag::Number(100)).await.unwrap();
    assert_eq!(balance, Quantity::new(U256::from(1_000_000_000_000_000_000u128)));

    let requests = mock.requests();
    assert_eq!(requests[0].method, "platon_getBalance");
    assert_eq!(requests[0].params[0], json!("atx1sender"));
    assert_eq!(requests[0].params[1], json!("0x64"));
}

// ==================== Preconditions ====================

#[tokio::test]
async fn send_transaction_without_from_never_reaches_the_provider() {
    let mock = MockProvider::new();
    let web3 = Web3::new(mock.clone(), "1").unwrap();

    let tx = TransactionRequest {
        to: Some("atx1recipient".parse().unwrap()),
        value: Some(Quantity::from(1000u64)),
        ..Default::default()
    };
    let result = web3.platon.send_transaction(&tx).await;

    assert!(matches!(result, Err(Web3Error::Request(_))));
    assert_eq!(mock.request_count(), 0);
}

#[tokio::test]
async fn send_transaction_with_from_goes_out() {
    let mock = MockProvider::new();
    let web3 = Web3::new(mock.clone(), "1").unwrap();

    let tx = TransactionRequest {
        from: Some("atx1sender".parse().unwrap()),
        to: Some("atx1recipient".parse().unwrap()),
        value: Some(Quantity::from(1000u64)),
        ..Default::default()
    };
    let hash = web3.platon.send_transaction(&tx).await.unwrap();
    assert_eq!(hash.len(), 32);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "platon_sendTransaction");
    assert_eq!(requests[0].params[0]["from"], "atx1sender");
    assert_eq!(requests[0].params[0]["value"], "0x3e8");
}

// ==================== Typed decoding ====================

#[tokio::test]
async fn null_result_decodes_to_none() {
    let mock = MockProvider::new();
    mock.set_response("platon_getTransactionByHash", Value::Null);
    let web3 = Web3::new(mock, "1").unwrap();

    let hash = platon_sdk::H256::ZERO;
    let tx = web3.platon.transaction_by_hash(&hash).await.unwrap();
    assert!(tx.is_none());
}

#[tokio::test]
async fn block_lookup_decodes_full_object() {
    let mock = MockProvider::new();
    mock.set_response(
        "platon_getBlockByNumber",
        json!({
            "number": "0x1b4",
            "hash": format!("0x{}", "11".repeat(32)),
            "parentHash": format!("0x{}", "22".repeat(32)),
            "gasLimit": "0x47e7c4",
            "gasUsed": "0x5208",
            "timestamp": "0x5f5e100",
            "transactions": [],
        }),
    );
    let web3 = Web3::new(mock.clone(), "1").unwrap();

    let block = web3
        .platon
        .block_by_number(BlockTag::Number(436), false)
        .await
        .unwrap()
        .expect("block should be present");
    assert_eq!(block.number.unwrap().to_u64(), Some(436));

    let requests = mock.requests();
    assert_eq!(requests[0].params[0], json!("0x1b4"));
    assert_eq!(requests[0].params[1], json!(false));
}

#[tokio::test]
async fn accounts_decode_as_display_addresses() {
    let mock = MockProvider::new();
    mock.set_response("platon_accounts", json!(["atx1one", "atx1two"]));
    let web3 = Web3::new(mock, "1").unwrap();

    let accounts = web3.platon.accounts().await.unwrap();
    assert_eq!(accounts.len(), 2);
    assert_eq!(accounts[0].as_str(), "atx1one");
}

#[tokio::test]
async fn syncing_false_decodes_to_idle() {
    let mock = MockProvider::new();
    mock.set_response("platon_syncing", Value::Bool(false));
    let web3 = Web3::new(mock, "1").unwrap();

    let status = web3.platon.syncing().await.unwrap();
    assert_eq!(status, SyncStatus::not_syncing());
}

#[tokio::test]
async fn shape_mismatch_is_a_decoding_error() {
    let mock = MockProvider::new();
    mock.set_response("platon_blockNumber", json!({"unexpected": "object"}));
    let web3 = Web3::new(mock, "1").unwrap();

    let result = web3.platon.block_number().await;
    assert!(matches!(result, Err(Web3Error::Decoding(_))));
}

// ==================== Error propagation ====================

#[tokio::test]
async fn node_error_member_surfaces_as_server_error() {
    let mock = MockProvider::new();
    mock.set_error("platon_gasPrice", -32000, "node is overloaded");
    let web3 = Web3::new(mock, "1").unwrap();

    match web3.platon.gas_price().await {
        Err(Web3Error::Server { code, message }) => {
            assert_eq!(code, -32000);
            assert_eq!(message, "node is overloaded");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_method_surfaces_as_server_error() {
    let mock = MockProvider::new();
    let web3 = Web3::new(mock, "1").unwrap();

    // protocol_version has no mock default
    let result = web3.platon.protocol_version().await;
    assert!(matches!(
        result,
        Err(Web3Error::Server { code: -32601, .. })
    ));
}

// ==================== Contract handles ====================

#[tokio::test]
async fn contract_handle_calls_through_the_shared_context() {
    let mock = MockProvider::new();
    let web3 = Web3::new(mock.clone(), "1").unwrap();

    let result = web3.staking.call(Data::from(vec![0x01, 0x02])).await.unwrap();
    assert!(result.is_empty()); // mock default for platon_call is "0x"

    let requests = mock.requests();
    assert_eq!(requests[0].method, "platon_call");
    assert_eq!(
        requests[0].params[0]["to"],
        json!(web3.staking.address().as_str())
    );
    assert_eq!(requests[0].params[1], json!("latest"));
}

// ==================== Round-trip sanity ====================

#[tokio::test]
async fn derived_address_roundtrips_through_the_codec() {
    let web3 = Web3::new(MockProvider::new(), "1").unwrap();
    let codec = Bech32Codec;
    let (hrp, raw) = codec.decode(web3.staking.address()).unwrap();
    assert_eq!(hrp, "atx");
    assert_eq!(raw, platon_sdk::contracts::STAKING_CONTRACT);
}
