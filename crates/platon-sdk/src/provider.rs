//! Transport providers
//!
//! A provider performs the actual exchange for one envelope. The returned
//! future resolves exactly once with either the raw result value or a
//! [`Web3Error`]; typed decoding happens above, in the dispatch layer.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::rpc::RpcRequest;
use crate::Web3Error;

#[cfg(feature = "http")]
use crate::rpc::RpcResponse;

/// Transport capability contract (object-safe).
///
/// Obligations: resolve exactly once per call, preserve the request id for
/// correlation, and map every transport-level failure into the `Web3Error`
/// taxonomy instead of panicking.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Execute one request/response exchange.
    async fn send(&self, request: RpcRequest) -> Result<Value, Web3Error>;
}

/// In-memory provider for testing.
///
/// Answers from canned per-method responses (with defaults for the common
/// methods) and records every envelope it receives, so tests can assert on
/// the outbound wire shape or on the absence of any call at all. Clones
/// share state.
#[derive(Clone)]
pub struct MockProvider {
    responses: Arc<Mutex<HashMap<String, Value>>>,
    errors: Arc<Mutex<HashMap<String, (i64, String)>>>,
    requests: Arc<Mutex<Vec<RpcRequest>>>,
}

impl MockProvider {
    /// Create a mock with default responses for the common methods
    pub fn new() -> Self {
        let mut defaults = HashMap::new();
        defaults.insert("web3_clientVersion".to_string(), json_str("PlatONnetwork/platon/v1.1.0"));
        defaults.insert("net_version".to_string(), json_str("1"));
        defaults.insert("net_peerCount".to_string(), json_str("0x2"));
        defaults.insert("platon_gasPrice".to_string(), json_str("0x3b9aca00")); // 1 gvon
        defaults.insert("platon_blockNumber".to_string(), json_str("0x100"));
        defaults.insert("platon_getBalance".to_string(), json_str("0xde0b6b3a7640000")); // 1 ATP
        defaults.insert("platon_getTransactionCount".to_string(), json_str("0x0"));
        defaults.insert("platon_estimateGas".to_string(), json_str("0x5208")); // 21000
        defaults.insert("platon_getCode".to_string(), json_str("0x"));
        defaults.insert("platon_call".to_string(), json_str("0x"));
        let tx_hash = "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";
        defaults.insert("platon_sendTransaction".to_string(), json_str(tx_hash));
        defaults.insert("platon_sendRawTransaction".to_string(), json_str(tx_hash));

        MockProvider {
            responses: Arc::new(Mutex::new(defaults)),
            errors: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the canned response for a method
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set_response(&self, method: &str, response: Value) {
        self.responses
            .lock()
            .expect("MockProvider mutex poisoned")
            .insert(method.to_string(), response);
    }

    /// Make a method answer with a JSON-RPC error member
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set_error(&self, method: &str, code: i64, message: &str) {
        self.errors
            .lock()
            .expect("MockProvider mutex poisoned")
            .insert(method.to_string(), (code, message.to_string()));
    }

    /// Every envelope received so far, in arrival order
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn requests(&self) -> Vec<RpcRequest> {
        self.requests
            .lock()
            .expect("MockProvider mutex poisoned")
            .clone()
    }

    /// Number of envelopes received so far
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .expect("MockProvider mutex poisoned")
            .len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn json_str(s: &str) -> Value {
    Value::String(s.to_string())
}

#[async_trait]
impl Provider for MockProvider {
    async fn send(&self, request: RpcRequest) -> Result<Value, Web3Error> {
        let method = request.method.to_string();
        self.requests
            .lock()
            .map_err(|_| Web3Error::Connection("MockProvider mutex poisoned".to_string()))?
            .push(request);

        let forced_error = self
            .errors
            .lock()
            .map_err(|_| Web3Error::Connection("MockProvider mutex poisoned".to_string()))?
            .get(&method)
            .cloned();
        if let Some((code, message)) = forced_error {
            return Err(Web3Error::Server { code, message });
        }

        let response = self
            .responses
            .lock()
            .map_err(|_| Web3Error::Connection("MockProvider mutex poisoned".to_string()))?
            .get(&method)
            .cloned();
        response.ok_or(Web3Error::Server {
            code: -32601,
            message: format!("the method {method} does not exist/is not available"),
        })
    }
}

/// HTTP provider backed by `reqwest`.
#[cfg(feature = "http")]
pub struct HttpProvider {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpProvider {
    /// Create a provider posting to the given node endpoint
    pub fn new(url: impl Into<String>) -> Self {
        HttpProvider {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// The node endpoint this provider posts to
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Provider for HttpProvider {
    async fn send(&self, request: RpcRequest) -> Result<Value, Web3Error> {
        tracing::debug!(method = %request.method, id = request.id, "sending rpc request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Web3Error::Connection(e.to_string()))?;

        let decoded: RpcResponse<Value> = response
            .json()
            .await
            .map_err(|e| Web3Error::Decoding(e.to_string()))?;

        if decoded.id != request.id {
            return Err(Web3Error::Decoding(format!(
                "response id {} does not match request id {}",
                decoded.id, request.id
            )));
        }
        if let Some(error) = &decoded.error {
            tracing::warn!(method = %request.method, code = error.code, "node returned error");
        }
        // A null result is a present "not found" answer; re-materialize it
        // for the typed decoding step above.
        Ok(decoded.into_result()?.unwrap_or(Value::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_answers_defaults() {
        let provider = MockProvider::new();
        let value = provider
            .send(RpcRequest::new(1, "platon_gasPrice", vec![]))
            .await
            .unwrap();
        assert_eq!(value, Value::String("0x3b9aca00".to_string()));
    }

    #[tokio::test]
    async fn mock_prefers_custom_responses() {
        let provider = MockProvider::new();
        provider.set_response("net_version", Value::String("100".to_string()));
        let value = provider
            .send(RpcRequest::new(1, "net_version", vec![]))
            .await
            .unwrap();
        assert_eq!(value, Value::String("100".to_string()));
    }

    #[tokio::test]
    async fn mock_records_requests() {
        let provider = MockProvider::new();
        assert_eq!(provider.request_count(), 0);
        let _ = provider
            .send(RpcRequest::new(
                7,
                "platon_getBalance",
                vec![Value::String("atx1abc".into()), Value::String("latest".into())],
            ))
            .await;
        let requests = provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].id, 7);
        assert_eq!(requests[0].method, "platon_getBalance");
        assert_eq!(requests[0].params.len(), 2);
    }

    #[tokio::test]
    async fn mock_unknown_method_is_server_error() {
        let provider = MockProvider::new();
        let result = provider
            .send(RpcRequest::new(1, "platon_noSuchMethod", vec![]))
            .await;
        assert!(matches!(
            result,
            Err(Web3Error::Server { code: -32601, .. })
        ));
    }

    #[tokio::test]
    async fn mock_forced_error() {
        let provider = MockProvider::new();
        provider.set_error("platon_gasPrice", -32000, "node is overloaded");
        let result = provider
            .send(RpcRequest::new(1, "platon_gasPrice", vec![]))
            .await;
        match result {
            Err(Web3Error::Server { code, message }) => {
                assert_eq!(code, -32000);
                assert_eq!(message, "node is overloaded");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }
}
