//! JSON-RPC envelope types

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Web3Error;

/// Protocol version tag carried in every envelope.
pub const JSONRPC_VERSION: &str = "2.0";

/// An outbound JSON-RPC request envelope.
///
/// `params` is positional: its order must match the target method's
/// documented parameter order exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcRequest {
    /// Correlation id, echoed back by the node
    pub id: u64,
    /// Protocol version tag, always `"2.0"`
    pub jsonrpc: Cow<'static, str>,
    /// Wire method name (`<namespace>_<verb>`)
    pub method: Cow<'static, str>,
    /// Ordered positional parameters
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// Build an envelope for `method` with the given positional params
    pub fn new(id: u64, method: impl Into<Cow<'static, str>>, params: Vec<Value>) -> Self {
        RpcRequest {
            id,
            jsonrpc: Cow::Borrowed(JSONRPC_VERSION),
            method: method.into(),
            params,
        }
    }
}

/// An inbound JSON-RPC response envelope.
///
/// A well-formed response carries exactly one of `result` / `error`. A JSON
/// `null` result deserializes as `Some(Value::Null)` upstream and stands for
/// a present "not found" answer, never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcResponse<T> {
    /// Correlation id copied from the request
    #[serde(default)]
    pub id: u64,
    /// Protocol version tag
    #[serde(default)]
    pub jsonrpc: String,
    /// Successful result, if any
    #[serde(default)]
    pub result: Option<T>,
    /// Error member, if any
    #[serde(default)]
    pub error: Option<RpcError>,
}

impl<T> RpcResponse<T> {
    /// Collapse the envelope into a result, mapping an `error` member to
    /// [`Web3Error::Server`]. `Ok(None)` means the node answered `null`.
    pub fn into_result(self) -> Result<Option<T>, Web3Error> {
        if let Some(error) = self.error {
            return Err(Web3Error::Server {
                code: error.code,
                message: error.message,
            });
        }
        Ok(self.result)
    }
}

/// The JSON-RPC error member.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    /// Error code
    pub code: i64,
    /// Error message
    pub message: String,
    /// Optional structured detail
    #[serde(default)]
    pub data: Option<Value>,
}

/// Encode one positional parameter.
///
/// Our wire types serialize infallibly in practice; a failure here is a
/// local defect and is reported as a precondition error, before anything
/// reaches the transport.
pub(crate) fn encode_param<T: Serialize>(value: &T) -> Result<Value, Web3Error> {
    serde_json::to_value(value).map_err(|e| Web3Error::Request(e.to_string()))
}
