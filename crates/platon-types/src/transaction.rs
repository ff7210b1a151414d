//! Outbound transaction and call shapes

use serde::Serialize;

use crate::{Address, Data, Quantity};

/// Transaction submitted through `platon_sendTransaction`.
///
/// `from` is required by the node (it selects the signing account); the
/// dispatch layer rejects a request without it before anything goes out on
/// the wire. Unset optional fields are left to the node's defaults.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Sending account (required before dispatch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Recipient (absent for contract deployment)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    /// Gas limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    /// Gas price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Quantity>,
    /// Value to transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,
    /// Input data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
    /// Sender nonce
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<Quantity>,
}

/// Read-only call shape for `platon_call` and `platon_estimateGas`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// Caller account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    /// Called contract
    pub to: Address,
    /// Gas limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<Quantity>,
    /// Gas price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<Quantity>,
    /// Value to transfer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Quantity>,
    /// Call data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Data>,
}

impl CallRequest {
    /// A call to `to` with the given data and everything else defaulted
    pub fn to(to: Address, data: Data) -> Self {
        CallRequest {
            from: None,
            to,
            gas: None,
            gas_price: None,
            value: None,
            data: Some(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_fields_are_skipped() {
        let tx = TransactionRequest {
            from: Some(Address::new("atx1sender")),
            value: Some(Quantity::from(1000u64)),
            ..Default::default()
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["from"], "atx1sender");
        assert_eq!(json["value"], "0x3e8");
        assert!(json.get("to").is_none());
        assert!(json.get("gasPrice").is_none());
    }

    #[test]
    fn field_names_are_camel_case() {
        let tx = TransactionRequest {
            from: Some(Address::new("atx1sender")),
            gas_price: Some(Quantity::from(1_000_000_000u64)),
            ..Default::default()
        };
        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["gasPrice"], "0x3b9aca00");
    }

    #[test]
    fn call_request_requires_to() {
        let call = CallRequest::to(Address::new("atx1contract"), Data::from(vec![0x01]));
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["to"], "atx1contract");
        assert_eq!(json["data"], "0x01");
        assert!(json.get("from").is_none());
    }
}
