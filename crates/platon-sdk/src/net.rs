//! The `net_*` method group

use std::sync::Arc;

use platon_types::Quantity;

use crate::client::Properties;
use crate::Web3Error;

/// Network-information methods.
#[derive(Clone)]
pub struct Net {
    props: Arc<Properties>,
}

impl Net {
    pub(crate) fn new(props: Arc<Properties>) -> Self {
        Net { props }
    }

    /// Current network id, e.g. `"201018"` for the main network.
    ///
    /// Wire method: `net_version`.
    pub async fn version(&self) -> Result<String, Web3Error> {
        self.props.call("net_version", vec![]).await
    }

    /// Number of peers currently connected to the node.
    ///
    /// Wire method: `net_peerCount`.
    pub async fn peer_count(&self) -> Result<Quantity, Web3Error> {
        self.props.call("net_peerCount", vec![]).await
    }
}
