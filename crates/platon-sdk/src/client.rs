//! Client construction and typed dispatch

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::addr::{AddressCodec, Bech32Codec};
use crate::contracts::{
    self, ProposalContract, RestrictingPlanContract, RewardContract, SlashContract,
    StakingContract,
};
use crate::net::Net;
use crate::platon::Platon;
use crate::provider::Provider;
use crate::rpc::RpcRequest;
use crate::{NetworkParameter, Web3Error};

#[cfg(feature = "http")]
use crate::provider::HttpProvider;

/// Request id used when none is configured.
pub const DEFAULT_RPC_ID: u64 = 1;

/// Address prefix used when none is configured (the test-network prefix, so
/// a default-configured client never fabricates main-network addresses).
pub const DEFAULT_HRP: &str = "atx";

/// Immutable per-client context shared by every method group.
///
/// Nothing here is mutated after construction, so the context is shared via
/// `Arc` across concurrently running calls without any locking.
pub struct Properties {
    provider: Arc<dyn Provider>,
    codec: Arc<dyn AddressCodec>,
    rpc_id: u64,
    chain_id: String,
    hrp: String,
}

impl Properties {
    /// Request id stamped on every envelope
    pub fn rpc_id(&self) -> u64 {
        self.rpc_id
    }

    /// Targeted chain id
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Address prefix used for display addresses
    pub fn hrp(&self) -> &str {
        &self.hrp
    }

    /// The one dispatch path every remote procedure goes through: build the
    /// envelope, hand it to the provider, decode the raw value into the
    /// statically expected type. Decode failures surface as
    /// [`Web3Error::Decoding`], never as a silent default.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: &'static str,
        params: Vec<Value>,
    ) -> Result<T, Web3Error> {
        tracing::debug!(method, id = self.rpc_id, "dispatching rpc call");
        let request = RpcRequest::new(self.rpc_id, method, params);
        let value = self.provider.send(request).await?;
        serde_json::from_value(value).map_err(|e| Web3Error::Decoding(e.to_string()))
    }
}

/// The PlatON client: one constructed context plus its method groups and
/// pre-derived system-contract handles.
pub struct Web3 {
    props: Arc<Properties>,
    /// `net_*` methods
    pub net: Net,
    /// `platon_*` / `admin_*` methods
    pub platon: Platon,
    /// Staking system contract handle
    pub staking: StakingContract,
    /// Governance proposal system contract handle
    pub proposal: ProposalContract,
    /// Slashing system contract handle
    pub slash: SlashContract,
    /// Restricting-plan system contract handle
    pub restricting: RestrictingPlanContract,
    /// Delegate-reward system contract handle
    pub reward: RewardContract,
}

impl Web3 {
    /// Build a client with the default request id, address prefix and
    /// bech32 codec.
    ///
    /// Fails with [`Web3Error::Encoding`] if any system-contract address
    /// cannot be derived; a client never exists partially constructed.
    pub fn new(
        provider: impl Provider + 'static,
        chain_id: impl Into<String>,
    ) -> Result<Self, Web3Error> {
        Web3::builder().build(provider, chain_id)
    }

    /// Build a client whose chain id and address prefix follow the given
    /// chain parameters.
    pub fn for_network(
        provider: impl Provider + 'static,
        network: &NetworkParameter,
    ) -> Result<Self, Web3Error> {
        Web3::builder()
            .hrp(network.addr_prefix())
            .build(provider, network.chain_id())
    }

    /// Build a client talking HTTP to the given node endpoint.
    #[cfg(feature = "http")]
    pub fn dial(url: impl Into<String>, chain_id: impl Into<String>) -> Result<Self, Web3Error> {
        Web3::new(HttpProvider::new(url), chain_id)
    }

    /// Start configuring a client
    pub fn builder() -> Web3Builder {
        Web3Builder::default()
    }

    /// Request id stamped on every envelope
    pub fn rpc_id(&self) -> u64 {
        self.props.rpc_id()
    }

    /// Targeted chain id
    pub fn chain_id(&self) -> &str {
        self.props.chain_id()
    }

    /// Address prefix used for display addresses
    pub fn hrp(&self) -> &str {
        self.props.hrp()
    }

    /// Current client version string of the node.
    ///
    /// Wire method: `web3_clientVersion`.
    pub async fn client_version(&self) -> Result<String, Web3Error> {
        self.props.call("web3_clientVersion", vec![]).await
    }
}

/// Fluent configuration for [`Web3`] construction.
pub struct Web3Builder {
    rpc_id: u64,
    hrp: String,
    codec: Arc<dyn AddressCodec>,
}

impl Default for Web3Builder {
    fn default() -> Self {
        Web3Builder {
            rpc_id: DEFAULT_RPC_ID,
            hrp: DEFAULT_HRP.to_string(),
            codec: Arc::new(Bech32Codec),
        }
    }
}

impl Web3Builder {
    /// Override the request id echoed back in responses
    pub fn rpc_id(mut self, rpc_id: u64) -> Self {
        self.rpc_id = rpc_id;
        self
    }

    /// Override the address prefix
    pub fn hrp(mut self, hrp: impl Into<String>) -> Self {
        self.hrp = hrp.into();
        self
    }

    /// Substitute the display-address codec
    pub fn codec(mut self, codec: Arc<dyn AddressCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Construct the client, deriving every system-contract display address
    /// through the configured codec. Any derivation failure aborts
    /// construction.
    pub fn build(
        self,
        provider: impl Provider + 'static,
        chain_id: impl Into<String>,
    ) -> Result<Web3, Web3Error> {
        let props = Arc::new(Properties {
            provider: Arc::new(provider),
            codec: self.codec,
            rpc_id: self.rpc_id,
            chain_id: chain_id.into(),
            hrp: self.hrp,
        });

        let net = Net::new(props.clone());
        let platon = Platon::new(props.clone());

        let encode = |raw| props.codec.encode(&props.hrp, raw);
        let staking = StakingContract::new(platon.clone(), encode(&contracts::STAKING_CONTRACT)?);
        let proposal =
            ProposalContract::new(platon.clone(), encode(&contracts::PROPOSAL_CONTRACT)?);
        let slash = SlashContract::new(platon.clone(), encode(&contracts::SLASH_CONTRACT)?);
        let restricting = RestrictingPlanContract::new(
            platon.clone(),
            encode(&contracts::RESTRICTING_CONTRACT)?,
        );
        let reward = RewardContract::new(platon.clone(), encode(&contracts::REWARD_CONTRACT)?);

        Ok(Web3 {
            props,
            net,
            platon,
            staking,
            proposal,
            slash,
            restricting,
            reward,
        })
    }
}
