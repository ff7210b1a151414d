//! Chain parameters

/// Chain id of the main network.
pub const MAINNET_CHAIN_ID: &str = "201018";

/// Which logical network a client targets, and the constants that follow
/// from that choice. A pure value type: every accessor is total and
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkParameter {
    /// The production network
    MainNet,
    /// A named test network
    TestNet {
        /// Chain id of the test network
        chain_id: String,
    },
}

impl NetworkParameter {
    /// A test network with the given chain id
    pub fn test_net(chain_id: impl Into<String>) -> Self {
        NetworkParameter::TestNet {
            chain_id: chain_id.into(),
        }
    }

    /// Chain id: the stored id for a test network, the fixed main-network
    /// id otherwise.
    pub fn chain_id(&self) -> &str {
        match self {
            NetworkParameter::TestNet { chain_id } => chain_id,
            NetworkParameter::MainNet => MAINNET_CHAIN_ID,
        }
    }

    /// Native unit symbol
    pub fn unit(&self) -> &'static str {
        "ATP"
    }

    /// Human-readable part used when encoding display addresses
    pub fn addr_prefix(&self) -> &'static str {
        match self {
            NetworkParameter::TestNet { .. } => "atx",
            NetworkParameter::MainNet => "atp",
        }
    }

    /// Numeric coin code (BIP-44 registration)
    pub fn coin_code(&self) -> u32 {
        206
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_returns_its_own_chain_id() {
        let net = NetworkParameter::test_net("7");
        assert_eq!(net.chain_id(), "7");
    }

    #[test]
    fn main_net_returns_fixed_chain_id() {
        assert_eq!(NetworkParameter::MainNet.chain_id(), "201018");
    }

    #[test]
    fn prefixes_follow_the_variant() {
        assert_eq!(NetworkParameter::MainNet.addr_prefix(), "atp");
        assert_eq!(NetworkParameter::test_net("7").addr_prefix(), "atx");
    }

    #[test]
    fn constants_do_not_vary() {
        for net in [NetworkParameter::MainNet, NetworkParameter::test_net("7")] {
            assert_eq!(net.unit(), "ATP");
            assert_eq!(net.coin_code(), 206);
        }
    }

    #[test]
    fn accessors_are_deterministic() {
        let net = NetworkParameter::test_net("299");
        assert_eq!(net.chain_id(), net.chain_id());
        assert_eq!(net.addr_prefix(), net.addr_prefix());
    }
}
