//! System-contract addresses and wrapper handles
//!
//! The built-in contracts live at fixed raw addresses on every PlatON
//! chain; only their display form depends on the network prefix. The
//! wrapper types hold that derived address plus a dispatch handle; call
//! encoding for the individual contract operations is layered on top of
//! them elsewhere.

use platon_primitives::H160;
use platon_types::{Address, BlockTag, CallRequest, Data};

use crate::platon::Platon;
use crate::Web3Error;

const fn system_address(tail: u8) -> H160 {
    let mut bytes = [0u8; 20];
    bytes[0] = 0x10;
    bytes[19] = tail;
    H160::from_bytes(bytes)
}

/// Raw address of the restricting-plan contract
pub const RESTRICTING_CONTRACT: H160 = system_address(0x01);
/// Raw address of the staking contract
pub const STAKING_CONTRACT: H160 = system_address(0x02);
/// Raw address of the slashing contract
pub const SLASH_CONTRACT: H160 = system_address(0x04);
/// Raw address of the governance proposal contract
pub const PROPOSAL_CONTRACT: H160 = system_address(0x05);
/// Raw address of the delegate-reward contract
pub const REWARD_CONTRACT: H160 = system_address(0x06);

macro_rules! contract_handle {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone)]
        pub struct $name {
            platon: Platon,
            address: Address,
        }

        impl $name {
            pub(crate) fn new(platon: Platon, address: Address) -> Self {
                Self { platon, address }
            }

            /// The contract's display address under the client's prefix
            pub fn address(&self) -> &Address {
                &self.address
            }

            /// Execute a read-only call against the contract with
            /// already-encoded input data.
            pub async fn call(&self, data: Data) -> Result<Data, Web3Error> {
                let request = CallRequest::to(self.address.clone(), data);
                self.platon.call(&request, BlockTag::Latest).await
            }
        }
    };
}

contract_handle!(StakingContract, "Handle to the staking system contract");
contract_handle!(ProposalContract, "Handle to the governance proposal system contract");
contract_handle!(SlashContract, "Handle to the slashing system contract");
contract_handle!(
    RestrictingPlanContract,
    "Handle to the restricting-plan system contract"
);
contract_handle!(RewardContract, "Handle to the delegate-reward system contract");
