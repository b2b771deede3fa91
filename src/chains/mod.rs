mod contracts;
mod tokens;

use crate::{error::Error, interface::Network};

pub use self::{
    contracts::{intent_factory, known_contracts, INTENT_FACTORY},
    tokens::{known_tokens, TokenSymbol},
};

/// Numeric EIP-155 chain identifier.
pub type ChainId = u64;

/// Networks supported by the bridge UI.
/// Available networks:
/// - OpStack (chain id: 357)
/// - Sepolia (chain id: 11155111)
/// - InkSepolia (chain id: 763373)
///
/// Usage:
///
/// ```rust
/// use intentlink::chains::NetworkId;
///
/// let sepolia = NetworkId::try_from(11155111).unwrap();
/// assert_eq!(sepolia, NetworkId::Sepolia);
/// assert_eq!(sepolia.network().explorer_url, "https://sepolia.etherscan.io/");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkId {
    OpStack,
    Sepolia,
    InkSepolia,
}

impl NetworkId {
    pub const ALL: [NetworkId; 3] = [NetworkId::OpStack, NetworkId::Sepolia, NetworkId::InkSepolia];

    pub const fn id(self) -> ChainId {
        match self {
            NetworkId::OpStack => 357,
            NetworkId::Sepolia => 11155111,
            NetworkId::InkSepolia => 763373,
        }
    }

    /// Return the network record of this chain.
    pub fn network(self) -> Network {
        match self {
            NetworkId::Sepolia => Network {
                name: "Sepolia".to_string(),
                chain_id: self.id(),
                rpc_url: String::new(),
                wss_url: String::new(),
                explorer_url: "https://sepolia.etherscan.io/".to_string(),
                icon_url: "https://static.cx.metamask.io/api/v1/tokenIcons/1/0x0000000000000000000000000000000000000000.png".to_string(),
                docs_url: None,
            },
            NetworkId::InkSepolia => Network {
                name: "Ink Sepolia".to_string(),
                chain_id: self.id(),
                rpc_url: "https://rpc-gel-sepolia.inkonchain.com".to_string(),
                wss_url: "wss://rpc-gel-sepolia.inkonchain.com".to_string(),
                explorer_url: "https://explorer-sepolia.inkonchain.com/".to_string(),
                icon_url: "http://localhost:3000/ink_sepolia.svg".to_string(),
                docs_url: Some("https://blog.kraken.com/product/ink-testnet".to_string()),
            },
            NetworkId::OpStack => Network {
                name: "OP Stack Rollup".to_string(),
                chain_id: self.id(),
                rpc_url: "https://rpc-jam-ccw030wxbz.t.conduit.xyz/Pwe4skpfPaM8HSTPwHDhXzoJoKqdpjfRQ".to_string(),
                wss_url: "wss://rpc-jam-ccw030wxbz.t.conduit.xyz/Pwe4skpfPaM8HSTPwHDhXzoJoKqdpjfRQ".to_string(),
                explorer_url: "https://explorer-jam-ccw030wxbz.t.conduit.xyz/".to_string(),
                icon_url: "http://localhost:3000/op_stack.jpeg".to_string(),
                docs_url: None,
            },
        }
    }
}

impl TryFrom<ChainId> for NetworkId {
    type Error = Error;

    fn try_from(chain_id: ChainId) -> Result<Self, Self::Error> {
        NetworkId::ALL
            .into_iter()
            .find(|network| network.id() == chain_id)
            .ok_or(Error::UnknownNetwork(chain_id))
    }
}

impl From<NetworkId> for ChainId {
    fn from(network: NetworkId) -> Self {
        network.id()
    }
}

/// Every network record known to this build.
pub fn known_networks() -> Vec<Network> {
    NetworkId::ALL.into_iter().map(NetworkId::network).collect()
}
