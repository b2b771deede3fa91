use std::{collections::BTreeMap, fmt, str::FromStr};

use alloy::primitives::{address, Address};

use super::{ChainId, NetworkId};
use crate::{error::Error, interface::Token};

/// Identifiers of the tokens the bridge supports. These are the lookup keys,
/// not the ticker shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSymbol {
    Usdt,
    Wbtc,
}

impl TokenSymbol {
    /// Declaration order, which is also the catalog order.
    pub const ALL: [TokenSymbol; 2] = [TokenSymbol::Usdt, TokenSymbol::Wbtc];

    pub const fn as_str(self) -> &'static str {
        match self {
            TokenSymbol::Usdt => "usdt",
            TokenSymbol::Wbtc => "wbtc",
        }
    }

    pub fn token(self) -> Token {
        match self {
            TokenSymbol::Usdt => Token {
                name: "Tether USD".to_string(),
                symbol: "USDT".to_string(),
                decimals: 6,
                icon_url: "https://static.cx.metamask.io/api/v1/tokenIcons/1/0xdac17f958d2ee523a2206206994597c13d831ec7.png".to_string(),
                addresses: everywhere(address!("BF882Fc99800A93494fe4844DC0002FcbaA79A7A")),
            },
            TokenSymbol::Wbtc => Token {
                name: "wrapped BTC".to_string(),
                symbol: "WBTC".to_string(),
                decimals: 18,
                icon_url: "https://static.cx.metamask.io/api/v1/tokenIcons/1/0x2260fac5e5542a773aa44fbcfedf7c193bc2c599.png".to_string(),
                addresses: everywhere(address!("c580C2C0005798751cd0c221292667deeb991157")),
            },
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenSymbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenSymbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| Error::UnknownTokenId(s.to_string()))
    }
}

// Test deployments share one address across all chains.
fn everywhere(deployment: Address) -> BTreeMap<ChainId, Address> {
    NetworkId::ALL
        .into_iter()
        .map(|network| (network.id(), deployment))
        .collect()
}

/// The token catalog in declaration order, keyed by lookup id.
pub fn known_tokens() -> Vec<(TokenSymbol, Token)> {
    TokenSymbol::ALL
        .into_iter()
        .map(|symbol| (symbol, symbol.token()))
        .collect()
}
