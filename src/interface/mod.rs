use std::collections::BTreeMap;

use alloy::primitives::Address;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::chains::ChainId;

/// Decimals reported for a token that could not be resolved.
pub const FALLBACK_DECIMALS: u8 = 18;

// Addresses leave the crate in EIP-55 form, the way they are written in the tables.
fn checksummed<S: Serializer>(address: &Address, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&address.to_checksum(None))
}

fn checksummed_map<S: Serializer>(
    addresses: &BTreeMap<ChainId, Address>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(addresses.len()))?;
    for (chain_id, address) in addresses {
        map.serialize_entry(chain_id, &address.to_checksum(None))?;
    }
    map.end()
}

/// A network the bridge UI knows how to talk to.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Display name
    pub name: String,
    pub chain_id: ChainId,
    /// HTTP RPC endpoint, empty when the UI relies on the wallet's own RPC
    pub rpc_url: String,
    /// Websocket RPC endpoint, may be empty
    pub wss_url: String,
    /// Block explorer base url, ends with a slash
    pub explorer_url: String,
    pub icon_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub docs_url: Option<String>,
}

/// A token together with its deployment on every supported chain.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub icon_url: String,
    #[serde(serialize_with = "checksummed_map")]
    pub addresses: BTreeMap<ChainId, Address>,
}

impl Token {
    /// Resolves this token on a single chain. Returns `None` when the token
    /// has no deployment there.
    pub fn view(&self, chain_id: ChainId) -> Option<TokenView> {
        let address = *self.addresses.get(&chain_id)?;
        Some(TokenView {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            icon_url: self.icon_url.clone(),
            address,
        })
    }
}

/// A token resolved on one chain.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TokenView {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub icon_url: String,
    #[serde(serialize_with = "checksummed")]
    pub address: Address,
}

impl TokenView {
    /// The value handed out when a token lookup misses: empty strings,
    /// 18 decimals and the zero address.
    pub fn fallback() -> Self {
        TokenView {
            name: String::new(),
            symbol: String::new(),
            decimals: FALLBACK_DECIMALS,
            icon_url: String::new(),
            address: Address::ZERO,
        }
    }

    /// Whether this view is the lookup-miss fallback. A real token that
    /// happens to sit at the zero address is not.
    pub fn is_fallback(&self) -> bool {
        *self == Self::fallback()
    }
}

impl Default for TokenView {
    fn default() -> Self {
        Self::fallback()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use alloy::primitives::Address;

    use crate::interface::{Token, TokenView};

    fn sample() -> Token {
        let mut addresses = BTreeMap::new();
        addresses.insert(1, Address::repeat_byte(0x11));
        Token {
            name: "Sample".to_string(),
            symbol: "SMP".to_string(),
            decimals: 8,
            icon_url: "https://icons.example/smp.png".to_string(),
            addresses,
        }
    }

    #[test]
    fn view_resolves_single_chain() {
        let view = sample().view(1).unwrap();
        assert_eq!(view.symbol, "SMP");
        assert_eq!(view.decimals, 8);
        assert_eq!(view.address, Address::repeat_byte(0x11));
        assert!(!view.is_fallback());
    }

    #[test]
    fn view_misses_unknown_chain() {
        assert!(sample().view(2).is_none());
    }

    #[test]
    fn fallback_uses_eighteen_decimals() {
        let fallback = TokenView::default();
        assert_eq!(fallback.name, "");
        assert_eq!(fallback.symbol, "");
        assert_eq!(fallback.icon_url, "");
        assert_eq!(fallback.decimals, 18);
        assert_eq!(fallback.address, Address::ZERO);
        assert!(fallback.is_fallback());
    }

    #[test]
    fn zero_address_token_is_not_fallback() {
        let mut token = sample();
        token.addresses.insert(5, Address::ZERO);
        let view = token.view(5).unwrap();
        assert_eq!(view.address, Address::ZERO);
        assert!(!view.is_fallback());
    }

    #[test]
    fn addresses_serialize_checksummed() {
        let address: Address = "0xBF882Fc99800A93494fe4844DC0002FcbaA79A7A".parse().unwrap();
        let mut token = sample();
        token.addresses.insert(11155111, address);

        let view = serde_json::to_value(token.view(11155111).unwrap()).unwrap();
        assert_eq!(view["address"], "0xBF882Fc99800A93494fe4844DC0002FcbaA79A7A");

        let record = serde_json::to_value(&token).unwrap();
        assert_eq!(
            record["addresses"]["11155111"],
            "0xBF882Fc99800A93494fe4844DC0002FcbaA79A7A"
        );

        // Checksummed strings read back into the same record.
        let back: Token = serde_json::from_value(record).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(TokenView::fallback()).unwrap();
        assert!(json.get("iconUrl").is_some());
        assert!(json.get("icon_url").is_none());
    }
}
