use std::{
    collections::{BTreeMap, HashMap},
    str::FromStr,
    sync::{Arc, LazyLock},
};

use alloy::{
    primitives::Address,
    providers::{ProviderBuilder, RootProvider},
    transports::http::Http,
};
use reqwest::{Client, Url};

use crate::{
    chains::{known_contracts, known_networks, known_tokens, ChainId, TokenSymbol},
    error::{Error, Result},
    interface::{Network, Token, TokenView},
};

static BUILTIN: LazyLock<Arc<Registry>> = LazyLock::new(|| {
    Arc::new(Registry::new(
        known_networks(),
        known_contracts(),
        known_tokens()
            .into_iter()
            .map(|(symbol, token)| (symbol.to_string(), token)),
    ))
});

/// ## Registry
///
/// Read-only catalog of the networks, contracts and tokens the bridge UI
/// works with. Built once and never mutated, so a shared reference can be
/// handed to any number of callers.
///
/// Lookups come in two flavours. The fallible ones (`network`,
/// `explorer_link`, `try_token`, ...) return [`Error`] on a miss and leave
/// the decision to the caller. `contract_address` and `token` never fail:
/// a miss resolves to the zero address or to [`TokenView::fallback`].
///
/// ```rust
/// use intentlink::registry::Registry;
/// use alloy::primitives::Address;
///
/// let registry = Registry::builtin();
/// assert_eq!(registry.explorer_link(11155111).unwrap(), "https://sepolia.etherscan.io/");
/// assert_eq!(registry.contract_address(999999, "intentFactory"), Address::ZERO);
/// assert_eq!(registry.token(11155111, "usdt").decimals, 6);
/// ```
#[derive(Debug, Clone)]
pub struct Registry {
    networks: HashMap<ChainId, Network>,
    contracts: HashMap<String, BTreeMap<ChainId, Address>>,
    tokens: Vec<Token>,
    token_ids: HashMap<String, usize>,
}

impl Registry {
    /// Creates a registry from caller supplied tables.
    ///
    /// Expected parameters:
    /// - `networks`: One record per chain. A later record with the same chain id replaces an earlier one.
    /// - `contracts`: Contract name mapped to its deployment on each chain.
    /// - `tokens`: Lookup id and token record, in the order `all_tokens` should report them.
    pub fn new(
        networks: impl IntoIterator<Item = Network>,
        contracts: HashMap<String, BTreeMap<ChainId, Address>>,
        tokens: impl IntoIterator<Item = (String, Token)>,
    ) -> Self {
        let networks = networks
            .into_iter()
            .map(|network| (network.chain_id, network))
            .collect();

        let mut catalog: Vec<Token> = Vec::new();
        let mut token_ids = HashMap::new();
        for (id, token) in tokens {
            match token_ids.get(&id) {
                Some(&index) => catalog[index] = token,
                None => {
                    token_ids.insert(id, catalog.len());
                    catalog.push(token);
                }
            }
        }

        Registry {
            networks,
            contracts,
            tokens: catalog,
            token_ids,
        }
    }

    /// The registry compiled into this build. Constructed on first use.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Shared handle to the built-in registry.
    pub fn shared() -> Arc<Registry> {
        Arc::clone(&BUILTIN)
    }

    /// Checks that every chain referenced by a contract or token deployment
    /// is a known network.
    pub fn validate(&self) -> Result<()> {
        let contract_chains = self.contracts.values().flat_map(|deployments| deployments.keys());
        let token_chains = self.tokens.iter().flat_map(|token| token.addresses.keys());
        match contract_chains
            .chain(token_chains)
            .find(|chain_id| !self.networks.contains_key(*chain_id))
        {
            Some(chain_id) => Err(Error::UnknownNetwork(*chain_id)),
            None => Ok(()),
        }
    }

    pub fn network(&self, chain_id: ChainId) -> Result<&Network> {
        self.networks
            .get(&chain_id)
            .ok_or(Error::UnknownNetwork(chain_id))
    }

    /// All network records, in no particular order.
    pub fn networks(&self) -> impl Iterator<Item = &Network> {
        self.networks.values()
    }

    /// Block explorer base url of a network.
    pub fn explorer_link(&self, chain_id: ChainId) -> Result<&str> {
        Ok(&self.network(chain_id)?.explorer_url)
    }

    /// Icon url of a network.
    pub fn chain_icon_link(&self, chain_id: ChainId) -> Result<&str> {
        Ok(&self.network(chain_id)?.icon_url)
    }

    pub fn docs_link(&self, chain_id: ChainId) -> Result<Option<&str>> {
        Ok(self.network(chain_id)?.docs_url.as_deref())
    }

    /// Parsed HTTP RPC endpoint of a network. Networks without one report
    /// [`Error::MissingRpcEndpoint`].
    pub fn rpc_url(&self, chain_id: ChainId) -> Result<Url> {
        let network = self.network(chain_id)?;
        if network.rpc_url.is_empty() {
            return Err(Error::MissingRpcEndpoint(chain_id));
        }
        Ok(Url::from_str(&network.rpc_url)?)
    }

    /// Builds an HTTP provider for a network. No request is made until the
    /// provider is used.
    pub fn provider(&self, chain_id: ChainId) -> Result<RootProvider<Http<Client>>> {
        let url = self.rpc_url(chain_id)?;
        Ok(ProviderBuilder::new().on_http(url))
    }

    /// Address of `name` on `chain_id`. Fails if either is unknown.
    pub fn try_contract_address(&self, chain_id: ChainId, name: &str) -> Result<Address> {
        self.contracts
            .get(name)
            .and_then(|deployments| deployments.get(&chain_id))
            .copied()
            .ok_or_else(|| Error::UnknownContract {
                name: name.to_string(),
                chain_id,
            })
    }

    /// Address of `name` on `chain_id`, or the zero address when either is
    /// unknown.
    pub fn contract_address(&self, chain_id: ChainId, name: &str) -> Address {
        self.try_contract_address(chain_id, name)
            .unwrap_or_else(|error| {
                log::debug!("{}, using the zero address", error);
                Address::ZERO
            })
    }

    /// `symbol` resolved on `chain_id`. Fails if the token id is unknown or
    /// the token is not deployed on that chain.
    pub fn try_token(&self, chain_id: ChainId, symbol: &str) -> Result<TokenView> {
        self.token_ids
            .get(symbol)
            .and_then(|&index| self.tokens[index].view(chain_id))
            .ok_or_else(|| Error::UnknownToken {
                symbol: symbol.to_string(),
                chain_id,
            })
    }

    /// `symbol` resolved on `chain_id`, or [`TokenView::fallback`] on a miss.
    pub fn token(&self, chain_id: ChainId, symbol: &str) -> TokenView {
        self.try_token(chain_id, symbol).unwrap_or_else(|error| {
            log::debug!("{}, using the fallback token", error);
            TokenView::fallback()
        })
    }

    pub fn token_by_symbol(&self, chain_id: ChainId, symbol: TokenSymbol) -> TokenView {
        self.token(chain_id, symbol.as_str())
    }

    /// The whole token catalog, with every per-chain deployment, in
    /// declaration order.
    pub fn all_tokens(&self) -> &[Token] {
        &self.tokens
    }
}
