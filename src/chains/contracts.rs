// contracts.rs
use std::collections::{BTreeMap, HashMap};

use alloy::primitives::{address, Address};

use super::{ChainId, NetworkId};

/// Name of the intent factory contract.
pub const INTENT_FACTORY: &str = "intentFactory";

pub fn intent_factory() -> BTreeMap<ChainId, Address> {
    let deployment = address!("9065Bd9D33770B38cDAf0761Bc626cf5fA45ae68");
    let mut map = BTreeMap::new();
    map.insert(NetworkId::Sepolia.id(), deployment);
    map.insert(NetworkId::InkSepolia.id(), deployment);
    map.insert(NetworkId::OpStack.id(), deployment);
    map
}

pub fn known_contracts() -> HashMap<String, BTreeMap<ChainId, Address>> {
    let mut map = HashMap::new();
    map.insert(INTENT_FACTORY.to_string(), intent_factory());
    map
}
