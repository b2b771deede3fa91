use thiserror::Error;

use crate::chains::ChainId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown network: {0}")]
    UnknownNetwork(ChainId),
    #[error("Contract {name} is not deployed on chain {chain_id}")]
    UnknownContract { name: String, chain_id: ChainId },
    #[error("Token {symbol} is not available on chain {chain_id}")]
    UnknownToken { symbol: String, chain_id: ChainId },
    #[error("Unknown token id: {0}")]
    UnknownTokenId(String),
    #[error("Network {0} has no RPC endpoint")]
    MissingRpcEndpoint(ChainId),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Logger error: {0}")]
    Logger(String),
}
