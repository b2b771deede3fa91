//! ## Intentlink
//!
//! Intentlink is the configuration layer of the intent bridge UI. It knows which networks the
//! bridge runs on, where the intent factory is deployed on each of them and which tokens can be
//! bridged, and it carries the small client that submits orders to the intent API.
//!
//! Registry lookups are plain reads over data compiled into the crate. Token and contract
//! lookups never fail: an unknown chain or name resolves to the zero address, or to a token with
//! empty fields and 18 decimals. Network lookups and order submission return an [`error::Error`]
//! for the caller to handle.
//!
//! ```rust
//! use intentlink::registry::Registry;
//!
//! let registry = Registry::builtin();
//! let usdt = registry.token(763373, "usdt");
//! println!("{} on {}", usdt.address, registry.explorer_link(763373).unwrap());
//! ```
pub mod chains;
pub mod config;
pub mod core;
pub mod error;
pub mod interface;
pub mod registry;
pub mod submitter;

pub use self::{
    core::{Intentlink, IntentlinkJS},
    error::{Error, Result},
    registry::Registry,
};
