use std::sync::Arc;

use crate::{
    config::Configuration,
    error::{Error, Result},
    registry::Registry,
    submitter::Submitter,
};
use js_sys::Promise;
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};
use wasm_bindgen_futures::future_to_promise;

/// ## Intentlink instance. This is the main struct that you will interact with.
///
/// Intentlink bundles the network, contract and token registry of the bridge UI
/// with the client that submits orders to the intent API.
///
/// Example:
///
/// ```rust
/// use intentlink::{config::Configuration, core::Intentlink};
///
/// let configuration = Configuration::try_new("https://intents.example.com").unwrap();
/// let intentlink = Intentlink::try_new(configuration).unwrap();
///
/// let usdt = intentlink.registry.token(11155111, "usdt");
/// assert_eq!(usdt.symbol, "USDT");
/// assert_eq!(intentlink.submitter.endpoint().as_str(), "https://intents.example.com/");
/// ```
#[derive(Clone, Debug)]
pub struct Intentlink {
    pub configuration: Configuration,
    pub registry: Arc<Registry>,
    pub submitter: Submitter,
}

impl Intentlink {
    /// Creates a new Intentlink instance backed by the built-in registry.
    /// Installs the file logger when the configuration names a log file.
    pub fn try_new(configuration: Configuration) -> Result<Self> {
        Self::try_with_registry(configuration, Registry::shared())
    }

    /// Creates a new Intentlink instance backed by a caller supplied registry.
    pub fn try_with_registry(
        configuration: Configuration,
        registry: Arc<Registry>,
    ) -> Result<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = &configuration.log_file {
            crate::config::init_logger(path, configuration.log_level)?;
        }

        let submitter = Submitter::new(&configuration.api_url)?;
        log::info!("Intentlink ready, submitting to {}", submitter.endpoint());
        Ok(Intentlink {
            configuration,
            registry,
            submitter,
        })
    }

    /// Submits an order to the configured intent API.
    pub async fn submit_order<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Value> {
        self.submitter.submit_order(payload).await
    }
}

/// IntentlinkJS is a JavaScript wrapper for Intentlink.
/// It exposes the registry lookups and order submission when you use WASM.
#[wasm_bindgen]
pub struct IntentlinkJS {
    intentlink: Intentlink,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(typescript_custom_section)]
const TS_TOKEN_VIEW: &'static str = r#"
/**
 * A token resolved on one chain. Unknown tokens come back with empty
 * strings, 18 decimals and the zero address.
 */
export type TokenView = {
    name: string,
    symbol: string,
    decimals: number,
    iconUrl: string,
    address: string,
}
"#;

fn to_js_error(error: Error) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> std::result::Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(JsValue::from)
}

#[wasm_bindgen]
impl IntentlinkJS {
    /// Creates a new IntentlinkJS instance.
    /// ```javascript
    /// import init, { IntentlinkJS } from '../web/intentlink.js';
    ///
    /// await init();
    /// const intentlink = new IntentlinkJS("https://intents.example.com");
    /// console.log(intentlink.explorerLink(11155111));
    /// const response = await intentlink.submitOrder({ amount: "1000000" });
    /// ```
    #[wasm_bindgen(constructor)]
    pub fn new(api_url: &str) -> std::result::Result<IntentlinkJS, JsValue> {
        let configuration = Configuration::try_new(api_url).map_err(to_js_error)?;
        let intentlink = Intentlink::try_new(configuration).map_err(to_js_error)?;
        Ok(IntentlinkJS { intentlink })
    }

    #[wasm_bindgen(js_name = explorerLink)]
    pub fn explorer_link(&self, chain_id: u32) -> std::result::Result<String, JsValue> {
        self.intentlink
            .registry
            .explorer_link(chain_id.into())
            .map(str::to_string)
            .map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = chainIconLink)]
    pub fn chain_icon_link(&self, chain_id: u32) -> std::result::Result<String, JsValue> {
        self.intentlink
            .registry
            .chain_icon_link(chain_id.into())
            .map(str::to_string)
            .map_err(to_js_error)
    }

    /// Checksummed address, the zero address when unknown.
    #[wasm_bindgen(js_name = contractAddress)]
    pub fn contract_address(&self, chain_id: u32, name: &str) -> String {
        self.intentlink
            .registry
            .contract_address(chain_id.into(), name)
            .to_checksum(None)
    }

    /// Resolves to a `TokenView`.
    pub fn token(&self, chain_id: u32, symbol: &str) -> std::result::Result<JsValue, JsValue> {
        to_js(&self.intentlink.registry.token(chain_id.into(), symbol))
    }

    pub fn tokens(&self) -> std::result::Result<JsValue, JsValue> {
        to_js(self.intentlink.registry.all_tokens())
    }

    /// Submits an order. The returned promise resolves to the decoded
    /// response body and rejects with the error message.
    #[wasm_bindgen(js_name = submitOrder)]
    pub fn submit_order(&self, payload: JsValue) -> std::result::Result<Promise, JsValue> {
        let payload: Value = from_value(payload)?;
        let submitter = self.intentlink.submitter.clone();
        Ok(future_to_promise(async move {
            let response = submitter
                .submit_order(&payload)
                .await
                .map_err(to_js_error)?;
            to_js(&response)
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, HashMap},
        sync::Arc,
    };

    use alloy::primitives::Address;
    use reqwest::Url;
    use serde_json::json;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    use crate::{
        chains::known_networks, config::Configuration, core::Intentlink, error::Error,
        registry::Registry,
    };

    #[test]
    fn uses_builtin_registry() {
        let configuration = Configuration::try_new("https://intents.example.com").unwrap();
        let intentlink = Intentlink::try_new(configuration).unwrap();
        assert_eq!(
            intentlink.registry.contract_address(357, "intentFactory"),
            "0x9065Bd9D33770B38cDAf0761Bc626cf5fA45ae68".parse::<Address>().unwrap()
        );
        assert!(matches!(
            intentlink.registry.explorer_link(999999),
            Err(Error::UnknownNetwork(_))
        ));
    }

    #[test]
    fn uses_injected_registry() {
        let mut deployments = BTreeMap::new();
        deployments.insert(763373, Address::repeat_byte(7));
        let mut contracts = HashMap::new();
        contracts.insert("settlement".to_string(), deployments);
        let registry = Arc::new(Registry::new(known_networks(), contracts, Vec::new()));

        let configuration = Configuration::try_new("https://intents.example.com").unwrap();
        let intentlink = Intentlink::try_with_registry(configuration, Arc::clone(&registry)).unwrap();
        assert_eq!(
            intentlink.registry.contract_address(763373, "settlement"),
            Address::repeat_byte(7)
        );
        assert_eq!(
            intentlink.registry.contract_address(763373, "intentFactory"),
            Address::ZERO
        );
        assert!(intentlink.registry.all_tokens().is_empty());

        let copy = intentlink.clone();
        drop(intentlink);
        assert_eq!(Arc::strong_count(&registry), 2);
        drop(copy);
        assert_eq!(Arc::strong_count(&registry), 1);
    }

    #[tokio::test]
    async fn submits_through_configured_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let configuration = Configuration::try_new(&server.uri()).unwrap();
        let intentlink = Intentlink::try_new(configuration).unwrap();
        assert_eq!(
            intentlink.submitter.endpoint(),
            &Url::parse(&format!("{}/", server.uri())).unwrap()
        );
        let response = intentlink.submit_order(&json!({"amount": 1})).await.unwrap();
        assert_eq!(response, json!({"id": "abc"}));
    }
}
