use std::str::FromStr;

use reqwest::{Client, Url};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Posts orders to the intent API.
///
/// Every call is a single request: no retries, no timeout beyond the
/// client's own, no translation of the response. Cloning is cheap and
/// clones share one connection pool.
#[derive(Clone, Debug)]
pub struct Submitter {
    client: Client,
    endpoint: Url,
}

impl Submitter {
    /// Creates a submitter posting to the root path of `base_url`.
    pub fn new(base_url: &Url) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &Url) -> Result<Self> {
        // `{base}/`, keeping any path prefix of the base url.
        let endpoint = Url::from_str(&format!("{}/", base_url.as_str().trim_end_matches('/')))?;
        Ok(Submitter { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Sends `payload` as a JSON body and returns the decoded response body
    /// unchanged. Transport errors, non-success statuses and bodies that are
    /// not JSON are returned to the caller.
    pub async fn submit_order<T: Serialize + ?Sized>(&self, payload: &T) -> Result<Value> {
        log::info!("Submitting order to {}", self.endpoint);
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|error| {
                log::error!("Order submission failed: {}", error);
                error
            })?;
        Ok(response.json().await?)
    }
}
