use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::{Error, Result};

/// HTTP plumbing for one gateway. Infinitude labels its JSON bodies
/// `text/html`, so responses are read as text and parsed by content.
pub(crate) struct Transport {
    http: reqwest::Client,
    base_url: String,
}

impl Transport {
    pub fn new(host: &str, port: u16, ssl: bool) -> Self {
        let http = reqwest::Client::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .expect("failed to build HTTP client");
        let scheme = if ssl { "https" } else { "http" };
        Self {
            http,
            base_url: format!("{scheme}://{host}:{port}"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get(&self, endpoint: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, "GET");
        let resp = self.http.get(&url).send().await?.error_for_status()?;
        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| Error::Protocol(format!("undecodable body from {endpoint}: {e}")))
    }

    /// POST with a form-encoded body, the only write encoding the gateway
    /// accepts. Some write endpoints answer with an empty or non-JSON body;
    /// that is not a failure.
    pub async fn post_form<T: Serialize + ?Sized>(&self, endpoint: &str, params: &T) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(url = %url, "POST");
        let resp = self
            .http
            .post(&url)
            .form(params)
            .send()
            .await?
            .error_for_status()?;
        let body = resp.text().await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(_) => {
                debug!(endpoint, "non-JSON response to POST");
                Ok(Value::Null)
            }
        }
    }
}
