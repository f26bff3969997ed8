/*
[INPUT]:  HTTP configuration (tenant subdomain, API key, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{EzRentOutError, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// Every tenant lives under its own subdomain of this zone.
const BASE_DOMAIN: &str = "ezrentout.com";

const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the EzRentOut API.
///
/// Holds only immutable configuration; `&self` methods issue one request
/// each and are safe to call concurrently.
#[derive(Debug)]
pub struct EzRentOutClient {
    http_client: Client,
    base_url: Url,
    api_key: String,
}

impl EzRentOutClient {
    /// Create a client for `https://{subdomain}.ezrentout.com/` with the
    /// default configuration.
    pub fn new(api_key: &str, subdomain: &str) -> Result<Self> {
        Self::with_config(ClientConfig::default(), api_key, subdomain)
    }

    /// Create a client with custom timeouts.
    pub fn with_config(config: ClientConfig, api_key: &str, subdomain: &str) -> Result<Self> {
        let base_url = format!("https://{subdomain}.{BASE_DOMAIN}/");
        Self::with_config_and_base_url(config, api_key, &base_url)
    }

    /// Create a client against an explicit base URL. Intended for tests
    /// running against a mock server.
    pub fn with_config_and_base_url(
        config: ClientConfig,
        api_key: &str,
        base_url: &str,
    ) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| EzRentOutError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            api_key: api_key.to_string(),
        })
    }

    /// Create a client from `EZRENTOUT_API_KEY` and `EZRENTOUT_SUBDOMAIN`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("EZRENTOUT_API_KEY")
            .map_err(|_| EzRentOutError::Config("EZRENTOUT_API_KEY is not set".to_string()))?;
        let subdomain = std::env::var("EZRENTOUT_SUBDOMAIN")
            .map_err(|_| EzRentOutError::Config("EZRENTOUT_SUBDOMAIN is not set".to_string()))?;
        Self::new(&api_key, &subdomain)
    }

    /// Base URL the client is bound to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a request builder with the tenant auth header attached.
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.base_url.join(endpoint)?;
        Ok(self
            .http_client
            .request(method, url)
            .header("token", &self.api_key)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE))
    }

    /// Send a request and decode the JSON body. Transport failures, non-2xx
    /// statuses, and decode failures all map to the uniform operation error.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        action: &str,
    ) -> Result<T> {
        debug!(action, "dispatching EzRentOut request");
        let result = async {
            let response = builder.send().await?;
            let response = response.error_for_status()?;
            response.json::<T>().await
        }
        .await;

        result.map_err(|e| {
            warn!(action, error = %e, "EzRentOut request failed");
            EzRentOutError::operation(action, e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_base_url_from_subdomain() {
        let client = EzRentOutClient::new("key", "acme").unwrap();
        assert_eq!(client.base_url().as_str(), "https://acme.ezrentout.com/");
    }

    #[test]
    fn test_default_config_timeouts() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let result = EzRentOutClient::with_config_and_base_url(
            ClientConfig::default(),
            "key",
            "not a url",
        );
        assert!(matches!(result, Err(EzRentOutError::UrlParse(_))));
    }
}
