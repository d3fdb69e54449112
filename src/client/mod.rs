//! HTTP client for the light server.

mod error;

pub use error::FetchError;

use reqwest::{Client, Url};
use std::time::Duration;

use crate::config::Config;
use crate::light::{Endpoint, Light};

/// Timeouts applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeoutConfig {
    pub connect: Duration,
    pub request: Duration,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        TimeoutConfig::from(&Config::default())
    }
}

impl From<&Config> for TimeoutConfig {
    fn from(config: &Config) -> Self {
        Self {
            connect: Duration::from_secs(config.connect_timeout_seconds),
            request: Duration::from_secs(config.request_timeout_seconds),
        }
    }
}

/// Reads the light collection from `GET {endpoint}/light`.
///
/// No query parameters and no authentication headers are sent.
pub struct LightClient {
    client: Client,
    endpoint: Endpoint,
}

impl LightClient {
    pub fn new(endpoint: Endpoint, timeouts: TimeoutConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(timeouts.connect)
            .timeout(timeouts.request)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Fetch the light collection, in server order.
    pub async fn fetch_lights(&self) -> Result<Vec<Light>, FetchError> {
        let url = self.endpoint.lights_url();
        let target = Url::parse(&url).map_err(|e| FetchError::InvalidUrl {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        tracing::info!(url = %url, "Fetching lights");

        let response = self
            .client
            .get(target)
            .send()
            .await
            .map_err(|e| FetchError::Connection {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Connection {
                url: url.clone(),
                source: e,
            })?;

        // The light server encodes an empty collection as `null`
        let lights: Vec<Light> = serde_json::from_slice::<Option<Vec<Light>>>(&body)
            .map_err(|e| FetchError::Decode { url, source: e })?
            .unwrap_or_default();

        tracing::info!(count = lights.len(), "Lights fetched");
        Ok(lights)
    }
}
