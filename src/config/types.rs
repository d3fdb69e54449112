use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::light::Endpoint;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base address of the light server (e.g., "http://192.168.1.10:8000").
    /// Empty by default, which makes the fetch fail.
    #[serde(default)]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u64,
    /// UI tick interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_request_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Config {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.endpoint.clone())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            request_timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
