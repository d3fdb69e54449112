//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use lightboard::client::{LightClient, TimeoutConfig};
use lightboard::light::Endpoint;
use ratatui::buffer::Buffer;
use std::sync::Arc;
use std::time::Duration;

pub use mock_service::{CapturedRequest, MockLightServer, MockResponse};

pub const KITCHEN_AND_HALL: &str = r#"[{"id":1,"name":"Kitchen"},{"id":2,"name":"Hall"}]"#;

/// Client with short timeouts so failing cases finish quickly.
pub fn test_client(endpoint: &str) -> Arc<LightClient> {
    let timeouts = TimeoutConfig {
        connect: Duration::from_secs(1),
        request: Duration::from_secs(2),
    };
    Arc::new(LightClient::new(Endpoint::new(endpoint), timeouts).expect("client builds"))
}

/// Address on which nothing listens.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Flatten a rendered buffer into lines of text.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buffer[(area.x + x, area.y + y)].symbol())
                .collect::<String>()
        })
        .collect()
}
