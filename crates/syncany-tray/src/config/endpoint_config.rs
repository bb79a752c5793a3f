use crate::config::{default_client_id, default_host, default_port};

use serde::{Deserialize, Serialize};

/// Websocket endpoint of the controlling daemon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Host the daemon listens on.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port the daemon listens on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Value of the `client_id` handshake header.
    #[serde(default = "default_client_id")]
    pub client_id: String,
}

impl EndpointConfig {
    /// Websocket URL to connect to.
    pub fn url(&self) -> String {
        format!("ws://{}:{}/", self.host, self.port)
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            client_id: default_client_id(),
        }
    }
}
