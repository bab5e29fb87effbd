use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Largest payload a UDP datagram over IPv4 can carry.
pub const MAX_UDP_PAYLOAD: usize = 65507;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    /// Bounded wait of a single receive attempt. Expiry is retried silently.
    #[serde(default = "default_receive_timeout_ms")]
    pub receive_timeout_ms: u64,

    #[serde(default = "default_max_datagram_size")]
    pub max_datagram_size: usize,
}

impl TransportConfig {
    pub fn receive_timeout(&self) -> Duration {
        Duration::from_millis(self.receive_timeout_ms)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            receive_timeout_ms: default_receive_timeout_ms(),
            max_datagram_size: default_max_datagram_size(),
        }
    }
}

fn default_receive_timeout_ms() -> u64 {
    1000
}

fn default_max_datagram_size() -> usize {
    4096
}
