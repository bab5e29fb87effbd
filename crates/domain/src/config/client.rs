use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::resolver::default_local_bind;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Resolver every query is sent to.
    #[serde(default = "default_local_bind")]
    pub server: SocketAddr,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server: default_local_bind(),
        }
    }
}
