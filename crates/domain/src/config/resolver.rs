use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

use super::seed::SeedRecord;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthoritativeConfig {
    #[serde(default = "default_authoritative_bind")]
    pub bind_address: SocketAddr,

    #[serde(default = "default_authoritative_records")]
    pub records: Vec<SeedRecord>,
}

impl Default for AuthoritativeConfig {
    fn default() -> Self {
        Self {
            bind_address: default_authoritative_bind(),
            records: default_authoritative_records(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalConfig {
    #[serde(default = "default_local_bind")]
    pub bind_address: SocketAddr,

    /// Authoritative resolver asked on a local miss.
    #[serde(default = "default_authoritative_bind")]
    pub upstream: SocketAddr,

    #[serde(default = "default_local_records")]
    pub records: Vec<SeedRecord>,
}

impl Default for LocalConfig {
    fn default() -> Self {
        Self {
            bind_address: default_local_bind(),
            upstream: default_authoritative_bind(),
            records: default_local_records(),
        }
    }
}

pub(crate) fn default_authoritative_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 22000))
}

pub(crate) fn default_local_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 21000))
}

fn default_authoritative_records() -> Vec<SeedRecord> {
    vec![
        SeedRecord::new_static("shop.amazone.com", "A", "3.33.147.88"),
        SeedRecord::new_static("cloud.amazone.com", "A", "127.0.0.1"),
    ]
}

fn default_local_records() -> Vec<SeedRecord> {
    vec![
        SeedRecord::new_static("www.csusm.edu", "A", "144.37.5.45"),
        SeedRecord::new_static("my.csusm.edu", "A", "144.37.5.150"),
        SeedRecord::new_static("amazone.com", "NS", "dns.amazone.com"),
        SeedRecord::new_static("dns.amazone.com", "A", "127.0.0.1"),
    ]
}
