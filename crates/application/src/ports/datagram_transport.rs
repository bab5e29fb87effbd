use async_trait::async_trait;
use std::borrow::Cow;
use std::net::SocketAddr;
use tiered_dns_domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub payload: Vec<u8>,
    pub source: SocketAddr,
}

impl Datagram {
    pub fn new(payload: impl Into<Vec<u8>>, source: SocketAddr) -> Self {
        Self {
            payload: payload.into(),
            source,
        }
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.payload)
    }
}

/// Connectionless, unordered, unreliable datagram endpoint.
#[async_trait]
pub trait DatagramTransport: Send + Sync {
    /// Fire-and-forget. No acknowledgment, no delivery guarantee.
    async fn send_to(&self, payload: &[u8], destination: SocketAddr) -> Result<(), DomainError>;

    /// Waits until a datagram arrives. Wait expiry is retried internally and
    /// never surfaces; any other failure is returned.
    async fn receive(&self) -> Result<Datagram, DomainError>;
}
