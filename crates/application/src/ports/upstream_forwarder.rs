use async_trait::async_trait;
use std::net::SocketAddr;
use tiered_dns_domain::{DomainError, Query};

#[async_trait]
pub trait UpstreamForwarder: Send + Sync {
    /// Send the query to the upstream resolver and return its reply bytes
    /// verbatim.
    async fn forward(&self, query: &Query) -> Result<Vec<u8>, DomainError>;

    fn upstream(&self) -> SocketAddr;
}
