use crate::ports::DatagramTransport;
use crate::services::exchange;
use std::net::SocketAddr;
use std::sync::Arc;
use tiered_dns_domain::{DomainError, Query};

/// One request/reply cycle against a resolver.
pub struct LookupHostnameUseCase {
    transport: Arc<dyn DatagramTransport>,
    resolver: SocketAddr,
}

impl LookupHostnameUseCase {
    pub fn new(transport: Arc<dyn DatagramTransport>, resolver: SocketAddr) -> Self {
        Self {
            transport,
            resolver,
        }
    }

    pub fn resolver(&self) -> SocketAddr {
        self.resolver
    }

    pub async fn execute(&self, hostname: &str) -> Result<String, DomainError> {
        let query = Query::new(hostname);
        if query.hostname().is_empty() {
            return Err(DomainError::InvalidQuery("hostname is empty".to_string()));
        }

        let reply = exchange(self.transport.as_ref(), query.as_bytes(), self.resolver).await?;
        Ok(reply.text().into_owned())
    }
}
