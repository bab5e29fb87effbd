use async_trait::async_trait;
use std::net::SocketAddr;
use tiered_dns_application::ports::UpstreamForwarder;
use tiered_dns_application::services::exchange;
use tiered_dns_domain::{DomainError, Query};
use tokio::sync::Mutex;
use tracing::debug;

use crate::dns::transport::{ChannelOptions, DatagramChannel};

/// Forwards queries over its own ephemeral endpoint, separate from the socket
/// the resolver answers clients on, so an upstream reply can never be taken
/// for a client query and vice versa.
pub struct UdpForwarder {
    channel: DatagramChannel,
    upstream: SocketAddr,
    // No transaction ids on the wire: one exchange at a time per endpoint.
    in_flight: Mutex<()>,
}

impl UdpForwarder {
    pub fn new(upstream: SocketAddr, options: ChannelOptions) -> Self {
        Self {
            channel: DatagramChannel::unbound(options),
            upstream,
            in_flight: Mutex::new(()),
        }
    }

    pub fn close(&self) -> bool {
        self.channel.close()
    }
}

#[async_trait]
impl UpstreamForwarder for UdpForwarder {
    async fn forward(&self, query: &Query) -> Result<Vec<u8>, DomainError> {
        let _exchange = self.in_flight.lock().await;

        let reply = exchange(&self.channel, query.as_bytes(), self.upstream).await?;
        debug!(
            hostname = %query.hostname(),
            upstream = %self.upstream,
            bytes_received = reply.payload.len(),
            "Upstream reply received"
        );

        Ok(reply.payload)
    }

    fn upstream(&self) -> SocketAddr {
        self.upstream
    }
}
