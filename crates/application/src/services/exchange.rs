use std::net::SocketAddr;
use tiered_dns_domain::DomainError;
use tracing::{debug, warn};

use crate::ports::{Datagram, DatagramTransport};

/// Sends `payload` to `peer` and waits for the next datagram `peer` sends
/// back. Datagrams from anyone else are discarded.
///
/// There is no transaction identifier on the wire, so at most one exchange
/// may be outstanding per transport.
pub async fn exchange(
    transport: &dyn DatagramTransport,
    payload: &[u8],
    peer: SocketAddr,
) -> Result<Datagram, DomainError> {
    transport.send_to(payload, peer).await?;
    debug!(peer = %peer, bytes = payload.len(), "Request sent");

    loop {
        let datagram = transport.receive().await?;
        if datagram.source == peer {
            return Ok(datagram);
        }
        warn!(
            expected = %peer,
            received_from = %datagram.source,
            "Discarding datagram from unexpected source"
        );
    }
}
