//! Datagram channel over a single UDP socket
//!
//! Messages are sent as-is (no framing). Every receive is a bounded wait;
//! wait expiry is retried silently so a listening loop stays responsive to
//! cancellation without blocking forever inside the socket.

use async_trait::async_trait;
use std::io;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tiered_dns_application::ports::{Datagram, DatagramTransport};
use tiered_dns_domain::config::TransportConfig;
use tiered_dns_domain::DomainError;
use tokio::net::UdpSocket;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace};

const DEFAULT_RECEIVE_TIMEOUT: Duration = Duration::from_secs(1);

/// Maximum application payload per datagram
const DEFAULT_MAX_DATAGRAM_SIZE: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelOptions {
    pub receive_timeout: Duration,
    pub max_datagram_size: usize,
}

impl Default for ChannelOptions {
    fn default() -> Self {
        Self {
            receive_timeout: DEFAULT_RECEIVE_TIMEOUT,
            max_datagram_size: DEFAULT_MAX_DATAGRAM_SIZE,
        }
    }
}

impl From<&TransportConfig> for ChannelOptions {
    fn from(config: &TransportConfig) -> Self {
        Self {
            receive_timeout: config.receive_timeout(),
            max_datagram_size: config.max_datagram_size,
        }
    }
}

enum SocketState {
    Unbound,
    Bound(Arc<UdpSocket>),
    Closed,
}

/// One connectionless endpoint.
///
/// A channel starts unbound. Servers call [`bind`](Self::bind) once; clients
/// just send, which binds an ephemeral port on first use.
pub struct DatagramChannel {
    state: Mutex<SocketState>,
    options: ChannelOptions,
}

impl DatagramChannel {
    pub fn unbound(options: ChannelOptions) -> Self {
        Self {
            state: Mutex::new(SocketState::Unbound),
            options,
        }
    }

    pub async fn bound(addr: SocketAddr, options: ChannelOptions) -> Result<Self, DomainError> {
        let channel = Self::unbound(options);
        channel.bind(addr).await?;
        Ok(channel)
    }

    /// Binds the channel to `addr` and returns the local address.
    ///
    /// Binding an already-bound channel does nothing and reports the existing
    /// binding.
    pub async fn bind(&self, addr: SocketAddr) -> Result<SocketAddr, DomainError> {
        if let Some(existing) = self.socket()? {
            return report_existing(&existing);
        }

        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::Transport(format!("Failed to bind {}: {}", addr, e)))?;
        let local_addr = local_addr_of(&socket)?;

        let mut state = self.state();
        if let SocketState::Bound(existing) = &*state {
            return report_existing(existing);
        }
        if matches!(*state, SocketState::Closed) {
            return Err(DomainError::ChannelClosed);
        }

        *state = SocketState::Bound(Arc::new(socket));
        debug!(local_addr = %local_addr, "Datagram channel bound");
        Ok(local_addr)
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        let socket = self.socket()?.ok_or(DomainError::ChannelNotBound)?;
        local_addr_of(&socket)
    }

    pub async fn send_to(&self, payload: &[u8], destination: SocketAddr) -> Result<(), DomainError> {
        if payload.len() > self.options.max_datagram_size {
            return Err(DomainError::PayloadTooLarge {
                size: payload.len(),
                max: self.options.max_datagram_size,
            });
        }

        let socket = match self.socket()? {
            Some(socket) => socket,
            None => self.bind_ephemeral(destination).await?,
        };

        let bytes_sent = socket
            .send_to(payload, destination)
            .await
            .map_err(|e| transport_error(e, Some(destination)))?;

        trace!(destination = %destination, bytes_sent, "Datagram sent");
        Ok(())
    }

    /// Single bounded wait. `Ok(None)` means the wait expired with no data.
    pub async fn recv_timeout(&self, timeout: Duration) -> Result<Option<Datagram>, DomainError> {
        let socket = self.socket()?.ok_or(DomainError::ChannelNotBound)?;
        let mut buf = vec![0u8; self.options.max_datagram_size];

        match tokio::time::timeout(timeout, socket.recv_from(&mut buf)).await {
            Err(_) => {
                trace!("Receive wait expired");
                Ok(None)
            }
            Ok(Ok((bytes_received, source))) => {
                buf.truncate(bytes_received);
                trace!(source = %source, bytes_received, "Datagram received");
                Ok(Some(Datagram::new(buf, source)))
            }
            Ok(Err(e)) if e.kind() == io::ErrorKind::Interrupted => Ok(None),
            Ok(Err(e)) => Err(transport_error(e, None)),
        }
    }

    /// Waits for the next datagram, retrying every expired wait.
    pub async fn receive(&self) -> Result<Datagram, DomainError> {
        loop {
            if let Some(datagram) = self.recv_timeout(self.options.receive_timeout).await? {
                return Ok(datagram);
            }
        }
    }

    /// Like [`receive`](Self::receive) but returns `Ok(None)` once `shutdown`
    /// is cancelled.
    pub async fn receive_until_cancelled(
        &self,
        shutdown: &CancellationToken,
    ) -> Result<Option<Datagram>, DomainError> {
        loop {
            if shutdown.is_cancelled() {
                return Ok(None);
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => return Ok(None),
                received = self.recv_timeout(self.options.receive_timeout) => {
                    if let Some(datagram) = received? {
                        return Ok(Some(datagram));
                    }
                }
            }
        }
    }

    /// Releases the socket. Safe to call more than once; returns whether a
    /// socket was actually released.
    pub fn close(&self) -> bool {
        let previous = std::mem::replace(&mut *self.state(), SocketState::Closed);
        match previous {
            SocketState::Bound(socket) => {
                match socket.local_addr() {
                    Ok(addr) => debug!(local_addr = %addr, "Datagram channel closed"),
                    Err(_) => debug!("Datagram channel closed"),
                }
                true
            }
            SocketState::Unbound | SocketState::Closed => false,
        }
    }

    async fn bind_ephemeral(&self, destination: SocketAddr) -> Result<Arc<UdpSocket>, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let local: SocketAddr = if destination.is_ipv4() {
            (Ipv4Addr::UNSPECIFIED, 0).into()
        } else {
            (Ipv6Addr::UNSPECIFIED, 0).into()
        };
        self.bind(local).await?;
        self.socket()?.ok_or(DomainError::ChannelNotBound)
    }

    fn socket(&self) -> Result<Option<Arc<UdpSocket>>, DomainError> {
        match &*self.state() {
            SocketState::Unbound => Ok(None),
            SocketState::Bound(socket) => Ok(Some(Arc::clone(socket))),
            SocketState::Closed => Err(DomainError::ChannelClosed),
        }
    }

    fn state(&self) -> MutexGuard<'_, SocketState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DatagramTransport for DatagramChannel {
    async fn send_to(&self, payload: &[u8], destination: SocketAddr) -> Result<(), DomainError> {
        DatagramChannel::send_to(self, payload, destination).await
    }

    async fn receive(&self) -> Result<Datagram, DomainError> {
        DatagramChannel::receive(self).await
    }
}

fn report_existing(socket: &UdpSocket) -> Result<SocketAddr, DomainError> {
    let local_addr = local_addr_of(socket)?;
    info!(local_addr = %local_addr, "Socket is already bound");
    Ok(local_addr)
}

fn local_addr_of(socket: &UdpSocket) -> Result<SocketAddr, DomainError> {
    socket
        .local_addr()
        .map_err(|e| DomainError::Transport(format!("Failed to read local address: {}", e)))
}

fn transport_error(err: io::Error, peer: Option<SocketAddr>) -> DomainError {
    match err.kind() {
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionRefused => {
            DomainError::TransportUnreachable {
                peer: peer
                    .map(|addr| addr.to_string())
                    .unwrap_or_else(|| "the other socket".to_string()),
            }
        }
        _ => DomainError::Transport(err.to_string()),
    }
}
