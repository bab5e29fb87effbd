use crate::dns::transport::{ChannelOptions, DatagramChannel};
use std::net::SocketAddr;
use std::sync::Arc;
use tiered_dns_application::ports::{Datagram, TableReporter};
use tiered_dns_application::use_cases::ResolveQueryUseCase;
use tiered_dns_domain::{DomainError, Query};
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Single sequential accept loop: each query, including any upstream round
/// trip, is answered before the next datagram is read.
pub struct ResolverServer {
    channel: DatagramChannel,
    use_case: Arc<ResolveQueryUseCase>,
    reporter: Arc<dyn TableReporter>,
}

impl ResolverServer {
    pub async fn bind(
        addr: SocketAddr,
        options: ChannelOptions,
        use_case: Arc<ResolveQueryUseCase>,
        reporter: Arc<dyn TableReporter>,
    ) -> Result<Self, DomainError> {
        let channel = DatagramChannel::bound(addr, options).await?;
        Ok(Self {
            channel,
            use_case,
            reporter,
        })
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.channel.local_addr()
    }

    /// Serves until `shutdown` is cancelled (`Ok`) or a fatal transport error
    /// occurs (`Err`). The socket is released on both paths.
    pub async fn run(self, shutdown: CancellationToken) -> Result<(), DomainError> {
        let local_addr = self.local_addr()?;
        info!(
            bind_address = %local_addr,
            role = %self.use_case.role(),
            records = self.use_case.table().len(),
            "Resolver listening"
        );

        let outcome = self.serve(&shutdown).await;
        self.channel.close();

        match &outcome {
            Ok(()) => info!(bind_address = %local_addr, "Resolver stopped"),
            Err(e) => error!(bind_address = %local_addr, error = %e, "Resolver stopped on transport error"),
        }
        outcome
    }

    async fn serve(&self, shutdown: &CancellationToken) -> Result<(), DomainError> {
        loop {
            let Some(datagram) = self.channel.receive_until_cancelled(shutdown).await? else {
                return Ok(());
            };

            let handled = tokio::select! {
                biased;
                _ = shutdown.cancelled() => return Ok(()),
                handled = self.handle(datagram) => handled,
            };

            if let Err(e) = handled {
                if e.is_fatal() {
                    return Err(e);
                }
                warn!(error = %e, "Request dropped");
            }
        }
    }

    async fn handle(&self, datagram: Datagram) -> Result<(), DomainError> {
        let query = Query::parse(&datagram.payload)?;
        let resolution = self.use_case.execute(&query).await?;

        self.channel
            .send_to(&resolution.response.to_wire(), datagram.source)
            .await?;

        info!(
            hostname = %query.hostname(),
            client = %datagram.source,
            source = resolution.source.as_str(),
            found = !resolution.response.is_not_found(),
            "Query served"
        );

        self.reporter.report(&self.use_case.table().snapshot());
        Ok(())
    }
}
