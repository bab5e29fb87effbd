use async_trait::async_trait;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tiered_dns_application::ports::{TableReporter, UpstreamForwarder};
use tiered_dns_application::services::RecordTable;
use tiered_dns_application::use_cases::ResolveQueryUseCase;
use tiered_dns_domain::{DomainError, Query, ResourceRecord, SeedRecord};
use tiered_dns_infrastructure::dns::{ChannelOptions, ResolverServer, UdpForwarder};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub fn loopback() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

pub fn fast_options() -> ChannelOptions {
    ChannelOptions {
        receive_timeout: Duration::from_millis(20),
        max_datagram_size: 4096,
    }
}

pub fn authoritative_seeds() -> Vec<SeedRecord> {
    vec![
        SeedRecord::new_static("shop.amazone.com", "A", "3.33.147.88"),
        SeedRecord::new_static("cloud.amazone.com", "A", "127.0.0.1"),
    ]
}

pub fn local_seeds() -> Vec<SeedRecord> {
    vec![
        SeedRecord::new_static("www.csusm.edu", "A", "144.37.5.45"),
        SeedRecord::new_static("my.csusm.edu", "A", "144.37.5.150"),
        SeedRecord::new_static("amazone.com", "NS", "dns.amazone.com"),
        SeedRecord::new_static("dns.amazone.com", "A", "127.0.0.1"),
    ]
}

/// Counts served requests; each served request reports exactly once.
#[derive(Default)]
pub struct CountingReporter {
    served: AtomicUsize,
}

impl CountingReporter {
    pub fn served(&self) -> usize {
        self.served.load(Ordering::SeqCst)
    }
}

impl TableReporter for CountingReporter {
    fn report(&self, _snapshot: &[ResourceRecord]) {
        self.served.fetch_add(1, Ordering::SeqCst);
    }
}

/// Upstream whose every exchange fails with a socket error.
pub struct FailingForwarder {
    pub upstream: SocketAddr,
    pub error: DomainError,
}

#[async_trait]
impl UpstreamForwarder for FailingForwarder {
    async fn forward(&self, _query: &Query) -> Result<Vec<u8>, DomainError> {
        Err(self.error.clone())
    }

    fn upstream(&self) -> SocketAddr {
        self.upstream
    }
}

pub struct RunningResolver {
    pub addr: SocketAddr,
    pub reporter: Arc<CountingReporter>,
    pub table: Arc<RecordTable>,
    pub shutdown: CancellationToken,
    pub handle: JoinHandle<Result<(), DomainError>>,
}

impl RunningResolver {
    pub async fn authoritative(seeds: &[SeedRecord]) -> Self {
        let table = Arc::new(RecordTable::from_seeds(seeds));
        let use_case = Arc::new(ResolveQueryUseCase::authoritative(table.clone()));
        Self::start(use_case, table).await
    }

    pub async fn forwarding(seeds: &[SeedRecord], upstream: SocketAddr) -> Self {
        Self::with_forwarder(seeds, Arc::new(UdpForwarder::new(upstream, fast_options()))).await
    }

    pub async fn with_forwarder(
        seeds: &[SeedRecord],
        forwarder: Arc<dyn UpstreamForwarder>,
    ) -> Self {
        let table = Arc::new(RecordTable::from_seeds(seeds));
        let use_case = Arc::new(ResolveQueryUseCase::forwarding(table.clone(), forwarder));
        Self::start(use_case, table).await
    }

    async fn start(use_case: Arc<ResolveQueryUseCase>, table: Arc<RecordTable>) -> Self {
        let reporter = Arc::new(CountingReporter::default());
        let server = ResolverServer::bind(loopback(), fast_options(), use_case, reporter.clone())
            .await
            .unwrap();
        let addr = server.local_addr().unwrap();
        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(server.run(shutdown.clone()));

        Self {
            addr,
            reporter,
            table,
            shutdown,
            handle,
        }
    }

    pub async fn stop(self) -> Result<(), DomainError> {
        self.shutdown.cancel();
        self.handle.await.unwrap()
    }
}
