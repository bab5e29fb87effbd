use std::net::SocketAddr;
use std::sync::Arc;
use tiered_dns_application::ports::UpstreamForwarder;
use tiered_dns_application::services::RecordTable;
use tiered_dns_application::use_cases::ResolveQueryUseCase;
use tiered_dns_domain::{Config, SeedRecord};
use tiered_dns_infrastructure::dns::{ChannelOptions, ResolverServer, UdpForwarder};
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::console::ConsoleTableReporter;

pub async fn run_authoritative(config: &Config, shutdown: CancellationToken) -> anyhow::Result<()> {
    let table = seed_table("authoritative", &config.authoritative.records);
    let use_case = Arc::new(ResolveQueryUseCase::authoritative(table));

    serve(
        config.authoritative.bind_address,
        ChannelOptions::from(&config.transport),
        use_case,
        shutdown,
    )
    .await
}

pub async fn run_local(config: &Config, shutdown: CancellationToken) -> anyhow::Result<()> {
    let options = ChannelOptions::from(&config.transport);
    let table = seed_table("local", &config.local.records);
    let forwarder = Arc::new(UdpForwarder::new(config.local.upstream, options));
    let use_case = Arc::new(ResolveQueryUseCase::forwarding(
        table,
        forwarder.clone() as Arc<dyn UpstreamForwarder>,
    ));

    let outcome = serve(config.local.bind_address, options, use_case, shutdown).await;
    forwarder.close();
    outcome
}

async fn serve(
    bind_address: SocketAddr,
    options: ChannelOptions,
    use_case: Arc<ResolveQueryUseCase>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let server =
        ResolverServer::bind(bind_address, options, use_case, Arc::new(ConsoleTableReporter))
            .await?;
    server.run(shutdown).await?;
    Ok(())
}

fn seed_table(section: &str, seeds: &[SeedRecord]) -> Arc<RecordTable> {
    let table = RecordTable::from_seeds(seeds);
    info!(resolver = section, records = table.len(), "Record table seeded");
    Arc::new(table)
}
