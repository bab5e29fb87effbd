use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::thread;
use tiered_dns_application::use_cases::LookupHostnameUseCase;
use tiered_dns_domain::Config;
use tiered_dns_infrastructure::dns::{ChannelOptions, DatagramChannel};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

const PROMPT: &str = "Enter hostname (or 'quit' to exit): ";

pub async fn run(
    config: &Config,
    query: Option<String>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let channel = Arc::new(DatagramChannel::unbound(ChannelOptions::from(
        &config.transport,
    )));
    let use_case = LookupHostnameUseCase::new(channel.clone(), config.client.server);
    info!(resolver = %use_case.resolver(), "Client ready");

    let outcome = match query {
        Some(hostname) => lookup_once(&use_case, &hostname, &shutdown).await,
        None => prompt_loop(&use_case, &shutdown).await,
    };

    channel.close();
    outcome
}

async fn lookup_once(
    use_case: &LookupHostnameUseCase,
    hostname: &str,
    shutdown: &CancellationToken,
) -> anyhow::Result<()> {
    tokio::select! {
        _ = shutdown.cancelled() => Ok(()),
        reply = use_case.execute(hostname) => {
            println!("Response: {}", reply?);
            Ok(())
        }
    }
}

async fn prompt_loop(
    use_case: &LookupHostnameUseCase,
    shutdown: &CancellationToken,
) -> anyhow::Result<()> {
    let mut lines = spawn_stdin_reader()?;

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        let line = tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            line = lines.recv() => line.transpose()?,
        };
        let Some(line) = line else {
            // stdin closed
            return Ok(());
        };

        let hostname = line.trim();
        if hostname.eq_ignore_ascii_case("quit") {
            return Ok(());
        }
        if hostname.is_empty() {
            continue;
        }

        let reply = tokio::select! {
            _ = shutdown.cancelled() => return Ok(()),
            reply = use_case.execute(hostname) => reply,
        };

        match reply {
            Ok(response) => println!("Response: {}", response),
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => {
                warn!(error = %e, hostname = %hostname, "Lookup failed");
                println!("Error receiving response: {}", e);
            }
        }
    }
}

/// Reads stdin lines on a plain thread. A blocked read cannot be interrupted,
/// so on shutdown the thread is left detached instead of being joined.
fn spawn_stdin_reader() -> io::Result<mpsc::Receiver<io::Result<String>>> {
    let (tx, rx) = mpsc::channel(1);

    thread::Builder::new()
        .name("stdin-reader".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        })?;

    Ok(rx)
}
