use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tiered_dns_domain::CliOverrides;
use tokio_util::sync::CancellationToken;
use tracing::info;

mod bootstrap;
mod client;
mod server;

#[derive(Parser)]
#[command(name = "tiered-dns")]
#[command(version)]
#[command(about = "Local and authoritative DNS resolvers over plain-text datagrams")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Bounded wait of each receive, in milliseconds
    #[arg(long, global = true)]
    receive_timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the authoritative resolver
    Authoritative {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<SocketAddr>,
    },

    /// Run the local resolver, forwarding misses to the authoritative one
    Local {
        /// Bind address
        #[arg(short = 'b', long)]
        bind: Option<SocketAddr>,

        /// Authoritative resolver address
        #[arg(short = 'u', long)]
        upstream: Option<SocketAddr>,
    },

    /// Send hostname queries to a resolver
    Client {
        /// Resolver address
        #[arg(short = 's', long)]
        server: Option<SocketAddr>,

        /// Look up one hostname and exit instead of prompting
        #[arg(short = 'q', long)]
        query: Option<String>,
    },
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            receive_timeout_ms: self.receive_timeout_ms,
            log_level: self.log_level.clone(),
            ..Default::default()
        };

        match &self.command {
            Command::Authoritative { bind } => overrides.authoritative_bind = *bind,
            Command::Local { bind, upstream } => {
                overrides.local_bind = *bind;
                overrides.upstream = *upstream;
            }
            Command::Client { server, .. } => overrides.client_server = *server,
        }

        overrides
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    // Initialize logging
    bootstrap::init_logging(&config);

    info!("Starting tiered-dns v{}", env!("CARGO_PKG_VERSION"));

    let shutdown = CancellationToken::new();
    bootstrap::listen_for_interrupt(shutdown.clone());

    match cli.command {
        Command::Authoritative { .. } => server::run_authoritative(&config, shutdown).await,
        Command::Local { .. } => server::run_local(&config, shutdown).await,
        Command::Client { query, .. } => client::run(&config, query, shutdown).await,
    }
}
