pub mod client;
pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;
pub mod seed;
pub mod transport;

pub use client::ClientConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{AuthoritativeConfig, LocalConfig};
pub use root::{CliOverrides, Config};
pub use seed::SeedRecord;
pub use transport::TransportConfig;
