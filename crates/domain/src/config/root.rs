use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

use super::client::ClientConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::{AuthoritativeConfig, LocalConfig};
use super::seed::SeedRecord;
use super::transport::{TransportConfig, MAX_UDP_PAYLOAD};

const LOCAL_CONFIG_PATH: &str = "tiered-dns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/tiered-dns/config.toml";

/// Main configuration structure shared by both resolvers and the client
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct Config {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Receive wait and datagram size limits
    pub transport: TransportConfig,

    /// Authoritative resolver address and seed records
    pub authoritative: AuthoritativeConfig,

    /// Local (forwarding) resolver address, upstream and seed records
    pub local: LocalConfig,

    /// Query client target
    pub client: ClientConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. tiered-dns.toml in current directory
    /// 3. /etc/tiered-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(addr) = overrides.authoritative_bind {
            self.authoritative.bind_address = addr;
        }
        if let Some(addr) = overrides.local_bind {
            self.local.bind_address = addr;
        }
        if let Some(addr) = overrides.upstream {
            self.local.upstream = addr;
        }
        if let Some(addr) = overrides.client_server {
            self.client.server = addr;
        }
        if let Some(ms) = overrides.receive_timeout_ms {
            self.transport.receive_timeout_ms = ms;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.transport.receive_timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Receive timeout must be greater than 0".to_string(),
            ));
        }

        let size = self.transport.max_datagram_size;
        if size == 0 || size > MAX_UDP_PAYLOAD {
            return Err(ConfigError::Validation(format!(
                "Datagram size {} is outside 1..={}",
                size, MAX_UDP_PAYLOAD
            )));
        }

        if self.local.upstream == self.local.bind_address {
            return Err(ConfigError::Validation(format!(
                "Local resolver cannot forward to its own address {}",
                self.local.bind_address
            )));
        }

        validate_seeds("authoritative", &self.authoritative.records)?;
        validate_seeds("local", &self.local.records)?;

        Ok(())
    }
}

fn validate_seeds(section: &str, records: &[SeedRecord]) -> Result<(), ConfigError> {
    if let Some(position) = records.iter().position(|r| r.name.trim().is_empty()) {
        return Err(ConfigError::Validation(format!(
            "Record {} in [{}] has an empty name",
            position + 1,
            section
        )));
    }
    Ok(())
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub authoritative_bind: Option<SocketAddr>,
    pub local_bind: Option<SocketAddr>,
    pub upstream: Option<SocketAddr>,
    pub client_server: Option<SocketAddr>,
    pub receive_timeout_ms: Option<u64>,
    pub log_level: Option<String>,
}
