//! Tiered DNS Domain Layer
pub mod config;
pub mod errors;
pub mod query;
pub mod resolver_role;
pub mod resource_record;
pub mod response;

pub use config::{CliOverrides, Config, ConfigError, SeedRecord};
pub use errors::DomainError;
pub use query::Query;
pub use resolver_role::ResolverRole;
pub use resource_record::{ResourceRecord, TABLE_HEADER};
pub use response::{Response, NOT_FOUND};
