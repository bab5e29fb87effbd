use crate::ports::UpstreamForwarder;
use crate::services::RecordTable;
use std::sync::Arc;
use tiered_dns_domain::{DomainError, Query, ResolverRole, Response};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionSource {
    Local,
    NotFound,
    Upstream,
}

impl ResolutionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionSource::Local => "local",
            ResolutionSource::NotFound => "not_found",
            ResolutionSource::Upstream => "upstream",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub response: Response,
    pub source: ResolutionSource,
}

/// Answers a query from the resolver's own table, falling back to the
/// upstream resolver when one is configured.
pub struct ResolveQueryUseCase {
    table: Arc<RecordTable>,
    forwarder: Option<Arc<dyn UpstreamForwarder>>,
}

impl ResolveQueryUseCase {
    pub fn authoritative(table: Arc<RecordTable>) -> Self {
        Self {
            table,
            forwarder: None,
        }
    }

    pub fn forwarding(table: Arc<RecordTable>, forwarder: Arc<dyn UpstreamForwarder>) -> Self {
        Self {
            table,
            forwarder: Some(forwarder),
        }
    }

    pub fn role(&self) -> ResolverRole {
        match &self.forwarder {
            None => ResolverRole::Authoritative,
            Some(forwarder) => ResolverRole::Forwarding {
                upstream: forwarder.upstream(),
            },
        }
    }

    pub fn table(&self) -> &Arc<RecordTable> {
        &self.table
    }

    pub async fn execute(&self, query: &Query) -> Result<Resolution, DomainError> {
        let hostname = query.hostname();

        if let Some(record) = self.table.lookup(hostname) {
            debug!(hostname = %hostname, sequence_number = record.sequence_number, "Local hit");
            return Ok(Resolution {
                response: Response::Found(record),
                source: ResolutionSource::Local,
            });
        }

        let Some(forwarder) = &self.forwarder else {
            debug!(hostname = %hostname, "Local miss");
            return Ok(Resolution {
                response: Response::NotFound,
                source: ResolutionSource::NotFound,
            });
        };

        info!(hostname = %hostname, upstream = %forwarder.upstream(), "Forwarding query");
        let reply = forwarder.forward(query).await?;

        Ok(Resolution {
            response: Response::Relayed(reply),
            source: ResolutionSource::Upstream,
        })
    }
}
