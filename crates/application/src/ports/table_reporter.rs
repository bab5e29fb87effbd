use tiered_dns_domain::ResourceRecord;

/// Receives the table snapshot after every served request.
pub trait TableReporter: Send + Sync {
    fn report(&self, snapshot: &[ResourceRecord]);
}

pub struct NoopTableReporter;

impl TableReporter for NoopTableReporter {
    fn report(&self, _snapshot: &[ResourceRecord]) {}
}
