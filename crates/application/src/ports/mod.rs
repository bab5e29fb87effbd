mod datagram_transport;
mod table_reporter;
mod upstream_forwarder;

pub use datagram_transport::{Datagram, DatagramTransport};
pub use table_reporter::{NoopTableReporter, TableReporter};
pub use upstream_forwarder::UpstreamForwarder;
