#![allow(dead_code)]
#![allow(unused_imports)]

mod mock_ports;

pub use mock_ports::{MockDatagramTransport, MockUpstreamForwarder, RecordingReporter};
