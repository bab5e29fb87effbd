#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tiered_dns_application::ports::{
    Datagram, DatagramTransport, TableReporter, UpstreamForwarder,
};
use tiered_dns_domain::{DomainError, Query, ResourceRecord, NOT_FOUND};

pub struct MockUpstreamForwarder {
    upstream: SocketAddr,
    replies: Mutex<HashMap<String, Vec<u8>>>,
    failure: Mutex<Option<DomainError>>,
    forwarded: Mutex<Vec<String>>,
}

impl MockUpstreamForwarder {
    pub fn new(upstream: SocketAddr) -> Self {
        Self {
            upstream,
            replies: Mutex::new(HashMap::new()),
            failure: Mutex::new(None),
            forwarded: Mutex::new(Vec::new()),
        }
    }

    pub fn set_reply(&self, hostname: &str, reply: &str) {
        self.set_raw_reply(hostname, reply.as_bytes());
    }

    pub fn set_raw_reply(&self, hostname: &str, reply: &[u8]) {
        self.replies
            .lock()
            .unwrap()
            .insert(hostname.to_string(), reply.to_vec());
    }

    pub fn set_failure(&self, error: DomainError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn forwarded(&self) -> Vec<String> {
        self.forwarded.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamForwarder for MockUpstreamForwarder {
    async fn forward(&self, query: &Query) -> Result<Vec<u8>, DomainError> {
        self.forwarded
            .lock()
            .unwrap()
            .push(query.hostname().to_string());

        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }

        Ok(self
            .replies
            .lock()
            .unwrap()
            .get(query.hostname())
            .cloned()
            .unwrap_or_else(|| NOT_FOUND.as_bytes().to_vec()))
    }

    fn upstream(&self) -> SocketAddr {
        self.upstream
    }
}

/// Scripted transport: `receive` pops queued results in order and reports a
/// closed channel once the script is exhausted.
pub struct MockDatagramTransport {
    inbound: Mutex<VecDeque<Result<Datagram, DomainError>>>,
    sent: Mutex<Vec<(Vec<u8>, SocketAddr)>>,
    send_failure: Mutex<Option<DomainError>>,
}

impl MockDatagramTransport {
    pub fn new() -> Self {
        Self {
            inbound: Mutex::new(VecDeque::new()),
            sent: Mutex::new(Vec::new()),
            send_failure: Mutex::new(None),
        }
    }

    pub fn push_reply(&self, text: &str, source: SocketAddr) {
        self.inbound
            .lock()
            .unwrap()
            .push_back(Ok(Datagram::new(text.as_bytes(), source)));
    }

    pub fn push_error(&self, error: DomainError) {
        self.inbound.lock().unwrap().push_back(Err(error));
    }

    pub fn set_send_failure(&self, error: DomainError) {
        *self.send_failure.lock().unwrap() = Some(error);
    }

    pub fn sent(&self) -> Vec<(String, SocketAddr)> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(bytes, addr)| (String::from_utf8_lossy(bytes).into_owned(), *addr))
            .collect()
    }
}

impl Default for MockDatagramTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DatagramTransport for MockDatagramTransport {
    async fn send_to(&self, payload: &[u8], destination: SocketAddr) -> Result<(), DomainError> {
        if let Some(err) = self.send_failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.sent
            .lock()
            .unwrap()
            .push((payload.to_vec(), destination));
        Ok(())
    }

    async fn receive(&self) -> Result<Datagram, DomainError> {
        self.inbound
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(DomainError::ChannelClosed))
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    reports: AtomicUsize,
    last: Mutex<Vec<ResourceRecord>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report_count(&self) -> usize {
        self.reports.load(Ordering::SeqCst)
    }

    pub fn last_snapshot(&self) -> Vec<ResourceRecord> {
        self.last.lock().unwrap().clone()
    }
}

impl TableReporter for RecordingReporter {
    fn report(&self, snapshot: &[ResourceRecord]) {
        self.reports.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = snapshot.to_vec();
    }
}
