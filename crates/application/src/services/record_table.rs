use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tiered_dns_domain::{ResourceRecord, SeedRecord};
use tracing::debug;

#[derive(Default)]
struct TableState {
    records: HashMap<String, ResourceRecord>,
    last_sequence: u64,
}

/// Resource records keyed by hostname.
///
/// Every operation runs under one lock, so a reader never observes a
/// half-applied insert and a snapshot is a single point in time. Sequence
/// numbers only grow; overwriting a name consumes a fresh one.
#[derive(Default)]
pub struct RecordTable {
    state: Mutex<TableState>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table holding `seeds` in order.
    pub fn from_seeds(seeds: &[SeedRecord]) -> Self {
        let table = Self::new();
        for seed in seeds {
            table.insert(
                &seed.name,
                &seed.record_type,
                &seed.result,
                seed.ttl,
                seed.is_static,
            );
        }
        table
    }

    /// Stores the record under `name`, replacing any previous entry, and
    /// returns the sequence number it was given.
    pub fn insert(
        &self,
        name: &str,
        record_type: &str,
        result: &str,
        ttl: Option<u32>,
        is_static: bool,
    ) -> u64 {
        let mut state = self.state();
        state.last_sequence += 1;
        let sequence_number = state.last_sequence;

        let record = ResourceRecord::new(
            sequence_number,
            name,
            record_type,
            result,
            ttl,
            is_static,
        );
        if let Some(previous) = state.records.insert(name.to_string(), record) {
            debug!(
                name = %name,
                previous = previous.sequence_number,
                sequence_number,
                "Record overwritten"
            );
        }

        sequence_number
    }

    pub fn lookup(&self, name: &str) -> Option<ResourceRecord> {
        self.state().records.get(name).cloned()
    }

    /// All records ordered by sequence number.
    pub fn snapshot(&self) -> Vec<ResourceRecord> {
        let mut records: Vec<ResourceRecord> = self.state().records.values().cloned().collect();
        records.sort_by_key(|r| r.sequence_number);
        records
    }

    pub fn len(&self) -> usize {
        self.state().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave a torn record behind:
    // each insert is a single map operation.
    fn state(&self) -> MutexGuard<'_, TableState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
