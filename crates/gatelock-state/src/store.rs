use std::collections::BTreeMap;

use gatelock_core::operation::{Operation, TimelockKey};
use gatelock_core::record::TimelockRecord;
use gatelock_core::types::Seconds;

/// In-process state of the timelock primitive.
///
/// Maps (analogous to named trees):
///   records      : TimelockKey → TimelockRecord
///   intervals    : Operation   → minimum interval (default 0)
///   expirations  : Operation   → expiration window (default 0)
///
/// Reads are public; writes are crate-private so that every mutation flows
/// through `TimelockEngine`.
#[derive(Debug, Default, Clone)]
pub struct TimelockStore {
    records: BTreeMap<TimelockKey, TimelockRecord>,
    intervals: BTreeMap<Operation, Seconds>,
    expirations: BTreeMap<Operation, Seconds>,
}

impl TimelockStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Records ──────────────────────────────────────────────────────────────

    pub fn record(&self, key: &TimelockKey) -> Option<&TimelockRecord> {
        self.records.get(key)
    }

    pub fn records(&self) -> impl Iterator<Item = (&TimelockKey, &TimelockRecord)> {
        self.records.iter()
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn put_record(&mut self, key: TimelockKey, record: TimelockRecord) {
        self.records.insert(key, record);
    }

    pub(crate) fn remove_record(&mut self, key: &TimelockKey) -> Option<TimelockRecord> {
        self.records.remove(key)
    }

    // ── Configuration ────────────────────────────────────────────────────────

    pub fn minimum_interval(&self, operation: &Operation) -> Seconds {
        self.intervals.get(operation).copied().unwrap_or(0)
    }

    pub fn expiration_interval(&self, operation: &Operation) -> Seconds {
        self.expirations.get(operation).copied().unwrap_or(0)
    }

    /// Operations with an explicit interval or expiration entry, sorted.
    pub fn configured_operations(&self) -> Vec<Operation> {
        let mut ops: Vec<Operation> = self
            .intervals
            .keys()
            .chain(self.expirations.keys())
            .copied()
            .collect();
        ops.sort();
        ops.dedup();
        ops
    }

    /// Returns the previous value.
    pub(crate) fn put_minimum_interval(
        &mut self,
        operation: Operation,
        interval: Seconds,
    ) -> Seconds {
        self.intervals.insert(operation, interval).unwrap_or(0)
    }

    /// Returns the previous value.
    pub(crate) fn put_expiration_interval(
        &mut self,
        operation: Operation,
        expiration: Seconds,
    ) -> Seconds {
        self.expirations.insert(operation, expiration).unwrap_or(0)
    }
}
