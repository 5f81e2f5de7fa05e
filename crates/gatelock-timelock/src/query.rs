use chrono::{DateTime, Utc};
use gatelock_core::operation::{Call, Operation, TimelockKey};
use gatelock_core::record::{TimelockRecord, TimelockStatus};
use gatelock_core::types::{Seconds, Timestamp};
use gatelock_crypto::call_key;
use gatelock_state::TimelockEngine;
use serde::Serialize;

/// Snapshot of one timelock key at a given `now`.
///
/// `completed` and `expired` use strict comparisons (`now > complete_at`,
/// `now > expires_at`). `enforceable` reports the exact window in which
/// `enforce` succeeds, `[complete_at, expires_at)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TimelockView {
    pub exists: bool,
    pub completed: bool,
    pub expired: bool,
    pub enforceable: bool,
    pub complete_at: Timestamp,
    pub expires_at: Timestamp,
    /// `None` when no record exists.
    pub status: Option<TimelockStatus>,
}

impl TimelockView {
    fn absent() -> Self {
        Self {
            exists: false,
            completed: false,
            expired: false,
            enforceable: false,
            complete_at: 0,
            expires_at: 0,
            status: None,
        }
    }

    fn of(record: &TimelockRecord, now: Timestamp) -> Self {
        let status = record.status(now);
        Self {
            exists: true,
            completed: now > record.complete_at,
            expired: now > record.expires_at,
            enforceable: status == TimelockStatus::Ready,
            complete_at: record.complete_at,
            expires_at: record.expires_at,
            status: Some(status),
        }
    }
}

/// Query helpers for timelock records and configuration.
pub struct TimelockQuery<'a> {
    engine: &'a TimelockEngine,
}

impl<'a> TimelockQuery<'a> {
    pub fn new(engine: &'a TimelockEngine) -> Self {
        Self { engine }
    }

    /// Inspect the record `call` would be enforced against. Admin calls
    /// resolve to their argument-insensitive key.
    pub fn get_timelock(&self, call: &Call, now: Timestamp) -> TimelockView {
        self.get_timelock_by_key(&call_key(call), now)
    }

    pub fn get_timelock_by_key(&self, key: &TimelockKey, now: Timestamp) -> TimelockView {
        match self.engine.store().record(key) {
            Some(record) => TimelockView::of(record, now),
            None => TimelockView::absent(),
        }
    }

    pub fn minimum_interval(&self, operation: impl Into<Operation>) -> Seconds {
        self.engine.minimum_interval(operation)
    }

    pub fn expiration_interval(&self, operation: impl Into<Operation>) -> Seconds {
        self.engine.expiration_interval(operation)
    }

    /// Every live record with its status at `now`, in key order.
    pub fn pending(&self, now: Timestamp) -> Vec<(TimelockKey, TimelockRecord, TimelockStatus)> {
        self.engine
            .store()
            .records()
            .map(|(key, record)| (*key, *record, record.status(now)))
            .collect()
    }

    /// Human-readable summary of the timelock for `call`.
    pub fn describe(&self, call: &Call, now: Timestamp) -> String {
        let key = call_key(call);
        let record = match self.engine.store().record(&key) {
            Some(r) => r,
            None => return format!("Timelock {} | none announced", key),
        };

        let status_str = match record.status(now) {
            TimelockStatus::Pending => {
                let secs_remaining = record.complete_at - now;
                format!(
                    "Pending: completes {} (in {} days {} h)",
                    format_time(record.complete_at),
                    secs_remaining / 86_400,
                    (secs_remaining % 86_400) / 3_600
                )
            }
            TimelockStatus::Ready => format!(
                "Ready: enforceable until {} ({} s left)",
                format_time(record.expires_at),
                record.expires_at - now
            ),
            TimelockStatus::Expired => {
                format!("Expired at {}; announce again", format_time(record.expires_at))
            }
        };

        format!("Timelock {} | {}", key, status_str)
    }
}

/// RFC 3339 rendering of a Unix timestamp; raw seconds if out of range.
fn format_time(t: Timestamp) -> String {
    i64::try_from(t)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map(|d| d.to_rfc3339())
        .unwrap_or_else(|| t.to_string())
}
