use gatelock_core::constants::{MAX_INTERVAL_SECS, MIN_EXPIRATION_SECS};
use gatelock_core::error::GatelockError;
use gatelock_core::event::TimelockEvent;
use gatelock_core::operation::{AdminAction, Call, Operation, TimelockKey};
use gatelock_core::record::TimelockRecord;
use gatelock_core::types::{Seconds, Timestamp};
use gatelock_crypto::{call_arguments, call_key};
use tracing::{info, warn};

use crate::builder::TimelockBuilder;
use crate::store::TimelockStore;

// ── Validation ────────────────────────────────────────────────────────────────

pub(crate) fn check_interval(interval: Seconds) -> Result<(), GatelockError> {
    if interval > MAX_INTERVAL_SECS {
        return Err(GatelockError::IntervalTooLarge { max: MAX_INTERVAL_SECS });
    }
    Ok(())
}

pub(crate) fn check_expiration(expiration: Seconds) -> Result<(), GatelockError> {
    if expiration > MAX_INTERVAL_SECS {
        return Err(GatelockError::ExpirationTooLarge { max: MAX_INTERVAL_SECS });
    }
    if expiration < MIN_EXPIRATION_SECS {
        return Err(GatelockError::ExpirationTooShort { min: MIN_EXPIRATION_SECS });
    }
    Ok(())
}

// ── TimelockEngine ────────────────────────────────────────────────────────────

/// The timelock engine.
///
/// Records announcements, gates execution on them, and governs its own
/// delay parameters through the same announce/enforce cycle. Every public
/// operation validates completely before touching the store, so a failed
/// call leaves records, configuration and the event log unchanged.
///
/// Obtained from [`TimelockBuilder::build`]; there is no way back to the
/// builder, so construction-time initializers cannot be reached once the
/// engine exists.
#[derive(Debug)]
pub struct TimelockEngine {
    store: TimelockStore,
    events: Vec<TimelockEvent>,
}

impl TimelockEngine {
    pub fn builder() -> TimelockBuilder {
        TimelockBuilder::new()
    }

    pub(crate) fn from_parts(store: TimelockStore, events: Vec<TimelockEvent>) -> Self {
        Self { store, events }
    }

    pub fn store(&self) -> &TimelockStore {
        &self.store
    }

    pub fn minimum_interval(&self, operation: impl Into<Operation>) -> Seconds {
        self.store.minimum_interval(&operation.into())
    }

    pub fn expiration_interval(&self, operation: impl Into<Operation>) -> Seconds {
        self.store.expiration_interval(&operation.into())
    }

    // ── Events ───────────────────────────────────────────────────────────────

    /// Notifications raised since the last `take_events`.
    pub fn events(&self) -> &[TimelockEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<TimelockEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Announce ─────────────────────────────────────────────────────────────

    /// The record `announce` would write, with every announce check applied
    /// but nothing mutated.
    pub fn plan_announce(
        &self,
        call: &Call,
        extra_delay: Seconds,
        now: Timestamp,
    ) -> Result<(TimelockKey, TimelockRecord), GatelockError> {
        if extra_delay > MAX_INTERVAL_SECS {
            return Err(GatelockError::DelayTooLarge { max: MAX_INTERVAL_SECS });
        }

        let operation = call.operation();
        let expiration = self.store.expiration_interval(&operation);
        if expiration == 0 {
            return Err(GatelockError::ExpirationNotConfigured(operation.to_string()));
        }

        let record = TimelockRecord::schedule(
            now,
            self.store.minimum_interval(&operation),
            extra_delay,
            expiration,
        )?;

        let key = call_key(call);
        if let Some(existing) = self.store.record(&key) {
            if record.complete_at <= existing.complete_at {
                return Err(GatelockError::TimelockNotExtended {
                    existing: existing.complete_at,
                    proposed: record.complete_at,
                });
            }
        }

        Ok((key, record))
    }

    /// Create or extend the timelock for `call`.
    ///
    /// complete_at = now + minimum_interval + extra_delay; an existing record
    /// may only be pushed later, never earlier. Announcing again with a large
    /// `extra_delay` is the only way to cancel a pending call.
    pub fn announce(
        &mut self,
        call: &Call,
        extra_delay: Seconds,
        now: Timestamp,
    ) -> Result<TimelockRecord, GatelockError> {
        let (key, record) = match self.plan_announce(call, extra_delay, now) {
            Ok(planned) => planned,
            Err(e) => {
                warn!(operation = %call.operation(), error = %e, "announce rejected");
                return Err(e);
            }
        };
        let arguments = call_arguments(call)?;

        // ── Commit ────────────────────────────────────────────────────────────
        self.store.put_record(key, record);
        self.events.push(TimelockEvent::TimelockInitiated {
            operation: key.operation(),
            complete_at: record.complete_at,
            arguments,
            expires_at: record.expires_at,
        });

        info!(
            key = %key,
            complete_at = record.complete_at,
            expires_at = record.expires_at,
            "timelock announced"
        );
        Ok(record)
    }

    // ── Enforce ──────────────────────────────────────────────────────────────

    /// Validate and consume the timelock for `call`.
    ///
    /// Must be the first thing a gated operation does. Succeeds only inside
    /// `[complete_at, expires_at)` and at most once per announcement.
    ///
    /// Admin calls are rejected without touching their record; they are
    /// consumed only by `modify_minimum_interval` / `modify_expiration_interval`.
    pub fn enforce(
        &mut self,
        call: &Call,
        now: Timestamp,
    ) -> Result<TimelockRecord, GatelockError> {
        if let Call::Admin(admin) = call {
            warn!(operation = %call.operation(), now, "enforce rejected: admin call");
            return Err(GatelockError::AdminCallNotEnforceable(admin.action()));
        }
        self.enforce_key(&call_key(call), now)
    }

    pub(crate) fn enforce_key(
        &mut self,
        key: &TimelockKey,
        now: Timestamp,
    ) -> Result<TimelockRecord, GatelockError> {
        let record = match self.store.record(key) {
            Some(r) => *r,
            None => {
                warn!(key = %key, now, "enforce rejected: no timelock");
                return Err(GatelockError::TimelockNotComplete { complete_at: None });
            }
        };

        if !record.is_complete(now) {
            warn!(
                key = %key,
                now,
                complete_at = record.complete_at,
                "enforce rejected: not complete"
            );
            return Err(GatelockError::TimelockNotComplete {
                complete_at: Some(record.complete_at),
            });
        }
        if record.is_expired(now) {
            warn!(key = %key, now, expires_at = record.expires_at, "enforce rejected: expired");
            return Err(GatelockError::TimelockExpired {
                expires_at: record.expires_at,
            });
        }

        self.store.remove_record(key);
        info!(key = %key, now, "timelock consumed");
        Ok(record)
    }

    /// Enforce `call`, then run the gated behavior.
    ///
    /// The record is consumed before `gated` runs; if `gated` fails the host
    /// must announce again.
    pub fn execute<T, E, F>(&mut self, call: &Call, now: Timestamp, gated: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<GatelockError>,
    {
        self.enforce(call, now)?;
        gated()
    }

    // ── Self-governance ──────────────────────────────────────────────────────

    /// Change `target`'s minimum interval. Requires a completed, unexpired
    /// announcement of `Call::modify_minimum_interval`.
    pub fn modify_minimum_interval(
        &mut self,
        target: impl Into<Operation>,
        new_interval: Seconds,
        now: Timestamp,
    ) -> Result<(), GatelockError> {
        check_interval(new_interval)?;
        self.enforce_key(&TimelockKey::admin(AdminAction::ModifyMinimumInterval), now)?;
        self.set_minimum_interval(target.into(), new_interval)
    }

    /// Change `target`'s expiration window. Requires a completed, unexpired
    /// announcement of `Call::modify_expiration_interval`.
    pub fn modify_expiration_interval(
        &mut self,
        target: impl Into<Operation>,
        new_expiration: Seconds,
        now: Timestamp,
    ) -> Result<(), GatelockError> {
        check_expiration(new_expiration)?;
        self.enforce_key(&TimelockKey::admin(AdminAction::ModifyExpirationInterval), now)?;
        self.set_expiration_interval(target.into(), new_expiration)
    }

    // ── Setters ──────────────────────────────────────────────────────────────

    pub(crate) fn set_minimum_interval(
        &mut self,
        operation: Operation,
        new_interval: Seconds,
    ) -> Result<(), GatelockError> {
        check_interval(new_interval)?;
        let old_interval = self.store.put_minimum_interval(operation, new_interval);
        self.events.push(TimelockEvent::TimelockIntervalModified {
            operation,
            old_interval,
            new_interval,
        });
        info!(operation = %operation, old_interval, new_interval, "minimum interval modified");
        Ok(())
    }

    pub(crate) fn set_expiration_interval(
        &mut self,
        operation: Operation,
        new_expiration: Seconds,
    ) -> Result<(), GatelockError> {
        check_expiration(new_expiration)?;
        let old_expiration = self.store.put_expiration_interval(operation, new_expiration);
        self.events.push(TimelockEvent::TimelockExpirationModified {
            operation,
            old_expiration,
            new_expiration,
        });
        info!(
            operation = %operation,
            old_expiration,
            new_expiration,
            "expiration interval modified"
        );
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
