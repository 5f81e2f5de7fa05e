//! Announcement planning.
//!
//! A record can never be shortened or deleted except by a successful
//! enforce. Hosts that want to abandon a pending call push it out of reach
//! instead:
//!
//!   cancel_by_extension(call) = announce(call, extra_delay = MAX_INTERVAL_SECS)
//!
//! which moves `complete_at` roughly 34,800 years past `now`.

use gatelock_core::constants::MAX_INTERVAL_SECS;
use gatelock_core::error::GatelockError;
use gatelock_core::operation::Call;
use gatelock_core::record::TimelockRecord;
use gatelock_core::types::{Seconds, Timestamp};
use gatelock_crypto::call_key;
use gatelock_state::TimelockEngine;
use tracing::{debug, info};

/// The record `announce(call, extra_delay, now)` would produce, or the
/// error it would fail with. Nothing is mutated.
pub fn preview(
    engine: &TimelockEngine,
    call: &Call,
    extra_delay: Seconds,
    now: Timestamp,
) -> Result<TimelockRecord, GatelockError> {
    let (key, record) = engine.plan_announce(call, extra_delay, now)?;
    debug!(
        key = %key,
        complete_at = record.complete_at,
        expires_at = record.expires_at,
        "announce preview"
    );
    Ok(record)
}

/// Smallest `extra_delay` for which announcing `call` at `now` strictly
/// extends the existing record. Zero when there is no record or a plain
/// re-announce already extends it.
pub fn extension_to_supersede(
    engine: &TimelockEngine,
    call: &Call,
    now: Timestamp,
) -> Result<Seconds, GatelockError> {
    let existing = match engine.store().record(&call_key(call)) {
        Some(r) => r.complete_at,
        None => return Ok(0),
    };

    let base = now
        .checked_add(engine.minimum_interval(call.operation()))
        .ok_or(GatelockError::TimestampOverflow)?;
    let target = existing
        .checked_add(1)
        .ok_or(GatelockError::TimestampOverflow)?;

    let needed = target.saturating_sub(base);
    if needed > MAX_INTERVAL_SECS {
        return Err(GatelockError::DelayTooLarge { max: MAX_INTERVAL_SECS });
    }
    Ok(needed)
}

/// Invalidate a pending announcement by extending it as far as allowed.
///
/// Fails with `TimelockNotComplete` if nothing is pending for `call`, and
/// with `TimelockNotExtended` if the record already sits at least that far
/// out.
pub fn cancel_by_extension(
    engine: &mut TimelockEngine,
    call: &Call,
    now: Timestamp,
) -> Result<TimelockRecord, GatelockError> {
    let key = call_key(call);
    if engine.store().record(&key).is_none() {
        return Err(GatelockError::TimelockNotComplete { complete_at: None });
    }

    let record = engine.announce(call, MAX_INTERVAL_SECS, now)?;
    info!(key = %key, complete_at = record.complete_at, "timelock cancelled by extension");
    Ok(record)
}
