use serde::{Deserialize, Serialize};

use crate::error::GatelockError;
use crate::types::{Seconds, Timestamp};

// ── TimelockStatus ───────────────────────────────────────────────────────────

/// Where a live record sits relative to `now`.
///
///   Pending → Ready → Expired
///
/// A record leaves the store when it is enforced; absence is not a status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelockStatus {
    /// `now < complete_at`
    Pending,
    /// `complete_at <= now < expires_at`
    Ready,
    /// `now >= expires_at`
    Expired,
}

// ── TimelockRecord ───────────────────────────────────────────────────────────

/// One outstanding announcement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelockRecord {
    /// Earliest time the announced call may be enforced.
    pub complete_at: Timestamp,
    /// First time at which the call can no longer be enforced.
    pub expires_at: Timestamp,
}

impl TimelockRecord {
    /// Compute the record an announcement at `now` produces:
    ///
    ///   complete_at = now + minimum_interval + extra_delay
    ///   expires_at  = complete_at + expiration_interval
    pub fn schedule(
        now: Timestamp,
        minimum_interval: Seconds,
        extra_delay: Seconds,
        expiration_interval: Seconds,
    ) -> Result<Self, GatelockError> {
        let complete_at = now
            .checked_add(minimum_interval)
            .and_then(|t| t.checked_add(extra_delay))
            .ok_or(GatelockError::TimestampOverflow)?;
        let expires_at = complete_at
            .checked_add(expiration_interval)
            .ok_or(GatelockError::TimestampOverflow)?;
        Ok(Self { complete_at, expires_at })
    }

    pub fn is_complete(&self, now: Timestamp) -> bool {
        now >= self.complete_at
    }

    pub fn is_expired(&self, now: Timestamp) -> bool {
        now >= self.expires_at
    }

    pub fn status(&self, now: Timestamp) -> TimelockStatus {
        if !self.is_complete(now) {
            TimelockStatus::Pending
        } else if self.is_expired(now) {
            TimelockStatus::Expired
        } else {
            TimelockStatus::Ready
        }
    }

    /// Length of the enforcement window `[complete_at, expires_at)`.
    pub fn window(&self) -> Seconds {
        self.expires_at - self.complete_at
    }
}
