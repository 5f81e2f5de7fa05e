use thiserror::Error;

use crate::operation::AdminAction;
use crate::types::Timestamp;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatelockError {
    // ── Enforcement errors ───────────────────────────────────────────────────
    #[error("timelock not complete ({})", completion_hint(.complete_at))]
    TimelockNotComplete { complete_at: Option<Timestamp> },

    #[error("timelock expired at {expires_at}")]
    TimelockExpired { expires_at: Timestamp },

    #[error("{} is only enforced by its own modify call", .0.name())]
    AdminCallNotEnforceable(AdminAction),

    // ── Announcement errors ──────────────────────────────────────────────────
    #[error("timelock not extended: existing completion {existing}, proposed {proposed}")]
    TimelockNotExtended { existing: Timestamp, proposed: Timestamp },

    #[error("extra delay too large: maximum {max} seconds")]
    DelayTooLarge { max: u64 },

    #[error("no expiration interval configured for operation {0}")]
    ExpirationNotConfigured(String),

    #[error("timestamp arithmetic overflowed")]
    TimestampOverflow,

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("minimum interval too large: maximum {max} seconds")]
    IntervalTooLarge { max: u64 },

    #[error("expiration interval too large: maximum {max} seconds")]
    ExpirationTooLarge { max: u64 },

    #[error("expiration interval too short: minimum {min} seconds")]
    ExpirationTooShort { min: u64 },

    #[error("invalid operation id: {0}")]
    InvalidOperationId(String),

    #[error("genesis incomplete: {0}")]
    GenesisIncomplete(String),

    #[error("config error: {0}")]
    Config(String),

    // ── Serialization ────────────────────────────────────────────────────────
    #[error("serialization error: {0}")]
    Serialization(String),
}

fn completion_hint(complete_at: &Option<Timestamp>) -> String {
    match complete_at {
        Some(t) => format!("completes at {t}"),
        None => "no timelock announced".to_string(),
    }
}
