/// ─── Gatelock Constants ─────────────────────────────────────────────────────
///
/// Bounds on every duration the engine accepts. All timestamp arithmetic
/// stays far below `u64::MAX` as long as inputs respect these bounds.

// ── Ceilings ─────────────────────────────────────────────────────────────────

/// Largest accepted minimum interval, expiration interval or extra announce
/// delay: 2^40 seconds (roughly 34,800 years).
pub const MAX_INTERVAL_SECS: u64 = 1 << 40;

// ── Floors ───────────────────────────────────────────────────────────────────

/// Smallest nonzero expiration window a setter accepts (one minute).
pub const MIN_EXPIRATION_SECS: u64 = 60;

// ── Convenience durations ────────────────────────────────────────────────────

pub const SECS_PER_HOUR: u64 = 3_600;
pub const SECS_PER_DAY: u64 = 86_400;

// ── Domain separation ────────────────────────────────────────────────────────

/// Prefix hashed in front of an operation name to derive its `OperationId`.
pub const OPERATION_ID_DOMAIN: &[u8] = b"gatelock/operation/v1:";

/// Prefix hashed in front of encoded arguments to derive a `Fingerprint`.
pub const FINGERPRINT_DOMAIN: &[u8] = b"gatelock/arguments/v1:";
