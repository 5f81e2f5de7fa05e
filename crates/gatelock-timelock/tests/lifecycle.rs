//! End-to-end timelock lifecycle: genesis → announce → wait → enforce,
//! including self-governance of the delay parameters.
//!
//! Run with:
//!   cargo test -p gatelock-timelock --test lifecycle

use gatelock_core::constants::{MAX_INTERVAL_SECS, SECS_PER_DAY, SECS_PER_HOUR};
use gatelock_core::error::GatelockError;
use gatelock_core::event::TimelockEvent;
use gatelock_core::operation::{AdminAction, Call, Operation};
use gatelock_core::types::OperationId;
use gatelock_crypto::{encode_arguments, operation_id};
use gatelock_genesis::{apply_genesis, GenesisParams, OperationRef};
use gatelock_state::TimelockEngine;
use gatelock_timelock::{cancel_by_extension, TimelockQuery};
use proptest::prelude::*;
use serde::Serialize;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_test_writer()
        .try_init();
}

#[derive(Serialize)]
struct SetFee {
    pool: u32,
    fee_bps: u16,
}

fn set_fee_op() -> OperationId {
    operation_id("set_fee")
}

fn set_fee(pool: u32, fee_bps: u16) -> Call {
    Call::gated(set_fee_op(), encode_arguments(&SetFee { pool, fee_bps }).unwrap())
}

/// `set_fee`: 1 day delay, 1 hour window. Admin actions: 1 day delay, 1 day
/// window (the recommended genesis).
fn engine() -> TimelockEngine {
    init_tracing();
    let params = GenesisParams::recommended().with_operation(
        OperationRef::Gated("set_fee".into()),
        Some(SECS_PER_DAY),
        Some(SECS_PER_HOUR),
    );
    let mut engine = apply_genesis(&params).expect("genesis");
    engine.take_events();
    engine
}

/// A freshly built engine for property tests: `minimum` delay, `window`
/// expiration for `set_fee`.
fn engine_with(minimum: u64, window: u64) -> TimelockEngine {
    TimelockEngine::builder()
        .initialize_minimum_interval(set_fee_op(), minimum)
        .unwrap()
        .initialize_expiration_interval(set_fee_op(), window)
        .unwrap()
        .build()
}

// ── Concrete scenario ─────────────────────────────────────────────────────────

#[test]
fn one_day_delay_one_hour_window() {
    let mut engine = engine();
    let call = set_fee(1, 30);

    let record = engine.announce(&call, 0, 0).unwrap();
    assert_eq!((record.complete_at, record.expires_at), (86_400, 90_000));

    assert_eq!(
        engine.enforce(&call, 86_399).unwrap_err(),
        GatelockError::TimelockNotComplete { complete_at: Some(86_400) }
    );
    engine.enforce(&call, 86_400).unwrap();
    assert_eq!(
        engine.enforce(&call, 86_400).unwrap_err(),
        GatelockError::TimelockNotComplete { complete_at: None }
    );

    // Announce again later, then miss the window.
    let record = engine.announce(&call, 0, 90_500).unwrap();
    assert_eq!((record.complete_at, record.expires_at), (176_900, 180_500));
    assert_eq!(
        engine.enforce(&call, 180_500).unwrap_err(),
        GatelockError::TimelockExpired { expires_at: 180_500 }
    );
}

#[test]
fn notifications_describe_the_lifecycle() {
    let mut engine = engine();
    let call = set_fee(2, 5);
    engine.announce(&call, 60, 1_000).unwrap();

    let events = engine.take_events();
    assert_eq!(events.len(), 1);
    let json = events[0].to_json().unwrap();
    assert!(json.contains("TimelockInitiated"), "{json}");
    assert_eq!(TimelockEvent::from_json(&json).unwrap(), events[0]);

    // Enforcement is silent.
    engine.enforce(&call, 1_000 + SECS_PER_DAY + 60).unwrap();
    assert!(engine.take_events().is_empty());
}

// ── Self-governance ───────────────────────────────────────────────────────────

#[test]
fn shortening_a_delay_takes_a_full_governance_cycle() {
    let mut engine = engine();
    let change = Call::modify_minimum_interval(set_fee_op(), SECS_PER_HOUR);

    // Not announced.
    assert!(engine.modify_minimum_interval(set_fee_op(), SECS_PER_HOUR, 0).is_err());

    engine.announce(&change, 0, 0).unwrap();
    let q = TimelockQuery::new(&engine);
    assert!(q.get_timelock(&change, 0).exists);
    assert_eq!(q.minimum_interval(set_fee_op()), SECS_PER_DAY);

    // Still waiting.
    assert!(engine
        .modify_minimum_interval(set_fee_op(), SECS_PER_HOUR, SECS_PER_DAY - 1)
        .is_err());
    assert_eq!(engine.minimum_interval(set_fee_op()), SECS_PER_DAY);

    engine
        .modify_minimum_interval(set_fee_op(), SECS_PER_HOUR, SECS_PER_DAY)
        .unwrap();
    assert_eq!(engine.minimum_interval(set_fee_op()), SECS_PER_HOUR);

    // New announcements use the shorter delay.
    let record = engine.announce(&set_fee(1, 1), 0, SECS_PER_DAY).unwrap();
    assert_eq!(record.complete_at, SECS_PER_DAY + SECS_PER_HOUR);
}

#[test]
fn governance_timelock_is_only_spent_by_its_modify_call() {
    let mut engine = engine();
    let change = Call::modify_minimum_interval(set_fee_op(), SECS_PER_HOUR);
    engine.announce(&change, 0, 0).unwrap();

    let reserved = GatelockError::AdminCallNotEnforceable(AdminAction::ModifyMinimumInterval);
    assert_eq!(engine.enforce(&change, SECS_PER_DAY).unwrap_err(), reserved);
    let out: Result<u32, GatelockError> = engine.execute(&change, SECS_PER_DAY + 100, || Ok(42));
    assert_eq!(out.unwrap_err(), reserved);
    assert!(TimelockQuery::new(&engine).get_timelock(&change, SECS_PER_DAY).exists);

    engine
        .modify_minimum_interval(set_fee_op(), SECS_PER_HOUR, SECS_PER_DAY)
        .unwrap();
    assert_eq!(engine.minimum_interval(set_fee_op()), SECS_PER_HOUR);
}

#[test]
fn expiration_change_is_gated_and_bounded() {
    let mut engine = engine();
    let change = Call::modify_expiration_interval(set_fee_op(), 2 * SECS_PER_HOUR);
    engine.announce(&change, 0, 0).unwrap();

    // Expired governance timelock cannot be used.
    assert_eq!(
        engine
            .modify_expiration_interval(set_fee_op(), 2 * SECS_PER_HOUR, 2 * SECS_PER_DAY)
            .unwrap_err(),
        GatelockError::TimelockExpired { expires_at: 2 * SECS_PER_DAY }
    );

    engine.announce(&change, 0, 2 * SECS_PER_DAY).unwrap();
    engine
        .modify_expiration_interval(set_fee_op(), 2 * SECS_PER_HOUR, 3 * SECS_PER_DAY)
        .unwrap();
    assert_eq!(engine.expiration_interval(set_fee_op()), 2 * SECS_PER_HOUR);
    assert_eq!(
        engine.take_events().last(),
        Some(&TimelockEvent::TimelockExpirationModified {
            operation: Operation::Gated(set_fee_op()),
            old_expiration: SECS_PER_HOUR,
            new_expiration: 2 * SECS_PER_HOUR,
        })
    );
}

#[test]
fn governance_can_cancel_a_pending_change() {
    let mut engine = engine();
    let change =
        Call::modify_minimum_interval(Operation::Admin(AdminAction::ModifyMinimumInterval), 0);
    engine.announce(&change, 0, 0).unwrap();

    cancel_by_extension(&mut engine, &change, 10).unwrap();
    assert!(engine
        .modify_minimum_interval(AdminAction::ModifyMinimumInterval, 0, SECS_PER_DAY)
        .is_err());
    assert_eq!(engine.minimum_interval(AdminAction::ModifyMinimumInterval), SECS_PER_DAY);
}

#[test]
fn ceiling_rejection_keeps_state() {
    let mut engine = engine();
    engine
        .announce(&Call::modify_minimum_interval(set_fee_op(), 0), 0, 0)
        .unwrap();
    let err = engine
        .modify_minimum_interval(set_fee_op(), MAX_INTERVAL_SECS + 1, SECS_PER_DAY)
        .unwrap_err();
    assert_eq!(err, GatelockError::IntervalTooLarge { max: MAX_INTERVAL_SECS });
    assert_eq!(engine.minimum_interval(set_fee_op()), SECS_PER_DAY);
    // The governance timelock was not consumed.
    engine
        .modify_minimum_interval(set_fee_op(), 0, SECS_PER_DAY)
        .unwrap();
}

// ── Properties ────────────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Property**: enforcing a call that was never announced always fails.
    #[test]
    fn prop_enforce_before_announce_fails(
        pool in any::<u32>(),
        fee in any::<u16>(),
        now in 0u64..1 << 50,
    ) {
        let mut engine = engine_with(SECS_PER_DAY, SECS_PER_HOUR);
        prop_assert_eq!(
            engine.enforce(&set_fee(pool, fee), now).unwrap_err(),
            GatelockError::TimelockNotComplete { complete_at: None }
        );
    }

    /// **Property**: the success window is exactly `[complete_at, expires_at)`
    /// and a record is consumed by its first successful enforce.
    #[test]
    fn prop_window_is_exact_and_single_use(
        minimum in 0u64..10 * SECS_PER_DAY,
        window in 60u64..10 * SECS_PER_DAY,
        extra in 0u64..SECS_PER_DAY,
        start in 1u64..1 << 40,
        offset_seed in any::<u64>(),
    ) {
        let mut engine = engine_with(minimum, window);
        let call = set_fee(7, 7);
        let record = engine.announce(&call, extra, start).unwrap();
        prop_assert_eq!(record.complete_at, start + minimum + extra);
        prop_assert_eq!(record.expires_at, record.complete_at + window);

        if record.complete_at > 0 {
            prop_assert!(engine.enforce(&call, record.complete_at - 1).is_err());
        }
        let inside = record.complete_at + offset_seed % window;
        prop_assert!(engine.enforce(&call, inside).is_ok());
        prop_assert_eq!(
            engine.enforce(&call, inside).unwrap_err(),
            GatelockError::TimelockNotComplete { complete_at: None }
        );
    }

    /// **Property**: at or after `expires_at` enforcement fails with
    /// `TimelockExpired`.
    #[test]
    fn prop_expired_after_window(window in 60u64..SECS_PER_DAY, late in 0u64..1 << 30) {
        let mut engine = engine_with(SECS_PER_HOUR, window);
        let call = set_fee(1, 1);
        let record = engine.announce(&call, 0, 1_000).unwrap();
        prop_assert_eq!(
            engine.enforce(&call, record.expires_at + late).unwrap_err(),
            GatelockError::TimelockExpired { expires_at: record.expires_at }
        );
    }

    /// **Property**: a re-announce succeeds iff it strictly extends completion.
    #[test]
    fn prop_extend_only(
        e1 in 0u64..SECS_PER_DAY,
        e2 in 0u64..SECS_PER_DAY,
        dt in 0u64..SECS_PER_DAY,
    ) {
        let mut engine = engine_with(SECS_PER_HOUR, SECS_PER_HOUR);
        let call = set_fee(3, 3);
        let first = engine.announce(&call, e1, 0).unwrap();
        let proposed = dt + SECS_PER_HOUR + e2;

        match engine.announce(&call, e2, dt) {
            Ok(second) => {
                prop_assert!(proposed > first.complete_at);
                prop_assert_eq!(second.complete_at, proposed);
            }
            Err(e) => {
                prop_assert!(proposed <= first.complete_at);
                prop_assert_eq!(e, GatelockError::TimelockNotExtended {
                    existing: first.complete_at,
                    proposed,
                });
                let view = TimelockQuery::new(&engine).get_timelock(&call, dt);
                prop_assert_eq!(view.complete_at, first.complete_at);
            }
        }
    }

    /// **Property**: intervals above the ceiling are rejected at construction.
    #[test]
    fn prop_ceiling_rejected(excess in 1u64..1 << 20) {
        let err = TimelockEngine::builder()
            .initialize_minimum_interval(set_fee_op(), MAX_INTERVAL_SECS + excess)
            .unwrap_err();
        prop_assert_eq!(err, GatelockError::IntervalTooLarge { max: MAX_INTERVAL_SECS });
    }
}
