//! gatelock-genesis
//!
//! Builds a `TimelockEngine` from `GenesisParams`, seeding intervals and
//! expiration windows through the construction-phase builder instead of the
//! gated self-governance entry points (there is nothing to announce against
//! before the engine exists).
//!
//! After genesis every change to these values costs an announce, a wait and
//! an enforce. Genesis therefore refuses to produce an engine whose admin
//! actions have no expiration window, since such an engine could never
//! change its own configuration again.

pub mod params;

pub use params::{GenesisParams, OperationParams, OperationRef};

use gatelock_core::error::GatelockError;
use gatelock_core::operation::{AdminAction, Operation};
use gatelock_state::{TimelockBuilder, TimelockEngine};
use tracing::info;

/// Build an engine seeded with `params`.
pub fn apply_genesis(params: &GenesisParams) -> Result<TimelockEngine, GatelockError> {
    info!(entries = params.operations.len(), "applying timelock genesis");

    let mut builder = TimelockBuilder::new();
    for entry in &params.operations {
        let operation = entry.operation.resolve()?;

        if let Some(interval) = entry.minimum_interval {
            builder = builder.initialize_minimum_interval(operation, interval)?;
            info!(operation = %operation, interval, "genesis: minimum interval");
        }
        if let Some(expiration) = entry.expiration_interval {
            builder = builder.initialize_expiration_interval(operation, expiration)?;
            info!(operation = %operation, expiration, "genesis: expiration interval");
        }
    }
    let engine = builder.build();

    verify_self_governance(&engine)?;
    info!(
        operations = engine.store().configured_operations().len(),
        "genesis configuration committed"
    );
    Ok(engine)
}

/// Both admin actions must be announceable after genesis.
fn verify_self_governance(engine: &TimelockEngine) -> Result<(), GatelockError> {
    for action in AdminAction::ALL {
        if engine.expiration_interval(Operation::Admin(action)) == 0 {
            return Err(GatelockError::GenesisIncomplete(format!(
                "no expiration interval for {}",
                action.name()
            )));
        }
    }
    Ok(())
}
