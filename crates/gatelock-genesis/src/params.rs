use std::path::Path;

use gatelock_core::constants::SECS_PER_DAY;
use gatelock_core::error::GatelockError;
use gatelock_core::operation::{AdminAction, Operation};
use gatelock_core::types::{OperationId, Seconds};
use gatelock_crypto::operation_id;
use serde::{Deserialize, Serialize};

/// How a genesis entry names its operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationRef {
    /// Host operation name, hashed with `gatelock_crypto::operation_id`.
    Gated(String),
    /// Precomputed 32-byte operation id, hex encoded.
    GatedId(String),
    Admin(AdminAction),
}

impl OperationRef {
    pub fn resolve(&self) -> Result<Operation, GatelockError> {
        match self {
            OperationRef::Gated(name) => Ok(Operation::Gated(operation_id(name))),
            OperationRef::GatedId(hex) => OperationId::from_hex(hex)
                .map(Operation::Gated)
                .map_err(|e| GatelockError::InvalidOperationId(format!("{hex}: {e}"))),
            OperationRef::Admin(action) => Ok(Operation::Admin(*action)),
        }
    }
}

/// Interval settings seeded for one operation. `None` leaves the default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationParams {
    pub operation: OperationRef,
    #[serde(default)]
    pub minimum_interval: Option<Seconds>,
    #[serde(default)]
    pub expiration_interval: Option<Seconds>,
}

/// Construction-time configuration of a timelock engine.
///
/// ```json
/// { "operations": [
///     { "operation": { "admin": "modify_minimum_interval" },
///       "minimum_interval": 86400, "expiration_interval": 86400 },
///     { "operation": { "gated": "pause_market" },
///       "minimum_interval": 172800, "expiration_interval": 3600 }
/// ] }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisParams {
    #[serde(default)]
    pub operations: Vec<OperationParams>,
}

impl GenesisParams {
    /// Both admin actions delayed by one day with a one-day window.
    pub fn recommended() -> Self {
        let mut params = Self::default();
        for action in AdminAction::ALL {
            params = params.with_operation(
                OperationRef::Admin(action),
                Some(SECS_PER_DAY),
                Some(SECS_PER_DAY),
            );
        }
        params
    }

    pub fn with_operation(
        mut self,
        operation: OperationRef,
        minimum_interval: Option<Seconds>,
        expiration_interval: Option<Seconds>,
    ) -> Self {
        self.operations.push(OperationParams {
            operation,
            minimum_interval,
            expiration_interval,
        });
        self
    }

    pub fn from_json(s: &str) -> Result<Self, GatelockError> {
        serde_json::from_str(s).map_err(|e| GatelockError::Serialization(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, GatelockError> {
        serde_json::to_string_pretty(self).map_err(|e| GatelockError::Serialization(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GatelockError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| GatelockError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}
