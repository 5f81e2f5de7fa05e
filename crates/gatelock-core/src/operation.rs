use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{Fingerprint, OperationId, Seconds};

// ── AdminAction ──────────────────────────────────────────────────────────────

/// The two self-governance entry points. Each one is gated by a timelock on
/// itself, keyed without an arguments fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    ModifyMinimumInterval,
    ModifyExpirationInterval,
}

impl AdminAction {
    pub const ALL: [AdminAction; 2] = [
        AdminAction::ModifyMinimumInterval,
        AdminAction::ModifyExpirationInterval,
    ];

    /// The timelock key this action must be announced and enforced under.
    pub const fn timelock_key(self) -> TimelockKey {
        TimelockKey {
            operation: Operation::Admin(self),
            args: ArgsKey::Unkeyed,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            AdminAction::ModifyMinimumInterval => "modify_minimum_interval",
            AdminAction::ModifyExpirationInterval => "modify_expiration_interval",
        }
    }
}

// ── Operation ────────────────────────────────────────────────────────────────

/// Anything that can carry a minimum interval and expiration window: a
/// host-defined gated operation, or one of the reserved admin actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Gated(OperationId),
    Admin(AdminAction),
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Gated(id) => write!(f, "op:{}", &id.to_hex()[..16]),
            Operation::Admin(action) => write!(f, "admin:{}", action.name()),
        }
    }
}

impl From<OperationId> for Operation {
    fn from(id: OperationId) -> Self {
        Operation::Gated(id)
    }
}

impl From<AdminAction> for Operation {
    fn from(action: AdminAction) -> Self {
        Operation::Admin(action)
    }
}

// ── TimelockKey ──────────────────────────────────────────────────────────────

/// Argument half of a timelock key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArgsKey {
    Keyed(Fingerprint),
    /// Argument-insensitive: one pending record per operation.
    Unkeyed,
}

/// Composite key of the timelock store.
///
/// Only two shapes exist: a gated operation with a fingerprint, or an admin
/// action without one. Fields are private so no other pairing can be built,
/// and keys are serialized for display only, never read back:
///
/// ```compile_fail
/// use gatelock_core::operation::TimelockKey;
///
/// let _: TimelockKey = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TimelockKey {
    operation: Operation,
    args: ArgsKey,
}

impl TimelockKey {
    pub fn gated(operation: OperationId, fingerprint: Fingerprint) -> Self {
        Self {
            operation: Operation::Gated(operation),
            args: ArgsKey::Keyed(fingerprint),
        }
    }

    pub const fn admin(action: AdminAction) -> Self {
        action.timelock_key()
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn args(&self) -> ArgsKey {
        self.args
    }
}

impl fmt::Display for TimelockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.args {
            ArgsKey::Keyed(fp) => write!(f, "{}/{}", self.operation, &fp.to_hex()[..16]),
            ArgsKey::Unkeyed => write!(f, "{}/unkeyed", self.operation),
        }
    }
}

// ── Calls ────────────────────────────────────────────────────────────────────

/// A fully specified self-governance call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminCall {
    ModifyMinimumInterval { target: Operation, interval: Seconds },
    ModifyExpirationInterval { target: Operation, expiration: Seconds },
}

impl AdminCall {
    pub fn action(&self) -> AdminAction {
        match self {
            AdminCall::ModifyMinimumInterval { .. } => AdminAction::ModifyMinimumInterval,
            AdminCall::ModifyExpirationInterval { .. } => AdminAction::ModifyExpirationInterval,
        }
    }

    pub fn target(&self) -> Operation {
        match self {
            AdminCall::ModifyMinimumInterval { target, .. }
            | AdminCall::ModifyExpirationInterval { target, .. } => *target,
        }
    }
}

/// A call as the host announces and later enforces it: the operation plus
/// its canonically encoded arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Call {
    Gated {
        operation: OperationId,
        arguments: Vec<u8>,
    },
    Admin(AdminCall),
}

impl Call {
    pub fn gated(operation: OperationId, arguments: Vec<u8>) -> Self {
        Call::Gated { operation, arguments }
    }

    pub fn modify_minimum_interval(target: impl Into<Operation>, interval: Seconds) -> Self {
        Call::Admin(AdminCall::ModifyMinimumInterval {
            target: target.into(),
            interval,
        })
    }

    pub fn modify_expiration_interval(target: impl Into<Operation>, expiration: Seconds) -> Self {
        Call::Admin(AdminCall::ModifyExpirationInterval {
            target: target.into(),
            expiration,
        })
    }

    /// The operation whose interval and expiration govern this call.
    pub fn operation(&self) -> Operation {
        match self {
            Call::Gated { operation, .. } => Operation::Gated(*operation),
            Call::Admin(admin) => Operation::Admin(admin.action()),
        }
    }
}
