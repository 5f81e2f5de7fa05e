use gatelock_core::error::GatelockError;
use gatelock_core::event::TimelockEvent;
use gatelock_core::operation::Operation;
use gatelock_core::types::Seconds;

use crate::engine::TimelockEngine;
use crate::store::TimelockStore;

/// Construction phase of a [`TimelockEngine`].
///
/// The initializers apply the same validation and raise the same
/// notifications as the gated setters, but need no prior announcement. They
/// exist only on this type; `build` consumes it, so nothing can seed the
/// engine after it has been handed to callers.
#[derive(Debug)]
pub struct TimelockBuilder {
    engine: TimelockEngine,
}

impl Default for TimelockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimelockBuilder {
    pub fn new() -> Self {
        Self {
            engine: TimelockEngine::from_parts(TimelockStore::new(), Vec::new()),
        }
    }

    pub fn initialize_minimum_interval(
        mut self,
        operation: impl Into<Operation>,
        interval: Seconds,
    ) -> Result<Self, GatelockError> {
        self.engine.set_minimum_interval(operation.into(), interval)?;
        Ok(self)
    }

    pub fn initialize_expiration_interval(
        mut self,
        operation: impl Into<Operation>,
        expiration: Seconds,
    ) -> Result<Self, GatelockError> {
        self.engine.set_expiration_interval(operation.into(), expiration)?;
        Ok(self)
    }

    /// Notifications raised by the initializers so far.
    pub fn events(&self) -> &[TimelockEvent] {
        self.engine.events()
    }

    /// Finish construction. Initializer notifications stay queued on the
    /// engine until the host drains them.
    ///
    /// ```
    /// use gatelock_core::operation::AdminAction;
    /// use gatelock_state::TimelockEngine;
    ///
    /// let engine = TimelockEngine::builder()
    ///     .initialize_expiration_interval(AdminAction::ModifyMinimumInterval, 3_600)
    ///     .unwrap()
    ///     .build();
    /// assert_eq!(engine.expiration_interval(AdminAction::ModifyMinimumInterval), 3_600);
    /// ```
    ///
    /// The engine has no initializers:
    ///
    /// ```compile_fail
    /// use gatelock_core::operation::AdminAction;
    /// use gatelock_state::TimelockEngine;
    ///
    /// let engine = TimelockEngine::builder().build();
    /// let _ = engine.initialize_minimum_interval(AdminAction::ModifyMinimumInterval, 0);
    /// ```
    ///
    /// nor public setters:
    ///
    /// ```compile_fail
    /// use gatelock_core::operation::{AdminAction, Operation};
    /// use gatelock_state::TimelockEngine;
    ///
    /// let mut engine = TimelockEngine::builder().build();
    /// let op = Operation::Admin(AdminAction::ModifyMinimumInterval);
    /// let _ = engine.set_minimum_interval(op, 0);
    /// ```
    ///
    /// and the builder is gone once built:
    ///
    /// ```compile_fail
    /// use gatelock_core::operation::AdminAction;
    /// use gatelock_state::TimelockEngine;
    ///
    /// let builder = TimelockEngine::builder();
    /// let _engine = builder.build();
    /// let _ = builder.initialize_minimum_interval(AdminAction::ModifyMinimumInterval, 0);
    /// ```
    pub fn build(self) -> TimelockEngine {
        self.engine
    }
}
