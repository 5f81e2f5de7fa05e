//! gatelock-timelock
//!
//! Read-side and planning layer over the timelock engine.
//! Announce/enforce and self-governance live in gatelock-state's
//! TimelockEngine. This crate provides queries, human-readable summaries,
//! schedule previews and the cancel-by-extension helper.

pub mod query;
pub mod schedule;

pub use query::{TimelockQuery, TimelockView};
pub use schedule::{cancel_by_extension, extension_to_supersede, preview};
