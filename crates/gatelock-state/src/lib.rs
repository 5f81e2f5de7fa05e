//! gatelock-state
//!
//! Owns every timelock record and both per-operation configuration maps.
//! `TimelockStore` holds the data; `TimelockEngine` is the only writer.
//! Construction-time seeding goes through `TimelockBuilder`, which is
//! consumed when the engine is built.

pub mod builder;
pub mod engine;
pub mod store;

pub use builder::TimelockBuilder;
pub use engine::TimelockEngine;
pub use store::TimelockStore;
