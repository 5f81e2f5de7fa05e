pub mod constants;
pub mod error;
pub mod event;
pub mod operation;
pub mod record;
pub mod types;

pub use constants::*;
pub use error::GatelockError;
pub use event::TimelockEvent;
pub use operation::*;
pub use record::{TimelockRecord, TimelockStatus};
pub use types::*;
