//! Trigger mapping for the external workflow scheduler.
//!
//! Given the scheduling intent's declared job list, this crate derives one
//! stable, identifier-safe scheduling unit per job:
//!
//! - **Mapper** - sanitized labels with collision detection at setup time
//! - **Trigger** - the stateless run-job action each unit invokes
//!
//! Unit naming is stable across orchestrator restarts for unchanged
//! configuration, since labels are a pure function of the job names.

mod error;
mod mapper;
mod trigger;

pub use error::IdentifierCollisionError;
pub use mapper::{map_triggers, sanitize_label};
pub use trigger::run_trigger;
