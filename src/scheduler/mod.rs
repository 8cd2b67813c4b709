//! The scheduling coordinator and its reporting companion.
//!
//! `Scheduler` is the sole entry point for mutating commands against
//! the roster and grid; `ScheduleStats` summarizes the resulting
//! occupancy for reporting boundaries.

mod coordinator;
mod stats;

pub use coordinator::Scheduler;
pub use stats::ScheduleStats;
