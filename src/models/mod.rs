//! Scheduling domain models.
//!
//! Core data types for the weekly duty schedule: people and their
//! roles, the fixed week shape, individual slots, and the two owning
//! collections (roster and grid).
//!
//! Mutation is layered: [`Roster`] and [`Grid`] expose storage-level
//! operations with no cross-entity policy; the
//! [`Scheduler`](crate::scheduler::Scheduler) is the only component
//! that keeps the two consistent.

mod grid;
mod person;
mod roster;
mod slot;
mod week;

pub use grid::Grid;
pub use person::{Person, Role, ADVISER_CAPACITY, TEACHER_CAPACITY};
pub use roster::Roster;
pub use slot::{slot_id, Slot};
pub use week::{Day, DAYS, TIMESLOTS};
