//! Slot-assignment engine for a weekly class duty schedule.
//!
//! Assigns teachers and advisers to a fixed Monday–Friday grid of
//! teaching periods while enforcing per-role capacity limits and
//! keeping the personnel roster and the grid mutually consistent.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Person`, `Role`, `Slot`, `Day`,
//!   `Roster`, `Grid`, and the fixed week constants
//! - **`scheduler`**: `Scheduler`, the sole mutation surface, plus
//!   `ScheduleStats` occupancy metrics
//! - **`audit`**: Cross-entity consistency checks for tests and
//!   debugging
//! - **`error`**: `ScheduleError` and the `ScheduleResult` alias
//!
//! # Design
//!
//! The roster and grid expose storage-level operations only; every
//! cross-entity invariant (capacity limits, counter/occupancy
//! agreement, removal cascades) is enforced by the `Scheduler`, which
//! owns both and runs each command as an atomic sequence of in-memory
//! mutations. Execution is single-threaded and synchronous throughout.
//!
//! # Example
//!
//! ```
//! use class_sched::{Day, Role, Scheduler, TIMESLOTS};
//!
//! let mut sched = Scheduler::new();
//! let alice = sched.add_person("Alice", Role::Teacher)?;
//!
//! let slot = sched.find_slot(Day::Monday, TIMESLOTS[0])?.id.clone();
//! sched.assign(&slot, &alice.id)?;
//! assert_eq!(sched.occupant_of(&slot).unwrap().name, "Alice");
//!
//! sched.unassign(&slot);
//! assert_eq!(sched.person(&alice.id).unwrap().assigned_count(), 0);
//! # Ok::<(), class_sched::ScheduleError>(())
//! ```

pub mod audit;
pub mod error;
pub mod models;
pub mod scheduler;

pub use error::{ScheduleError, ScheduleResult};
pub use models::{
    slot_id, Day, Grid, Person, Role, Roster, Slot, ADVISER_CAPACITY, DAYS, TEACHER_CAPACITY,
    TIMESLOTS,
};
pub use scheduler::{ScheduleStats, Scheduler};
