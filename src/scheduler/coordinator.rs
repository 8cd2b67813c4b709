//! The scheduling coordinator.
//!
//! `Scheduler` owns both the roster and the grid and is the sole entry
//! point for mutating commands. Every command applies fully or changes
//! nothing: the capacity check runs before any mutation, and the two
//! halves of cross-entity commands (occupant reference + slot counter)
//! are applied back to back with no fallible step between them.

use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{Day, Grid, Person, Role, Roster, Slot};

use super::ScheduleStats;

/// Coordinates the roster and grid, enforcing the invariants neither
/// can enforce alone.
///
/// Single-threaded by design: all commands take `&mut self` and run to
/// completion, so no locking discipline is needed. A concurrent
/// adaptation must guard each instance with one mutual-exclusion
/// boundary around whole commands.
///
/// # Example
///
/// ```
/// use class_sched::{Scheduler, Role, Day, TIMESLOTS};
///
/// let mut sched = Scheduler::new();
/// let alice = sched.add_person("Alice", Role::Teacher).unwrap();
///
/// let slot_id = sched.find_slot(Day::Monday, TIMESLOTS[0]).unwrap().id.clone();
/// sched.assign(&slot_id, &alice.id).unwrap();
///
/// assert_eq!(sched.person(&alice.id).unwrap().assigned_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    roster: Roster,
    grid: Grid,
}

impl Scheduler {
    /// Creates a scheduler with an empty roster and a full week of
    /// unoccupied slots.
    pub fn new() -> Self {
        Self {
            roster: Roster::new(),
            grid: Grid::new(),
        }
    }

    /// Registers a new person.
    ///
    /// Fails with [`ScheduleError::InvalidInput`] on an empty or
    /// whitespace-only name.
    pub fn add_person(&mut self, name: impl Into<String>, role: Role) -> ScheduleResult<Person> {
        self.roster.add(name, role).map(Person::clone)
    }

    /// Removes a person and releases every slot they hold.
    ///
    /// Idempotent: unknown IDs are a no-op. Roster removal and slot
    /// release form one logical transaction — there is no observable
    /// state where the person is gone but still referenced by a cell.
    pub fn remove_person(&mut self, id: &str) {
        if self.roster.remove(id).is_some() {
            self.grid.clear_all_for(id);
        }
    }

    /// Assigns a person to a slot.
    ///
    /// Checks run in order: the person must exist
    /// ([`ScheduleError::NotFound`]), must be under their role's
    /// capacity ([`ScheduleError::CapacityExceeded`]), the slot must
    /// exist ([`ScheduleError::NotFound`]) and must be empty
    /// ([`ScheduleError::SlotOccupied`]). On any failure no state
    /// changes.
    pub fn assign(&mut self, slot_id: &str, person_id: &str) -> ScheduleResult<()> {
        let person = self
            .roster
            .get(person_id)
            .ok_or_else(|| ScheduleError::NotFound(person_id.to_string()))?;
        if !person.has_capacity() {
            return Err(ScheduleError::CapacityExceeded {
                name: person.name.clone(),
            });
        }

        let slot = self
            .grid
            .get(slot_id)
            .ok_or_else(|| ScheduleError::NotFound(slot_id.to_string()))?;
        if !slot.is_free() {
            return Err(ScheduleError::SlotOccupied {
                slot_id: slot_id.to_string(),
            });
        }

        // All checks passed; both mutations are infallible from here.
        self.grid
            .set_occupant(slot_id, Some(person_id.to_string()))?;
        self.roster.increment_count(person_id)
    }

    /// Removes the occupant of a slot, if any.
    ///
    /// Idempotent: an empty or unknown slot is a no-op.
    pub fn unassign(&mut self, slot_id: &str) {
        let occupant = self
            .grid
            .get(slot_id)
            .and_then(|s| s.occupant().map(str::to_string));
        if let Some(person_id) = occupant {
            self.grid.clear(slot_id);
            // An occupant always resolves in the roster: remove_person
            // clears the grid before returning. Discard the impossible
            // NotFound rather than fail an idempotent command.
            let _ = self.roster.decrement_count(&person_id);
        }
    }

    /// People of a role still under capacity, in insertion order.
    pub fn list_available(&self, role: Role) -> Vec<&Person> {
        self.roster.list_available(role)
    }

    /// All registered people of a role, in insertion order.
    pub fn list_people(&self, role: Role) -> impl Iterator<Item = &Person> {
        self.roster.list(role)
    }

    /// All slots grouped by day then time, for rendering.
    pub fn schedule(&self) -> impl Iterator<Item = &Slot> {
        self.grid.slots()
    }

    /// Looks up a registered person by ID.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.roster.get(id)
    }

    /// Looks up a slot by its (day, time) pair.
    pub fn find_slot(&self, day: Day, time: &str) -> ScheduleResult<&Slot> {
        self.grid.find(day, time)
    }

    /// Resolves a slot's occupant through the roster.
    pub fn occupant_of(&self, slot_id: &str) -> Option<&Person> {
        self.grid
            .get(slot_id)?
            .occupant()
            .and_then(|id| self.roster.get(id))
    }

    /// Occupancy and per-person load metrics for the current state.
    pub fn stats(&self) -> ScheduleStats {
        ScheduleStats::calculate(&self.roster, &self.grid)
    }

    /// Read access to the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Read access to the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}
