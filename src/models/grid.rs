//! Grid model.
//!
//! The grid owns the fixed set of day×time cells and their occupancy.
//! Cells are created once at construction and never added or removed;
//! only the occupant reference of each cell mutates. The grid stores
//! occupants as raw person IDs and enforces no business policy — the
//! scheduler sequences capacity checks before any mutation here.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

use super::{slot_id, Day, Slot, DAYS, TIMESLOTS};

/// The fixed weekly set of schedulable slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    // Day-major: all of Monday's periods, then Tuesday's, and so on.
    slots: IndexMap<String, Slot>,
}

impl Grid {
    /// Builds the full week of unoccupied slots, one per (day, time)
    /// pair.
    pub fn new() -> Self {
        let slots = DAYS
            .iter()
            .flat_map(|&day| TIMESLOTS.iter().map(move |&time| Slot::new(day, time)))
            .map(|slot| (slot.id.clone(), slot))
            .collect();
        Self { slots }
    }

    /// Looks up a slot by ID.
    pub fn get(&self, slot_id: &str) -> Option<&Slot> {
        self.slots.get(slot_id)
    }

    /// Looks up a slot by its (day, time) pair.
    ///
    /// Fails with [`ScheduleError::NotFound`] if the pair is outside
    /// the configured week shape.
    pub fn find(&self, day: Day, time: &str) -> ScheduleResult<&Slot> {
        let id = slot_id(day, time);
        self.slots
            .get(&id)
            .ok_or(ScheduleError::NotFound(id))
    }

    /// Sets or clears a slot's occupant reference.
    ///
    /// Low-level storage operation: no capacity or occupancy policy is
    /// applied here. Fails with [`ScheduleError::NotFound`] for an
    /// unknown slot ID.
    pub fn set_occupant(
        &mut self,
        slot_id: &str,
        occupant: Option<String>,
    ) -> ScheduleResult<()> {
        let slot = self
            .slots
            .get_mut(slot_id)
            .ok_or_else(|| ScheduleError::NotFound(slot_id.to_string()))?;
        slot.occupant = occupant;
        Ok(())
    }

    /// Clears a slot's occupant. No-op if the slot is unknown or
    /// already free.
    pub fn clear(&mut self, slot_id: &str) {
        if let Some(slot) = self.slots.get_mut(slot_id) {
            slot.occupant = None;
        }
    }

    /// Releases every slot held by a person, returning how many were
    /// cleared. Used when a person is removed from the roster.
    pub fn clear_all_for(&mut self, person_id: &str) -> usize {
        let mut cleared = 0;
        for slot in self.slots.values_mut() {
            if slot.occupant.as_deref() == Some(person_id) {
                slot.occupant = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// All slots grouped by day then time.
    pub fn slots(&self) -> impl Iterator<Item = &Slot> {
        self.slots.values()
    }

    /// All slots of one day, in period order.
    pub fn slots_for_day(&self, day: Day) -> impl Iterator<Item = &Slot> {
        self.slots.values().filter(move |s| s.day == day)
    }

    /// Number of slots currently holding an occupant.
    pub fn occupied_count(&self) -> usize {
        self.slots.values().filter(|s| !s.is_free()).count()
    }

    /// Number of slots a person currently holds.
    pub fn count_for(&self, person_id: &str) -> usize {
        self.slots
            .values()
            .filter(|s| s.occupant.as_deref() == Some(person_id))
            .count()
    }

    /// Total number of slots (|days| × |timeslots|).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the grid has no slots. Always false for the fixed week.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_week_has_forty_free_slots() {
        let grid = Grid::new();
        assert_eq!(grid.len(), DAYS.len() * TIMESLOTS.len());
        assert_eq!(grid.len(), 40);
        assert!(grid.slots().all(Slot::is_free));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_slots_ordered_day_major() {
        let grid = Grid::new();
        let first: Vec<&Slot> = grid.slots().take(9).collect();
        assert_eq!(first[0].day, Day::Monday);
        assert_eq!(first[0].time, TIMESLOTS[0]);
        assert_eq!(first[7].day, Day::Monday);
        assert_eq!(first[7].time, TIMESLOTS[7]);
        assert_eq!(first[8].day, Day::Tuesday);
    }

    #[test]
    fn test_find_by_day_and_time() {
        let grid = Grid::new();
        let slot = grid.find(Day::Wednesday, "8:00am - 9:00am").unwrap();
        assert_eq!(slot.day, Day::Wednesday);
        assert_eq!(slot.time, "8:00am - 9:00am");

        assert!(matches!(
            grid.find(Day::Monday, "3:00pm - 4:00pm"),
            Err(ScheduleError::NotFound(_))
        ));
    }

    #[test]
    fn test_set_occupant_unknown_slot() {
        let mut grid = Grid::new();
        assert!(matches!(
            grid.set_occupant("nowhere", Some("p1".into())),
            Err(ScheduleError::NotFound(_))
        ));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut grid = Grid::new();
        let id = slot_id(Day::Monday, TIMESLOTS[0]);
        grid.set_occupant(&id, Some("p1".into())).unwrap();

        grid.clear(&id);
        assert!(grid.get(&id).unwrap().is_free());
        grid.clear(&id); // already free
        grid.clear("nowhere"); // unknown slot
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_clear_all_for_releases_every_slot() {
        let mut grid = Grid::new();
        let a = slot_id(Day::Monday, TIMESLOTS[0]);
        let b = slot_id(Day::Friday, TIMESLOTS[3]);
        let c = slot_id(Day::Tuesday, TIMESLOTS[5]);
        grid.set_occupant(&a, Some("p1".into())).unwrap();
        grid.set_occupant(&b, Some("p1".into())).unwrap();
        grid.set_occupant(&c, Some("p2".into())).unwrap();

        assert_eq!(grid.clear_all_for("p1"), 2);
        assert_eq!(grid.count_for("p1"), 0);
        // Other occupants untouched.
        assert_eq!(grid.count_for("p2"), 1);
    }

    #[test]
    fn test_serde_snapshot_preserves_occupancy() {
        let mut grid = Grid::new();
        let id = slot_id(Day::Monday, TIMESLOTS[0]);
        grid.set_occupant(&id, Some("p1".into())).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let restored: Grid = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), 40);
        assert_eq!(restored.get(&id).unwrap().occupant(), Some("p1"));
        // Day-major ordering survives the round trip.
        assert_eq!(restored.slots().next().unwrap().id, id);
    }

    #[test]
    fn test_slots_for_day() {
        let grid = Grid::new();
        let thursday: Vec<&Slot> = grid.slots_for_day(Day::Thursday).collect();
        assert_eq!(thursday.len(), TIMESLOTS.len());
        assert!(thursday.iter().all(|s| s.day == Day::Thursday));
    }
}
