//! Schedule occupancy metrics.
//!
//! Read-side derivation over the roster and grid, for reporting
//! boundaries that want a summary rather than the raw cell list.

use std::collections::HashMap;

use crate::models::{Grid, Role, Roster};

/// Occupancy and load summary of the current schedule.
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    /// Total number of slots in the grid.
    pub total_slots: usize,
    /// Slots currently holding an occupant.
    pub occupied_slots: usize,
    /// Slots currently free.
    pub free_slots: usize,
    /// Fraction of slots occupied (0.0..1.0).
    pub occupancy_rate: f64,
    /// Slots held per person, keyed by person ID. People with no
    /// assignments appear with a count of 0.
    pub load_by_person: HashMap<String, u32>,
    /// Total slots held by teachers.
    pub teacher_slots: u32,
    /// Total slots held by advisers.
    pub adviser_slots: u32,
}

impl ScheduleStats {
    /// Computes the summary from the current roster and grid state.
    pub fn calculate(roster: &Roster, grid: &Grid) -> Self {
        let total_slots = grid.len();
        let occupied_slots = grid.occupied_count();

        let mut load_by_person = HashMap::new();
        let mut teacher_slots = 0;
        let mut adviser_slots = 0;

        for person in roster.iter() {
            load_by_person.insert(person.id.clone(), person.assigned_count());
            match person.role {
                Role::Teacher => teacher_slots += person.assigned_count(),
                Role::Adviser => adviser_slots += person.assigned_count(),
            }
        }

        let occupancy_rate = if total_slots == 0 {
            0.0
        } else {
            occupied_slots as f64 / total_slots as f64
        };

        Self {
            total_slots,
            occupied_slots,
            free_slots: total_slots - occupied_slots,
            occupancy_rate,
            load_by_person,
            teacher_slots,
            adviser_slots,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{slot_id, Day, TIMESLOTS};
    use crate::scheduler::Scheduler;

    #[test]
    fn test_stats_empty_schedule() {
        let sched = Scheduler::new();
        let stats = sched.stats();
        assert_eq!(stats.total_slots, 40);
        assert_eq!(stats.occupied_slots, 0);
        assert_eq!(stats.free_slots, 40);
        assert!((stats.occupancy_rate - 0.0).abs() < 1e-10);
        assert!(stats.load_by_person.is_empty());
    }

    #[test]
    fn test_stats_counts_by_role() {
        let mut sched = Scheduler::new();
        let alice = sched.add_person("Alice", crate::Role::Teacher).unwrap();
        let bob = sched.add_person("Bob", crate::Role::Adviser).unwrap();

        sched
            .assign(&slot_id(Day::Monday, TIMESLOTS[0]), &alice.id)
            .unwrap();
        sched
            .assign(&slot_id(Day::Monday, TIMESLOTS[1]), &alice.id)
            .unwrap();
        sched
            .assign(&slot_id(Day::Tuesday, TIMESLOTS[0]), &bob.id)
            .unwrap();

        let stats = sched.stats();
        assert_eq!(stats.occupied_slots, 3);
        assert_eq!(stats.free_slots, 37);
        assert!((stats.occupancy_rate - 3.0 / 40.0).abs() < 1e-10);
        assert_eq!(stats.teacher_slots, 2);
        assert_eq!(stats.adviser_slots, 1);
        assert_eq!(stats.load_by_person[&alice.id], 2);
        assert_eq!(stats.load_by_person[&bob.id], 1);
    }

    #[test]
    fn test_stats_idle_person_listed_with_zero() {
        let mut sched = Scheduler::new();
        let carol = sched.add_person("Carol", crate::Role::Teacher).unwrap();
        let stats = sched.stats();
        assert_eq!(stats.load_by_person[&carol.id], 0);
    }
}
