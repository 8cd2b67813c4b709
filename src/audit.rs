//! Cross-entity consistency checks.
//!
//! Verifies the invariants the scheduler maintains between roster and
//! grid. Intended for tests and debug assertions; a scheduler driven
//! only through its own commands always passes.
//!
//! Checks:
//! - Every slot occupant resolves to a registered person
//! - Every person's counter equals the number of slots they hold
//! - No counter exceeds its role capacity
//! - The grid holds exactly |days| × |timeslots| cells

use crate::models::{Grid, Roster, DAYS, TIMESLOTS};

/// Audit result.
pub type AuditResult = Result<(), Vec<AuditError>>;

/// A detected consistency violation.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditError {
    /// Violation category.
    pub kind: AuditErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of consistency violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditErrorKind {
    /// A slot references a person absent from the roster.
    DanglingOccupant,
    /// A person's counter disagrees with the grid's occupancy.
    CountMismatch,
    /// A person's counter exceeds their role capacity.
    OverCapacity,
    /// The grid's cell count differs from the fixed week shape.
    WrongGridShape,
}

impl AuditError {
    fn new(kind: AuditErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Audits the roster and grid for consistency.
///
/// Returns `Ok(())` if all checks pass, `Err(errors)` with every
/// detected violation.
pub fn audit(roster: &Roster, grid: &Grid) -> AuditResult {
    let mut errors = Vec::new();

    let expected = DAYS.len() * TIMESLOTS.len();
    if grid.len() != expected {
        errors.push(AuditError::new(
            AuditErrorKind::WrongGridShape,
            format!("grid has {} cells, expected {expected}", grid.len()),
        ));
    }

    for slot in grid.slots() {
        if let Some(occupant) = slot.occupant() {
            if !roster.contains(occupant) {
                errors.push(AuditError::new(
                    AuditErrorKind::DanglingOccupant,
                    format!("slot '{}' references unknown person '{occupant}'", slot.id),
                ));
            }
        }
    }

    for person in roster.iter() {
        let held = grid.count_for(&person.id);
        if person.assigned_count() as usize != held {
            errors.push(AuditError::new(
                AuditErrorKind::CountMismatch,
                format!(
                    "'{}' counts {} slots but holds {held}",
                    person.name,
                    person.assigned_count()
                ),
            ));
        }
        if person.assigned_count() > person.role.capacity() {
            errors.push(AuditError::new(
                AuditErrorKind::OverCapacity,
                format!(
                    "'{}' holds {} slots, over the {} limit of {}",
                    person.name,
                    person.assigned_count(),
                    person.role,
                    person.role.capacity()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{slot_id, Day, Role};
    use crate::scheduler::Scheduler;

    #[test]
    fn test_fresh_scheduler_is_consistent() {
        let sched = Scheduler::new();
        assert!(audit(sched.roster(), sched.grid()).is_ok());
    }

    #[test]
    fn test_command_sequence_stays_consistent() {
        let mut sched = Scheduler::new();
        let alice = sched.add_person("Alice", Role::Teacher).unwrap();
        let bob = sched.add_person("Bob", Role::Adviser).unwrap();

        sched
            .assign(&slot_id(Day::Monday, TIMESLOTS[0]), &alice.id)
            .unwrap();
        sched
            .assign(&slot_id(Day::Wednesday, TIMESLOTS[4]), &bob.id)
            .unwrap();
        sched.unassign(&slot_id(Day::Monday, TIMESLOTS[0]));
        sched.remove_person(&bob.id);

        assert!(audit(sched.roster(), sched.grid()).is_ok());
    }

    #[test]
    fn test_dangling_occupant_detected() {
        let roster = Roster::new();
        let mut grid = Grid::new();
        grid.set_occupant(&slot_id(Day::Monday, TIMESLOTS[0]), Some("ghost".into()))
            .unwrap();

        let errors = audit(&roster, &grid).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == AuditErrorKind::DanglingOccupant));
    }

    #[test]
    fn test_count_mismatch_detected() {
        let mut roster = Roster::new();
        let grid = Grid::new();
        let id = roster.add("Alice", Role::Teacher).unwrap().id.clone();
        // Counter says one slot, grid holds none.
        roster.increment_count(&id).unwrap();

        let errors = audit(&roster, &grid).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == AuditErrorKind::CountMismatch));
    }
}
