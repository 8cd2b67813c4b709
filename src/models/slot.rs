//! Timeslot (cell) model.
//!
//! A slot is one schedulable unit of the weekly grid, identified by its
//! (day, time) pair. A slot holds at most one occupant as a non-owning
//! back-reference: the person ID, resolved through the roster. Person
//! lifetime is governed by the roster, never by the grid.

use serde::{Deserialize, Serialize};

use super::Day;

/// Derives the deterministic slot ID for a (day, time) pair.
///
/// Stable for the lifetime of the grid, so lookups are
/// order-independent.
pub fn slot_id(day: Day, time: &str) -> String {
    format!("{day}-{time}")
}

/// One cell of the weekly grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slot {
    /// Deterministic ID derived from (day, time).
    pub id: String,
    /// Weekday this slot belongs to.
    pub day: Day,
    /// Period label, one of the fixed timeslot set.
    pub time: String,
    /// ID of the assigned person, `None` when free.
    pub(crate) occupant: Option<String>,
}

impl Slot {
    /// Creates an unoccupied slot for the given (day, time) pair.
    pub(crate) fn new(day: Day, time: impl Into<String>) -> Self {
        let time = time.into();
        Self {
            id: slot_id(day, &time),
            day,
            time,
            occupant: None,
        }
    }

    /// ID of the assigned person, if any.
    #[inline]
    pub fn occupant(&self) -> Option<&str> {
        self.occupant.as_deref()
    }

    /// Whether this slot has no occupant.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_id_derivation() {
        assert_eq!(
            slot_id(Day::Monday, "6:00am - 7:00am"),
            "Monday-6:00am - 7:00am"
        );
    }

    #[test]
    fn test_new_slot_is_free() {
        let s = Slot::new(Day::Tuesday, "7:00am - 8:00am");
        assert!(s.is_free());
        assert_eq!(s.occupant(), None);
        assert_eq!(s.id, "Tuesday-7:00am - 8:00am");
    }
}
