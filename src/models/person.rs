//! Person model.
//!
//! A person is a teacher or adviser registered in the roster. Each
//! person tracks how many grid slots they currently hold; the counter
//! is mutated only through [`Roster`](super::Roster) operations so it
//! always matches the grid's occupancy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum slots a teacher may hold at once.
pub const TEACHER_CAPACITY: u32 = 6;

/// Maximum slots an adviser may hold at once.
pub const ADVISER_CAPACITY: u32 = 5;

/// The role a person serves in, fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Teacher,
    Adviser,
}

impl Role {
    /// The slot capacity for this role.
    ///
    /// Fixed policy: teachers hold up to 6 slots, advisers up to 5.
    pub const fn capacity(self) -> u32 {
        match self {
            Role::Teacher => TEACHER_CAPACITY,
            Role::Adviser => ADVISER_CAPACITY,
        }
    }

    /// Display name of the role.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Teacher => "teacher",
            Role::Adviser => "adviser",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered teacher or adviser.
///
/// The `assigned` counter equals the number of grid slots currently
/// referencing this person and never exceeds `role.capacity()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier, assigned at creation.
    pub id: String,
    /// Display name (non-empty).
    pub name: String,
    /// Role, immutable after creation.
    pub role: Role,
    /// Number of slots currently held. Mutated only by the roster.
    pub(crate) assigned: u32,
}

impl Person {
    /// Creates a person with no slot assignments.
    pub(crate) fn new(id: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            assigned: 0,
        }
    }

    /// Number of slots this person currently holds.
    #[inline]
    pub fn assigned_count(&self) -> u32 {
        self.assigned
    }

    /// Whether this person can take another slot.
    #[inline]
    pub fn has_capacity(&self) -> bool {
        self.assigned < self.role.capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_capacities() {
        assert_eq!(Role::Teacher.capacity(), 6);
        assert_eq!(Role::Adviser.capacity(), 5);
    }

    #[test]
    fn test_new_person_starts_unassigned() {
        let p = Person::new("id-1", "Alice", Role::Teacher);
        assert_eq!(p.assigned_count(), 0);
        assert!(p.has_capacity());
    }

    #[test]
    fn test_has_capacity_at_limit() {
        let mut p = Person::new("id-2", "Bob", Role::Adviser);
        p.assigned = ADVISER_CAPACITY;
        assert!(!p.has_capacity());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Teacher.to_string(), "teacher");
        assert_eq!(Role::Adviser.to_string(), "adviser");
    }
}
