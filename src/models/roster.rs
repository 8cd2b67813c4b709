//! Roster model.
//!
//! The roster owns the canonical set of registered people, split into
//! two disjoint collections keyed by role. Both collections preserve
//! insertion order for display. A person's ID appears in exactly one
//! collection from creation to removal.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ScheduleError, ScheduleResult};

use super::{Person, Role};

/// The registered teachers and advisers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    teachers: IndexMap<String, Person>,
    advisers: IndexMap<String, Person>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new person and returns a reference to them.
    ///
    /// Fails with [`ScheduleError::InvalidInput`] if the name is empty
    /// or whitespace-only. The generated ID is guaranteed unique across
    /// both collections.
    pub fn add(&mut self, name: impl Into<String>, role: Role) -> ScheduleResult<&Person> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ScheduleError::InvalidInput);
        }

        let mut id = Uuid::new_v4().to_string();
        // Regenerate on the (vanishingly unlikely) v4 collision.
        while self.contains(&id) {
            id = Uuid::new_v4().to_string();
        }

        let person = Person::new(id.clone(), name, role);
        Ok(self.collection_mut(role).entry(id).or_insert(person))
    }

    /// Removes a person, returning them if they were registered.
    ///
    /// Idempotent: removing an unknown ID is a no-op returning `None`.
    /// Callers that also hold a grid must clear the person's slots in
    /// the same logical transaction (the scheduler does this).
    pub fn remove(&mut self, id: &str) -> Option<Person> {
        // shift_remove keeps the remaining display order intact.
        self.teachers
            .shift_remove(id)
            .or_else(|| self.advisers.shift_remove(id))
    }

    /// Looks up a person by ID in either collection.
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.teachers.get(id).or_else(|| self.advisers.get(id))
    }

    /// Whether an ID is registered in either collection.
    pub fn contains(&self, id: &str) -> bool {
        self.teachers.contains_key(id) || self.advisers.contains_key(id)
    }

    /// All people of a role, in insertion order.
    pub fn list(&self, role: Role) -> impl Iterator<Item = &Person> {
        self.collection(role).values()
    }

    /// People of a role still under their capacity, in insertion order.
    ///
    /// A person at capacity never appears here.
    pub fn list_available(&self, role: Role) -> Vec<&Person> {
        self.collection(role)
            .values()
            .filter(|p| p.has_capacity())
            .collect()
    }

    /// All registered people, teachers first, each in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.teachers.values().chain(self.advisers.values())
    }

    /// Total number of registered people.
    pub fn len(&self) -> usize {
        self.teachers.len() + self.advisers.len()
    }

    /// Whether no one is registered.
    pub fn is_empty(&self) -> bool {
        self.teachers.is_empty() && self.advisers.is_empty()
    }

    /// Increments a person's slot counter.
    ///
    /// Fails with [`ScheduleError::NotFound`] for an unknown ID and
    /// [`ScheduleError::CapacityExceeded`] if the person is already at
    /// their role's limit. No change on failure.
    pub fn increment_count(&mut self, id: &str) -> ScheduleResult<()> {
        let person = self
            .get_mut(id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))?;
        if !person.has_capacity() {
            return Err(ScheduleError::CapacityExceeded {
                name: person.name.clone(),
            });
        }
        person.assigned += 1;
        Ok(())
    }

    /// Decrements a person's slot counter, clamped at zero.
    ///
    /// Fails with [`ScheduleError::NotFound`] for an unknown ID.
    pub fn decrement_count(&mut self, id: &str) -> ScheduleResult<()> {
        let person = self
            .get_mut(id)
            .ok_or_else(|| ScheduleError::NotFound(id.to_string()))?;
        person.assigned = person.assigned.saturating_sub(1);
        Ok(())
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.teachers
            .get_mut(id)
            .or_else(|| self.advisers.get_mut(id))
    }

    fn collection(&self, role: Role) -> &IndexMap<String, Person> {
        match role {
            Role::Teacher => &self.teachers,
            Role::Adviser => &self.advisers,
        }
    }

    fn collection_mut(&mut self, role: Role) -> &mut IndexMap<String, Person> {
        match role {
            Role::Teacher => &mut self.teachers,
            Role::Adviser => &mut self.advisers,
        }
    }
}
