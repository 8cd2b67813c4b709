//! Error types for scheduling operations.
//!
//! Every fallible operation returns one of these kinds synchronously.
//! Failures never leave partial state behind: an operation either fully
//! applies or changes nothing.

use thiserror::Error;

/// Result alias for scheduling operations.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

/// Errors produced by roster, grid, and scheduler operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A person's name was empty or whitespace-only.
    #[error("name must not be empty")]
    InvalidInput,
    /// A person or slot ID did not resolve.
    #[error("unknown person or slot: {0}")]
    NotFound(String),
    /// The person already holds the maximum slots for their role.
    #[error("{name} has reached the maximum assigned slots")]
    CapacityExceeded {
        /// Display name of the person at capacity.
        name: String,
    },
    /// The target slot already has an occupant.
    #[error("slot '{slot_id}' is already occupied")]
    SlotOccupied {
        /// ID of the occupied slot.
        slot_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_names_the_person() {
        let err = ScheduleError::CapacityExceeded {
            name: "Alice".into(),
        };
        assert_eq!(
            err.to_string(),
            "Alice has reached the maximum assigned slots"
        );
    }

    #[test]
    fn test_not_found_carries_id() {
        let err = ScheduleError::NotFound("missing".into());
        assert!(err.to_string().contains("missing"));
    }
}
