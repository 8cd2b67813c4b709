//! The fixed weekly shape of the schedule.
//!
//! The grid always spans Monday through Friday with the same eight
//! teaching periods per day. These constants define the grid's shape
//! and never change at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A schedulable weekday.
///
/// Ordered Monday first; iteration and grid construction follow this
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

/// The schedulable weekdays, in display order.
pub const DAYS: [Day; 5] = [
    Day::Monday,
    Day::Tuesday,
    Day::Wednesday,
    Day::Thursday,
    Day::Friday,
];

/// The eight teaching periods, identical across all days.
pub const TIMESLOTS: [&str; 8] = [
    "6:00am - 7:00am",
    "7:00am - 8:00am",
    "8:00am - 9:00am",
    "9:10am - 10:10am",
    "10:10am - 11:10am",
    "11:10am - 12:10pm",
    "12:15pm - 1:15pm",
    "1:15pm - 2:15pm",
];

impl Day {
    /// All weekdays in display order.
    pub const ALL: [Day; 5] = DAYS;

    /// Display name of the day.
    pub const fn as_str(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
