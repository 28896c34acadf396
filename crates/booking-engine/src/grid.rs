//! Candidate time-slot grid generation.
//!
//! Produces the ordered list of bookable start offsets for a working-hours
//! window and a meeting duration, before any busy-interval subtraction.

use serde::{Deserialize, Serialize};

/// A bookable start time, in minutes since local midnight.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub offset_minutes: u32,
}

impl TimeSlot {
    pub fn new(offset_minutes: u32) -> Self {
        Self { offset_minutes }
    }

    /// Zero-padded "HH:MM" label for presentation boundaries.
    pub fn label(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.offset_minutes / 60,
            self.offset_minutes % 60
        )
    }
}

/// A daily working-hours window, in whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for WorkingHours {
    /// The 9:00-17:00 window the booking page offers.
    fn default() -> Self {
        Self {
            start_hour: 9,
            end_hour: 17,
        }
    }
}

/// Generate the candidate slot grid for a working-hours window.
///
/// Offsets start at `start_hour * 60` and step by `duration_minutes`,
/// stopping once the next offset would pass `end_hour * 60`. A slot landing
/// exactly on the closing hour is included, so an appointment may start at
/// close. A duration longer than the whole window still yields the opening
/// slot.
///
/// Malformed input (`duration_minutes == 0`, an empty or inverted window,
/// `end_hour > 24`) yields an empty grid; callers treat that as a day with
/// no availability. No input makes this function fail.
pub fn generate_slots(start_hour: u32, end_hour: u32, duration_minutes: u32) -> Vec<TimeSlot> {
    if duration_minutes == 0 || start_hour >= end_hour || end_hour > 24 {
        return Vec::new();
    }

    let close = end_hour * 60;
    let mut offset = start_hour * 60;
    let mut slots = Vec::new();
    while offset <= close {
        slots.push(TimeSlot::new(offset));
        offset += duration_minutes;
    }
    slots
}
