//! Selection state: which day and slot the visitor currently has picked.

use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityMap;
use crate::daykey::DayKey;
use crate::grid::TimeSlot;

/// How many days past today the fallback search will look for a bookable
/// day before giving up.
pub const LOOKAHEAD_DAYS: u32 = 30;

/// The visitor's current pick, re-validated against every availability
/// rebuild rather than reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Selection {
    /// Nothing bookable within the lookahead window.
    #[default]
    NoSelection,
    /// A day is picked but has no free slot. Only reachable through an
    /// explicit pick of a fully booked day, which the picker disables
    /// upstream.
    DayOnly { day: DayKey },
    /// A bookable day and a start slot on it.
    DayAndSlot { day: DayKey, slot: TimeSlot },
}

impl Selection {
    pub fn selected_day(&self) -> Option<DayKey> {
        match self {
            Selection::NoSelection => None,
            Selection::DayOnly { day } | Selection::DayAndSlot { day, .. } => Some(*day),
        }
    }

    pub fn selected_slot(&self) -> Option<TimeSlot> {
        match self {
            Selection::DayAndSlot { slot, .. } => Some(*slot),
            _ => None,
        }
    }
}

/// Owns the selection and re-derives it whenever availability is rebuilt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a selection the host carried across a rebuild.
    pub fn with_selection(selection: Selection) -> Self {
        Self { selection }
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Re-validate the selection against a freshly rebuilt map.
    ///
    /// A surviving day keeps its identity but the slot resets to the day's
    /// first entry: slot offsets are not stable across grid regenerations,
    /// so selection never tries to preserve a slot by value. A day that
    /// lost all its slots falls back to the first bookable day on or after
    /// `today` within the lookahead window, or to `NoSelection` when the
    /// window is exhausted.
    pub fn reconcile(&mut self, availability: &AvailabilityMap, today: DayKey) {
        if let Some(day) = self.selection.selected_day() {
            if let Some(slot) = availability.first_slot(&day) {
                self.selection = Selection::DayAndSlot { day, slot };
                return;
            }
        }
        self.selection = first_bookable(availability, today)
            .map(|(day, slot)| Selection::DayAndSlot { day, slot })
            .unwrap_or_default();
    }

    /// Explicit day pick from the calendar.
    ///
    /// Picking a fully booked day is disabled upstream; if it happens
    /// anyway the day is kept without a slot instead of crashing.
    pub fn pick_day(&mut self, day: DayKey, availability: &AvailabilityMap) {
        self.selection = match availability.first_slot(&day) {
            Some(slot) => Selection::DayAndSlot { day, slot },
            None => Selection::DayOnly { day },
        };
    }

    /// Explicit slot pick within the selected day. Ignored while no day is
    /// selected.
    pub fn pick_slot(&mut self, slot: TimeSlot) {
        if let Some(day) = self.selection.selected_day() {
            self.selection = Selection::DayAndSlot { day, slot };
        }
    }
}

/// First day on or after `today`, within the lookahead window, that has a
/// non-empty slot list.
fn first_bookable(availability: &AvailabilityMap, today: DayKey) -> Option<(DayKey, TimeSlot)> {
    let mut day = today;
    for _ in 0..LOOKAHEAD_DAYS {
        if let Some(slot) = availability.first_slot(&day) {
            return Some((day, slot));
        }
        day = day.succ();
    }
    None
}
