//! Availability merging: the candidate grid minus busy intervals, for every
//! day of the visible month window.
//!
//! This module computes the engine's primary output -- which slots on which
//! days are actually bookable.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::busy::BusyInterval;
use crate::daykey::DayKey;
use crate::grid::TimeSlot;

/// Free slots per visible day.
///
/// Rebuilt wholesale on every recomputation trigger (duration change, month
/// navigation, event refresh); never patched incrementally, so consumers
/// cannot observe stale slots. A day may be present with an empty slot list
/// (fully booked) or absent entirely (today, once its remaining slots have
/// passed); both are unbookable, but lookups keep the two apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AvailabilityMap {
    days: BTreeMap<DayKey, Vec<TimeSlot>>,
}

impl AvailabilityMap {
    /// The free slots recorded for a day, ascending by offset.
    pub fn slots_for(&self, day: &DayKey) -> Option<&[TimeSlot]> {
        self.days.get(day).map(Vec::as_slice)
    }

    /// First free slot of a day, if it has any.
    pub fn first_slot(&self, day: &DayKey) -> Option<TimeSlot> {
        self.days.get(day).and_then(|slots| slots.first().copied())
    }

    /// Whether the day can be booked at all.
    pub fn is_bookable(&self, day: &DayKey) -> bool {
        self.days.get(day).is_some_and(|slots| !slots.is_empty())
    }

    /// Whether the day was computed at all (a fully booked day is present
    /// with an empty list; a lapsed today is not present).
    pub fn contains_day(&self, day: &DayKey) -> bool {
        self.days.contains_key(day)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days in ascending order with their free slots.
    pub fn iter(&self) -> impl Iterator<Item = (&DayKey, &[TimeSlot])> {
        self.days.iter().map(|(day, slots)| (day, slots.as_slice()))
    }
}

/// Subtract per-day busy intervals from the candidate grid across the
/// visible window.
///
/// A slot is blocked when it falls inside any `[from, to)` interval of its
/// day; a slot starting exactly at an interval's end is free. Days with no
/// busy entry at all get the whole grid -- unknown means free. A whole-day
/// block empties the day regardless of any other intervals supplied for it.
///
/// `today` additionally loses every slot earlier than `now_offset_minutes`,
/// and is left out of the map entirely when nothing survives, so the
/// forward day search treats it as unavailable rather than computed-but-
/// empty.
///
/// Pure and idempotent: identical inputs produce an identical map.
pub fn merge_availability(
    grid: &[TimeSlot],
    busy_by_day: &BTreeMap<DayKey, Vec<BusyInterval>>,
    visible_days: &[DayKey],
    today: DayKey,
    now_offset_minutes: u32,
) -> AvailabilityMap {
    let mut days = BTreeMap::new();

    for &day in visible_days {
        let mut free: Vec<TimeSlot> = match busy_by_day.get(&day) {
            Some(intervals) if intervals.iter().any(|i| i.blocks_whole_day) => Vec::new(),
            Some(intervals) => grid
                .iter()
                .copied()
                .filter(|slot| !intervals.iter().any(|i| i.blocks(slot.offset_minutes)))
                .collect(),
            None => grid.to_vec(),
        };

        if day == today {
            free.retain(|slot| slot.offset_minutes >= now_offset_minutes);
            if free.is_empty() {
                continue;
            }
        }

        days.insert(day, free);
    }

    AvailabilityMap { days }
}
