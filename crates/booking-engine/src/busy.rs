//! Busy-interval reduction: raw calendar events grouped into per-day minute
//! ranges.

use std::collections::BTreeMap;

use chrono::{NaiveDateTime, Timelike};

use crate::daykey::DayKey;

/// A calendar event as delivered by the events-by-date-range fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEvent {
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    /// Synced all-day blocks mark the whole day unavailable regardless of
    /// their nominal bounds.
    pub blocks_whole_day: bool,
}

/// A half-open `[from_minute, to_minute)` range during which slots are
/// unavailable. When `blocks_whole_day` is set the minute bounds are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyInterval {
    pub from_minute: u32,
    pub to_minute: u32,
    pub blocks_whole_day: bool,
}

impl BusyInterval {
    /// Interval derived from an event's wall-clock bounds.
    pub fn from_event(event: &RawEvent) -> Self {
        Self {
            from_minute: minute_of_day(&event.from),
            to_minute: minute_of_day(&event.to),
            blocks_whole_day: false,
        }
    }

    /// Marker interval excluding the entire day.
    pub fn whole_day() -> Self {
        Self {
            from_minute: 0,
            to_minute: 0,
            blocks_whole_day: true,
        }
    }

    /// Whether a slot starting at `offset` is unavailable.
    ///
    /// The range is half-open: a slot starting exactly at `to_minute` is
    /// free, the meeting-end boundary is bookable.
    pub fn blocks(&self, offset: u32) -> bool {
        self.blocks_whole_day || (offset >= self.from_minute && offset < self.to_minute)
    }
}

/// Minutes elapsed since local midnight at the given wall-clock instant.
pub fn minute_of_day(dt: &NaiveDateTime) -> u32 {
    dt.hour() * 60 + dt.minute()
}

/// Group events into per-day busy intervals, bucketing each event by the
/// local day of its start.
///
/// A whole-day block supersedes everything recorded for that day, and once
/// a day is blocked later events for it are ignored. Overlapping intervals
/// are kept as-is -- the merger tests slot membership against every interval
/// of the day, so no sorting or coalescing happens here.
pub fn reduce_events(events: &[RawEvent]) -> BTreeMap<DayKey, Vec<BusyInterval>> {
    let mut busy_by_day: BTreeMap<DayKey, Vec<BusyInterval>> = BTreeMap::new();

    for event in events {
        let day = DayKey::from_datetime(&event.from);
        let intervals = busy_by_day.entry(day).or_default();

        if intervals.iter().any(|i| i.blocks_whole_day) {
            continue;
        }
        if event.blocks_whole_day {
            intervals.clear();
            intervals.push(BusyInterval::whole_day());
        } else {
            intervals.push(BusyInterval::from_event(event));
        }
    }

    busy_by_day
}
