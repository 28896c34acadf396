//! Tests for busy-interval reduction.

use booking_engine::busy::{minute_of_day, reduce_events, BusyInterval, RawEvent};
use booking_engine::daykey::DayKey;
use chrono::{NaiveDate, NaiveDateTime};

fn at(year: i32, month: u32, d: u32, hour: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, d)
        .unwrap()
        .and_hms_opt(hour, min, 0)
        .unwrap()
}

fn event(d: u32, from_h: u32, from_m: u32, to_h: u32, to_m: u32) -> RawEvent {
    RawEvent {
        from: at(2026, 3, d, from_h, from_m),
        to: at(2026, 3, d, to_h, to_m),
        blocks_whole_day: false,
    }
}

fn whole_day_event(d: u32) -> RawEvent {
    RawEvent {
        from: at(2026, 3, d, 0, 0),
        to: at(2026, 3, d, 0, 0),
        blocks_whole_day: true,
    }
}

fn day(d: u32) -> DayKey {
    DayKey::from_ymd(2026, 3, d).unwrap()
}

#[test]
fn events_grouped_by_local_start_day() {
    let events = vec![
        event(16, 9, 0, 10, 0),
        event(16, 14, 30, 15, 0),
        event(17, 11, 0, 12, 0),
    ];

    let busy = reduce_events(&events);

    assert_eq!(busy.len(), 2);
    assert_eq!(
        busy[&day(16)],
        vec![
            BusyInterval {
                from_minute: 540,
                to_minute: 600,
                blocks_whole_day: false
            },
            BusyInterval {
                from_minute: 870,
                to_minute: 900,
                blocks_whole_day: false
            },
        ]
    );
    assert_eq!(busy[&day(17)].len(), 1);
}

#[test]
fn overlapping_intervals_kept_unmerged() {
    // The merger tests membership against every interval, so the reducer
    // keeps overlaps as-is.
    let events = vec![event(16, 9, 0, 11, 0), event(16, 10, 0, 12, 0)];

    let busy = reduce_events(&events);

    assert_eq!(busy[&day(16)].len(), 2);
}

#[test]
fn whole_day_supersedes_prior_intervals() {
    let events = vec![event(16, 9, 0, 10, 0), whole_day_event(16)];

    let busy = reduce_events(&events);

    assert_eq!(busy[&day(16)], vec![BusyInterval::whole_day()]);
}

#[test]
fn whole_day_sticks_against_later_events() {
    let events = vec![whole_day_event(16), event(16, 9, 0, 10, 0)];

    let busy = reduce_events(&events);

    assert_eq!(busy[&day(16)], vec![BusyInterval::whole_day()]);
}

#[test]
fn event_bucketed_by_start_day_only() {
    // An event running past midnight still counts toward the day it starts.
    let events = vec![RawEvent {
        from: at(2026, 3, 16, 23, 30),
        to: at(2026, 3, 17, 0, 15),
        blocks_whole_day: false,
    }];

    let busy = reduce_events(&events);

    assert_eq!(busy.len(), 1);
    assert!(busy.contains_key(&day(16)));
    assert!(!busy.contains_key(&day(17)));
}

#[test]
fn no_events_yields_empty_mapping() {
    assert!(reduce_events(&[]).is_empty());
}

#[test]
fn minute_of_day_conversion() {
    assert_eq!(minute_of_day(&at(2026, 3, 16, 0, 0)), 0);
    assert_eq!(minute_of_day(&at(2026, 3, 16, 9, 30)), 570);
    assert_eq!(minute_of_day(&at(2026, 3, 16, 23, 59)), 1439);
}

#[test]
fn interval_blocking_is_half_open() {
    let interval = BusyInterval {
        from_minute: 540,
        to_minute: 600,
        blocks_whole_day: false,
    };

    assert!(!interval.blocks(539));
    assert!(interval.blocks(540));
    assert!(interval.blocks(599));
    assert!(!interval.blocks(600)); // the meeting-end boundary is bookable

    assert!(BusyInterval::whole_day().blocks(0));
    assert!(BusyInterval::whole_day().blocks(1020));
}
