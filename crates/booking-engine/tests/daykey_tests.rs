//! Tests for calendar-day identity and the visible-month window.

use booking_engine::daykey::{month_grid_days, DayKey};
use chrono::NaiveDate;

fn day(year: i32, month: u32, d: u32) -> DayKey {
    DayKey::from_ymd(year, month, d).unwrap()
}

#[test]
fn equality_is_structural() {
    assert_eq!(day(2026, 3, 16), day(2026, 3, 16));
    assert_ne!(day(2026, 3, 16), day(2026, 3, 17));

    // Construction routes agree.
    let dt = NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(23, 59, 0)
        .unwrap();
    assert_eq!(DayKey::from_datetime(&dt), day(2026, 3, 16));
}

#[test]
fn ordering_is_chronological() {
    assert!(day(2026, 3, 16) < day(2026, 3, 17));
    assert!(day(2026, 12, 31) < day(2027, 1, 1));
}

#[test]
fn display_formats_iso_date() {
    assert_eq!(day(2026, 3, 16).to_string(), "2026-03-16");
    assert_eq!(day(2026, 1, 5).to_string(), "2026-01-05");
}

#[test]
fn succ_advances_across_boundaries() {
    assert_eq!(day(2026, 3, 16).succ(), day(2026, 3, 17));
    assert_eq!(day(2026, 8, 31).succ(), day(2026, 9, 1));
    assert_eq!(day(2026, 12, 31).succ(), day(2027, 1, 1));
    assert_eq!(day(2028, 2, 28).succ(), day(2028, 2, 29)); // leap year
}

#[test]
fn month_grid_is_35_cells_starting_sunday() {
    // August 2026 starts on a Saturday, so the grid leads with Sunday
    // July 26 and runs through August 29.
    let days = month_grid_days(2026, 7);

    assert_eq!(days.len(), 35);
    assert_eq!(days[0], day(2026, 7, 26));
    assert_eq!(days[6], day(2026, 8, 1));
    assert_eq!(days[34], day(2026, 8, 29));

    // Consecutive cells are consecutive days.
    for pair in days.windows(2) {
        assert_eq!(pair[0].succ(), pair[1]);
    }
}

#[test]
fn month_grid_starts_on_the_first_when_it_is_sunday() {
    // March 2026 starts on a Sunday: no leading spill-over.
    let days = month_grid_days(2026, 2);

    assert_eq!(days[0], day(2026, 3, 1));
    assert_eq!(days[34], day(2026, 4, 4));
}

#[test]
fn month_index_rolls_over_years() {
    // Index 12 of 2026 is January 2027.
    let next = month_grid_days(2026, 12);
    assert_eq!(next[0], day(2026, 12, 27));
    assert_eq!(next[6], day(2027, 1, 2));

    // Index -1 of 2026 is December 2025.
    let prev = month_grid_days(2026, -1);
    assert_eq!(prev[0], day(2025, 11, 30));
    assert_eq!(prev[1], day(2025, 12, 1));
}
