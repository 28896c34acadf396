//! Calendar-day identity and the visible-month window.

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timezone-naive local calendar day, used as the grouping and lookup key
/// for availability.
///
/// Equality is structural (year, month, day). Formatting happens only at
/// serialization boundaries, so locale or format-string drift cannot cause
/// silent lookup misses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Construct from a year/month/day triple; `None` for dates that do not
    /// exist on the calendar.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The local day a timestamp falls on.
    pub fn from_datetime(dt: &NaiveDateTime) -> Self {
        Self(dt.date())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// The following calendar day.
    pub fn succ(&self) -> Self {
        Self(self.0.succ_opt().unwrap_or(self.0))
    }
}

impl From<NaiveDate> for DayKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// The 5x7 cell matrix of days the month view shows, flattened row by row.
///
/// `month0` is the zero-based month index supplied by the navigation
/// control; values outside `0..=11` roll over into adjacent years. Cells
/// start at the Sunday on or before the 1st of the month, so leading and
/// trailing spill-over days of the neighbouring months are included. This
/// produces the `visible_days` input of the availability merge.
pub fn month_grid_days(year: i32, month0: i32) -> Vec<DayKey> {
    let year = year + month0.div_euclid(12);
    let month = month0.rem_euclid(12) as u32 + 1;
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    let lead = i64::from(first.weekday().num_days_from_sunday());
    let start = first - Duration::days(lead);
    (0..35).map(|i| DayKey(start + Duration::days(i))).collect()
}
