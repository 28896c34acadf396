//! Booking draft construction -- the boundary toward the event-creation
//! call.
//!
//! The draft is built once per confirmation and discarded after the
//! response; submission, retries, and response handling belong to the
//! network layer.

use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::selection::Selection;

/// Non-temporal draft fields: the route identity plus the confirmation
/// form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingDetails {
    pub calendar_name_unique: String,
    pub username_unique: String,
    pub title: String,
    pub attendee_email: String,
}

/// The event-creation payload handed to the network layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    pub calendar_name_unique: String,
    pub username_unique: String,
    pub from: NaiveDateTime,
    pub to: NaiveDateTime,
    pub title: String,
    pub attendee_email: String,
}

/// Turn the current selection into a creation request.
///
/// `from` is the selected day at the selected slot's offset; `to` follows
/// `duration_minutes` later.
///
/// # Errors
/// Returns `EngineError::InvalidSelection` when no slot is selected, and
/// `EngineError::InvalidDuration` when `duration_minutes` is zero -- the
/// caller must check before submission rather than ship a malformed draft.
pub fn build_draft(
    selection: &Selection,
    duration_minutes: u32,
    details: &MeetingDetails,
) -> Result<BookingDraft> {
    if duration_minutes == 0 {
        return Err(EngineError::InvalidDuration(duration_minutes));
    }
    let (day, slot) = match selection {
        Selection::DayAndSlot { day, slot } => (*day, *slot),
        _ => return Err(EngineError::InvalidSelection),
    };

    // Offsets may reach 1440 (the closing-boundary slot of a full-day
    // window), so build from midnight plus minutes instead of hour/minute
    // fields.
    let from = day.date().and_time(NaiveTime::MIN) + Duration::minutes(i64::from(slot.offset_minutes));
    let to = from + Duration::minutes(i64::from(duration_minutes));

    Ok(BookingDraft {
        calendar_name_unique: details.calendar_name_unique.clone(),
        username_unique: details.username_unique.clone(),
        from,
        to,
        title: details.title.clone(),
        attendee_email: details.attendee_email.clone(),
    })
}
