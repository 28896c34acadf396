//! WASM bindings for booking-engine.
//!
//! Exposes slot-grid generation, availability computation, selection
//! reconciliation, and booking-draft construction to the JavaScript host
//! via `wasm-bindgen`. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p booking-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/booking-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/booking_engine_wasm.wasm
//! ```

use std::collections::BTreeMap;

use booking_engine::busy::minute_of_day;
use booking_engine::{
    month_grid_days, recompute_availability, AvailabilityMap, DayKey, MeetingDetails, RawEvent,
    Selection, SelectionController, TimeSlot, WorkingHours,
};
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SlotDto {
    offset_minutes: u32,
    label: String,
}

impl From<TimeSlot> for SlotDto {
    fn from(slot: TimeSlot) -> Self {
        Self {
            offset_minutes: slot.offset_minutes,
            label: slot.label(),
        }
    }
}

/// Input format for events passed from JavaScript. `isBlockWholeDayFromGG`
/// is the wire name the calendar sync gives to all-day blocks.
#[derive(Deserialize)]
struct EventInput {
    from: String,
    to: String,
    #[serde(rename = "isBlockWholeDayFromGG", default)]
    is_block_whole_day: bool,
}

/// Availability and the reconciled selection, returned together so the host
/// can swap both atomically.
#[derive(Serialize)]
struct ScheduleDto {
    availability: BTreeMap<String, Vec<SlotDto>>,
    selection: Selection,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse an ISO 8601 datetime string into a local wall-clock datetime.
///
/// Accepts RFC 3339 (with timezone offset, e.g., "2026-03-16T14:00:00+02:00"),
/// of which the wall-clock component is kept -- local-day bucketing works on
/// what the visitor's clock shows -- and bare naive datetimes
/// (e.g., "2026-03-16T14:00:00").
fn parse_datetime(s: &str) -> Result<NaiveDateTime, JsValue> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

/// Convert a JSON array of event objects into `Vec<RawEvent>`.
fn parse_events_json(json: &str) -> Result<Vec<RawEvent>, JsValue> {
    let inputs: Vec<EventInput> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))?;

    inputs
        .into_iter()
        .map(|input| {
            let from = parse_datetime(&input.from)?;
            let to = parse_datetime(&input.to)?;
            Ok(RawEvent {
                from,
                to,
                blocks_whole_day: input.is_block_whole_day,
            })
        })
        .collect()
}

fn parse_selection_json(json: &str) -> Result<Selection, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid selection JSON: {}", e)))
}

/// Render the availability map keyed by "YYYY-MM-DD" day strings.
fn availability_dto(availability: &AvailabilityMap) -> BTreeMap<String, Vec<SlotDto>> {
    availability
        .iter()
        .map(|(day, slots)| {
            (
                day.to_string(),
                slots.iter().copied().map(SlotDto::from).collect(),
            )
        })
        .collect()
}

/// Run the full recompute pipeline for one month view.
fn run_pipeline(
    events_json: &str,
    selection: Selection,
    year: i32,
    month_index: i32,
    duration_minutes: u32,
    now: &str,
) -> Result<(AvailabilityMap, Selection), JsValue> {
    let events = parse_events_json(events_json)?;
    let now = parse_datetime(now)?;
    let visible_days = month_grid_days(year, month_index);

    let mut controller = SelectionController::with_selection(selection);
    let availability = recompute_availability(
        &events,
        WorkingHours::default(),
        duration_minutes,
        &visible_days,
        DayKey::from_datetime(&now),
        minute_of_day(&now),
        &mut controller,
    );
    Ok((availability, controller.selection()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate the candidate slot grid for a working-hours window.
///
/// Returns a JSON array of `{offsetMinutes, label}` objects. Malformed
/// input (zero duration, inverted window) yields an empty array rather than
/// an error.
#[wasm_bindgen(js_name = "generateTimeGrid")]
pub fn generate_time_grid(
    start_hour: u32,
    end_hour: u32,
    duration_minutes: u32,
) -> Result<String, JsValue> {
    let slots = booking_engine::generate_slots(start_hour, end_hour, duration_minutes);
    let dtos: Vec<SlotDto> = slots.into_iter().map(SlotDto::from).collect();
    to_json(&dtos)
}

/// Compute the bookable slots for every day of a month view.
///
/// `events_json` must be a JSON array of `{from, to, isBlockWholeDayFromGG?}`
/// objects with ISO 8601 datetime strings; `month_index` is the zero-based
/// month from the navigation control; `now` is the host clock reading used
/// for today-truncation. Returns a JSON object keyed by "YYYY-MM-DD" with
/// arrays of `{offsetMinutes, label}` slots.
#[wasm_bindgen(js_name = "computeAvailability")]
pub fn compute_availability(
    events_json: &str,
    year: i32,
    month_index: i32,
    duration_minutes: u32,
    now: &str,
) -> Result<String, JsValue> {
    let (availability, _) = run_pipeline(
        events_json,
        Selection::NoSelection,
        year,
        month_index,
        duration_minutes,
        now,
    )?;
    to_json(&availability_dto(&availability))
}

/// Rebuild availability and re-validate the host's selection in one call.
///
/// This is the single entry point for all three recomputation triggers
/// (event refresh, duration change, month navigation): the host passes the
/// latest inputs plus its current selection JSON and swaps in the returned
/// `{availability, selection}` pair wholesale.
#[wasm_bindgen(js_name = "reconcileSelection")]
pub fn reconcile_selection(
    events_json: &str,
    selection_json: &str,
    year: i32,
    month_index: i32,
    duration_minutes: u32,
    now: &str,
) -> Result<String, JsValue> {
    let selection = parse_selection_json(selection_json)?;
    let (availability, selection) = run_pipeline(
        events_json,
        selection,
        year,
        month_index,
        duration_minutes,
        now,
    )?;
    to_json(&ScheduleDto {
        availability: availability_dto(&availability),
        selection,
    })
}

/// Build the event-creation payload from the current selection.
///
/// `details_json` carries `{calendarNameUnique, usernameUnique, title,
/// attendeeEmail}`. Fails when no slot is selected or the duration is zero;
/// the host must check before submitting. Timestamps in the returned draft
/// are local naive `YYYY-MM-DDTHH:MM:SS` strings.
#[wasm_bindgen(js_name = "buildBookingDraft")]
pub fn build_booking_draft(
    selection_json: &str,
    duration_minutes: u32,
    details_json: &str,
) -> Result<String, JsValue> {
    let selection = parse_selection_json(selection_json)?;
    let details: MeetingDetails = serde_json::from_str(details_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid details JSON: {}", e)))?;

    let draft = booking_engine::build_draft(&selection, duration_minutes, &details)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&draft)
}
