//! # booking-engine
//!
//! Availability computation for a scheduling client: turns a sparse set of
//! busy calendar events into a dense, duration-aware grid of bookable slots
//! per visible day, and keeps the visitor's day/slot selection valid as the
//! meeting duration, the displayed month, or the event list changes.
//!
//! The engine is a pure in-process library -- fetching events, submitting
//! bookings, and rendering belong to the host.
//!
//! ## Modules
//!
//! - [`grid`] — candidate slot grid for a working-hours window
//! - [`daykey`] — calendar-day identity and the visible-month window
//! - [`busy`] — raw events → per-day busy intervals
//! - [`availability`] — grid minus busy intervals, per visible day
//! - [`selection`] — day/slot selection state machine
//! - [`booking`] — draft construction for the event-creation call
//! - [`pipeline`] — the one-pass recomputation entry point
//! - [`error`] — error types

pub mod availability;
pub mod booking;
pub mod busy;
pub mod daykey;
pub mod error;
pub mod grid;
pub mod pipeline;
pub mod selection;

pub use availability::{merge_availability, AvailabilityMap};
pub use booking::{build_draft, BookingDraft, MeetingDetails};
pub use busy::{reduce_events, BusyInterval, RawEvent};
pub use daykey::{month_grid_days, DayKey};
pub use error::EngineError;
pub use grid::{generate_slots, TimeSlot, WorkingHours};
pub use pipeline::recompute_availability;
pub use selection::{Selection, SelectionController, LOOKAHEAD_DAYS};
