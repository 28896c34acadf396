//! The synchronous recomputation pipeline.
//!
//! The host invokes this whenever one of the three inputs changes (event
//! list, duration, visible month). There is no reactive graph and no
//! in-flight state: calling it repeatedly with the latest known inputs is
//! safe, and last write wins by construction.

use crate::availability::{merge_availability, AvailabilityMap};
use crate::busy::{reduce_events, RawEvent};
use crate::daykey::DayKey;
use crate::grid::{generate_slots, WorkingHours};
use crate::selection::SelectionController;

/// Rebuild availability from scratch and re-validate the selection.
///
/// Composes the busy-interval reducer, the availability merger, and the
/// selection reconcile step into one pure pass. The returned map is a
/// wholesale replacement for whatever the host held before, never a patch.
pub fn recompute_availability(
    events: &[RawEvent],
    hours: WorkingHours,
    duration_minutes: u32,
    visible_days: &[DayKey],
    today: DayKey,
    now_offset_minutes: u32,
    controller: &mut SelectionController,
) -> AvailabilityMap {
    let grid = generate_slots(hours.start_hour, hours.end_hour, duration_minutes);
    let busy_by_day = reduce_events(events);
    let availability =
        merge_availability(&grid, &busy_by_day, visible_days, today, now_offset_minutes);
    controller.reconcile(&availability, today);
    availability
}
