//! Interval derivation: turning a timestamp stream into durations.
//!
//! Entries only record the moment an activity *ended*; how long it lasted
//! is inferred after the fact as the gap to the preceding entry. The first
//! entry of the window, and every day-start marker, instead anchors to its
//! own local midnight so the first segment of each tracked day has a
//! defined length even when the marker is not literally first in the
//! window.

use crate::libs::entry::EntryKind;
use crate::libs::error::ReportError;
use chrono::{DateTime, FixedOffset, Timelike};
use std::collections::HashMap;

/// Minimal projection of an entry used for gap computation: one per entry
/// in the window, pre-sorted ascending by timestamp (store order breaks
/// ties).
#[derive(Debug, Clone)]
pub struct DistinctEvent {
    pub uid: i64,
    pub project: String,
    pub timestamp: String,
}

/// The derived gap attributed to one entry. Lives only for the duration of
/// a single report invocation.
#[derive(Debug, Clone)]
pub struct EventDuration {
    pub uid: i64,
    pub timestamp: String,
    pub seconds: i64,
}

fn parse_instant(raw: &str) -> Result<DateTime<FixedOffset>, ReportError> {
    DateTime::parse_from_rfc3339(raw).map_err(|_| ReportError::TimeParse(raw.to_string()))
}

/// Computes a duration for every event as the absolute gap to its
/// predecessor, keyed by uid for O(1) lookup during consolidation.
///
/// Any unparsable stored timestamp aborts the whole derivation: a gap with
/// one bad endpoint is meaningless, so no partial result is produced.
pub fn derive_durations(events: &[DistinctEvent]) -> Result<HashMap<i64, EventDuration>, ReportError> {
    let mut durations = HashMap::with_capacity(events.len());
    let mut prior: Option<DateTime<FixedOffset>> = None;

    for event in events {
        let current = parse_instant(&event.timestamp)?;

        let anchored = prior.is_none() || EntryKind::of(&event.project) == EntryKind::DayMarker;
        let seconds = match (anchored, &prior) {
            // First entry of the window, or a day marker: seconds since
            // this event's own local midnight.
            (true, _) | (_, None) => i64::from(current.time().num_seconds_from_midnight()),
            (false, Some(previous)) => (current - *previous).num_seconds().abs(),
        };

        durations.insert(
            event.uid,
            EventDuration {
                uid: event.uid,
                timestamp: event.timestamp.clone(),
                seconds,
            },
        );
        prior = Some(current);
    }

    Ok(durations)
}
