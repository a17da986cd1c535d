//! Half-open time intervals and slot partitioning.
//!
//! All booking math in the crate goes through [`TimeRange`]: an interval
//! `[start, end)` within a single calendar day. Two ranges overlap iff
//! `start1 < end2 && start2 < end1`, so back-to-back bookings
//! (10:00-11:00 followed by 11:00-12:00) never conflict.

use chrono::{NaiveTime, Timelike};

/// A half-open time interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// Creates a range, rejecting empty or inverted intervals.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Creates the range `[start, start + duration_minutes)`.
    ///
    /// Returns `None` when the duration is zero or the end would cross
    /// midnight; bookings never span day boundaries.
    pub fn from_start_and_duration(start: NaiveTime, duration_minutes: u32) -> Option<Self> {
        if duration_minutes == 0 {
            return None;
        }
        let end = add_minutes(start, duration_minutes)?;
        Self::new(start, end)
    }

    /// Half-open overlap test.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Splits the range into consecutive `step_minutes`-sized slots.
    ///
    /// Only slots that fit entirely inside the range are produced; a
    /// trailing remainder shorter than one step is dropped.
    pub fn partition(&self, step_minutes: u32) -> Vec<TimeRange> {
        let mut slots = Vec::new();
        if step_minutes == 0 {
            return slots;
        }

        let mut cursor = self.start;
        while let Some(slot_end) = add_minutes(cursor, step_minutes) {
            if slot_end > self.end {
                break;
            }
            // cursor < slot_end is guaranteed by add_minutes
            slots.push(TimeRange {
                start: cursor,
                end: slot_end,
            });
            cursor = slot_end;
        }

        slots
    }
}

/// Coalesces ranges into a sorted, pairwise-disjoint sequence.
///
/// Overlapping and touching ranges collapse into their union; the output
/// is ordered by start time.
pub fn coalesce(mut ranges: Vec<TimeRange>) -> Vec<TimeRange> {
    ranges.sort_by_key(|r| (r.start, r.end));

    let mut merged: Vec<TimeRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end => {
                if range.end > last.end {
                    last.end = range.end;
                }
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Adds minutes to a time without wrapping past midnight.
///
/// Returns `None` when the result would land on or after 24:00; a
/// cross-midnight interval is invalid everywhere in the crate.
pub fn add_minutes(t: NaiveTime, minutes: u32) -> Option<NaiveTime> {
    let seconds = t.num_seconds_from_midnight() as u64 + u64::from(minutes) * 60;
    if seconds >= 24 * 60 * 60 {
        return None;
    }
    NaiveTime::from_num_seconds_from_midnight_opt(seconds as u32, 0)
}
