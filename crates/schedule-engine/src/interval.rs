//! Half-open time intervals in epoch seconds.
//!
//! [`Interval`] is the atomic unit the collision detector reasons about. The
//! range is `[start, end)`: the end boundary is excluded, so a booking that
//! ends exactly when another starts does NOT overlap it. Back-to-back
//! trainings are a normal, valid schedule.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleConflict};

/// A half-open time range `[start, end)` in epoch seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    /// Create an interval, rejecting zero- and negative-length ranges.
    ///
    /// # Errors
    /// Returns [`ScheduleConflict::InvalidInterval`] if `start >= end`.
    pub fn new(start: i64, end: i64) -> Result<Self> {
        if start >= end {
            return Err(ScheduleConflict::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Create an interval from a pair of UTC datetimes.
    ///
    /// # Errors
    /// Returns [`ScheduleConflict::InvalidInterval`] if `start >= end`.
    pub fn from_datetimes(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        Self::new(start.timestamp(), end.timestamp())
    }

    /// Re-check the `start < end` invariant on an interval built via struct
    /// literal or deserialized from untrusted input.
    pub fn validate(&self) -> Result<()> {
        if self.start >= self.end {
            return Err(ScheduleConflict::InvalidInterval {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    /// True iff the half-open ranges intersect.
    ///
    /// Two intervals overlap iff `self.start < other.end && other.start < self.end`.
    /// This excludes the adjacent case where one ends exactly when the other starts.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the interval in seconds.
    pub fn duration_secs(&self) -> i64 {
        self.end - self.start
    }
}
