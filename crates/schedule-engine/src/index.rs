//! Sorted interval index with nearest-neighbor collision lookup.
//!
//! [`SortedIntervalIndex`] holds the existing bookings for one resource (one
//! trainer, or one location), sorted ascending by start. It is built fresh per
//! availability check from whatever candidate list the caller supplies and
//! discarded afterwards; the O(n log n) sort is paid once per resource per
//! check, and each query then costs O(log n).
//!
//! Why two neighbors suffice: with the array sorted by start, the only
//! intervals that can overlap a query `q` are the last one starting at or
//! before `q.start` (anything starting earlier ends no later than that
//! neighbor would have to, or it would itself be that neighbor's successor in
//! start order — either way it cannot reach past it into `q` without the
//! neighbor also overlapping) and the first one starting after `q.start`
//! (anything starting later starts even further from `q.start`, and if that
//! first successor already clears `q.end`, all later ones do too). So the
//! detector binary-searches for the insertion point of `q.start` and tests
//! only the interval on each side of it.

use crate::error::Result;
use crate::interval::Interval;

/// An immutable view of one resource's bookings, ordered for binary search.
///
/// The index does not require the bookings to be pairwise disjoint — upstream
/// data may already be inconsistent — only sorted by start, which construction
/// guarantees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedIntervalIndex {
    intervals: Vec<Interval>,
}

impl SortedIntervalIndex {
    /// Build an index from an arbitrary (unsorted, possibly empty) collection.
    ///
    /// Uses a stable sort; tie order on equal starts does not affect collision
    /// answers since both neighbors are inspected regardless.
    pub fn from_unsorted(mut intervals: Vec<Interval>) -> Self {
        intervals.sort_by_key(|iv| iv.start);
        Self { intervals }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// The at-most-two candidate positions that could overlap a query starting
    /// at `query_start`: the last interval with `start <= query_start` (an
    /// exact start match lands here) and the first with `start > query_start`.
    ///
    /// Either side may be absent when the query lands at an edge of the index;
    /// on an empty index both are `None`. Exposed so callers and tests can
    /// observe that the candidate set never grows with the index.
    pub fn neighbor_candidates(&self, query_start: i64) -> [Option<usize>; 2] {
        let successor = self.intervals.partition_point(|iv| iv.start <= query_start);
        let predecessor = successor.checked_sub(1);
        let successor = (successor < self.intervals.len()).then_some(successor);
        [predecessor, successor]
    }

    /// Decide whether `query` overlaps any indexed interval, returning the
    /// first overlapping booking found.
    ///
    /// Only the two [`neighbor_candidates`](Self::neighbor_candidates) are
    /// tested, so the check is O(log n) after construction.
    ///
    /// # Errors
    /// Returns [`ScheduleConflict::InvalidInterval`] if the query has
    /// `start >= end`; degenerate queries are a caller error, never silently
    /// treated as non-overlapping.
    ///
    /// [`ScheduleConflict::InvalidInterval`]: crate::error::ScheduleConflict::InvalidInterval
    pub fn find_collision(&self, query: &Interval) -> Result<Option<Interval>> {
        query.validate()?;

        let hit = self
            .neighbor_candidates(query.start)
            .into_iter()
            .flatten()
            .map(|i| self.intervals[i])
            .find(|booked| booked.overlaps(query));

        Ok(hit)
    }
}
