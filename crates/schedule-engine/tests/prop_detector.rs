//! Property-based tests for the collision detector using proptest.
//!
//! These verify invariants that should hold for *any* calendar, not just the
//! specific examples in `detector_tests.rs`. Calendars are generated as
//! pairwise-disjoint bookings (the consistent-snapshot case the engine is
//! specified against) and shuffled before indexing.

use proptest::prelude::*;
use schedule_engine::freebusy::find_free_slots;
use schedule_engine::{Interval, SortedIntervalIndex};

// ---------------------------------------------------------------------------
// Strategies — generate disjoint calendars and queries
// ---------------------------------------------------------------------------

/// A calendar of up to 50 pairwise-disjoint, non-abutting bookings, built by
/// accumulating (gap, length) pairs, then shuffled.
fn arb_calendar() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec((1i64..100, 1i64..100), 0..50)
        .prop_map(|steps| {
            let mut bookings = Vec::with_capacity(steps.len());
            let mut cursor = 0i64;
            for (gap, len) in steps {
                let start = cursor + gap;
                bookings.push(Interval {
                    start,
                    end: start + len,
                });
                cursor = start + len;
            }
            bookings
        })
        .prop_shuffle()
}

fn arb_query() -> impl Strategy<Value = Interval> {
    (0i64..10_000, 1i64..500).prop_map(|(start, len)| Interval {
        start,
        end: start + len,
    })
}

/// Reference implementation: the O(n) scan the index is meant to avoid.
fn naive_collision(bookings: &[Interval], query: &Interval) -> Option<Interval> {
    bookings.iter().copied().find(|b| b.overlaps(query))
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    /// The two-neighbor lookup agrees with a full linear scan on whether a
    /// collision exists.
    #[test]
    fn detector_matches_naive_scan(bookings in arb_calendar(), query in arb_query()) {
        let idx = SortedIntervalIndex::from_unsorted(bookings.clone());

        let fast = idx.find_collision(&query).unwrap();
        let naive = naive_collision(&bookings, &query);

        prop_assert_eq!(fast.is_some(), naive.is_some());
    }

    /// Any booking queried against its own calendar collides (with itself).
    #[test]
    fn indexed_booking_collides_with_itself(bookings in arb_calendar()) {
        let idx = SortedIntervalIndex::from_unsorted(bookings.clone());

        for booking in &bookings {
            prop_assert!(idx.find_collision(booking).unwrap().is_some());
        }
    }

    /// Splitting a range at any internal point yields two adjacent intervals
    /// that never conflict (half-open boundary policy).
    #[test]
    fn adjacent_halves_never_conflict(start in 0i64..10_000, a in 1i64..500, b in 1i64..500) {
        let first = Interval { start, end: start + a };
        let second = Interval { start: start + a, end: start + a + b };

        prop_assert!(!first.overlaps(&second));
        prop_assert!(!second.overlaps(&first));

        let idx = SortedIntervalIndex::from_unsorted(vec![first]);
        prop_assert!(idx.find_collision(&second).unwrap().is_none());
    }

    /// The candidate set never exceeds two positions, whatever the calendar.
    #[test]
    fn at_most_two_candidates(bookings in arb_calendar(), query_start in 0i64..10_000) {
        let idx = SortedIntervalIndex::from_unsorted(bookings);

        let count = idx.neighbor_candidates(query_start).iter().flatten().count();

        prop_assert!(count <= 2);
    }

    /// Free slots lie inside the window and never overlap any booking.
    #[test]
    fn free_slots_are_actually_free(bookings in arb_calendar(), window_len in 100i64..5_000) {
        let window = Interval { start: 0, end: window_len };

        let free = find_free_slots(&bookings, &window);

        for slot in &free {
            prop_assert!(slot.start >= window.start && slot.end <= window.end);
            prop_assert!(slot.start < slot.end);
            for booking in &bookings {
                prop_assert!(!slot.overlaps(booking));
            }
        }
    }
}
