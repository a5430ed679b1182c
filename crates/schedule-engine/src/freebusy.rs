//! Compute free slots in a resource's calendar.
//!
//! Used to suggest alternatives after an "occupied" verdict: clip the
//! resource's bookings to a window, merge overlapping busy periods, and
//! report the gaps. Bookings may overlap each other (inconsistent upstream
//! data); merging absorbs that.

use crate::interval::Interval;

/// Merge overlapping or adjacent bookings, clipped to the given window.
///
/// Returns a sorted list of non-overlapping busy intervals. Bookings entirely
/// outside the window are discarded.
pub fn merge_bookings(bookings: &[Interval], window: &Interval) -> Vec<Interval> {
    let mut busy: Vec<Interval> = bookings
        .iter()
        .filter(|b| b.overlaps(window))
        .map(|b| Interval {
            start: b.start.max(window.start),
            end: b.end.min(window.end),
        })
        .collect();

    busy.sort_by_key(|iv| (iv.start, iv.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(busy.len());
    for iv in busy {
        if let Some(last) = merged.last_mut() {
            if iv.start <= last.end {
                // Overlapping or adjacent — extend the current busy period.
                last.end = last.end.max(iv.end);
                continue;
            }
        }
        merged.push(iv);
    }

    merged
}

/// Find the free gaps within a window, given a resource's bookings.
///
/// Returns gaps sorted by start. An empty booking list yields the whole
/// window as one free slot; a fully booked window yields none.
pub fn find_free_slots(bookings: &[Interval], window: &Interval) -> Vec<Interval> {
    let merged = merge_bookings(bookings, window);

    let mut free = Vec::new();
    let mut cursor = window.start;

    for busy in &merged {
        if cursor < busy.start {
            free.push(Interval {
                start: cursor,
                end: busy.start,
            });
        }
        cursor = cursor.max(busy.end);
    }

    // Trailing gap after the last busy period.
    if cursor < window.end {
        free.push(Interval {
            start: cursor,
            end: window.end,
        });
    }

    free
}

/// Find the first free gap of at least `min_duration_secs` within the window.
pub fn find_first_free_slot(
    bookings: &[Interval],
    window: &Interval,
    min_duration_secs: i64,
) -> Option<Interval> {
    find_free_slots(bookings, window)
        .into_iter()
        .find(|slot| slot.duration_secs() >= min_duration_secs)
}
