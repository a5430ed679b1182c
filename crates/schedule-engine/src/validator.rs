//! Availability validation for a proposed training.
//!
//! Partitions the caller-supplied candidate bookings by resource (each
//! requested trainer, plus the requested location), builds a
//! [`SortedIntervalIndex`] per resource, and runs the collision detector
//! against each. Any single conflict vetoes the request; trainer conflicts
//! are always reported before location conflicts.
//!
//! Everything here is a pure function of its inputs — no I/O, no shared
//! state — and is safe to call concurrently from any number of request
//! handlers. The verdict is correct for the snapshot the caller loaded; it
//! says nothing about writes that race with the check. Callers must either
//! serialize writes per resource (e.g., a database overlap constraint) or
//! accept and retry the rare lost-update race.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleConflict};
use crate::index::SortedIntervalIndex;
use crate::interval::Interval;

/// Opaque trainer identity, owned by the surrounding persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainerId(pub i64);

/// Opaque location identity, owned by the surrounding persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(pub i64);

impl fmt::Display for TrainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An already-scheduled training, as loaded by the caller.
///
/// Group and individual trainings share this shape; the engine does not care
/// which table a booking came from, only which resources it ties up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSlot {
    pub interval: Interval,
    pub trainers: Vec<TrainerId>,
    pub location: LocationId,
}

/// Check that a proposed training does not double-book any requested trainer
/// or the requested location.
///
/// The caller supplies the existing group and individual trainings already
/// restricted to a relevant date window; entries touching none of the
/// requested resources are ignored. A single booking can conflict on both
/// axes (same trainer and same room); the trainer conflict wins.
///
/// # Errors
/// - [`ScheduleConflict::InvalidInterval`] if the proposed interval or any
///   candidate interval has `start >= end`.
/// - [`ScheduleConflict::TrainerOccupied`] for the first requested trainer
///   (in given order) with an overlapping booking.
/// - [`ScheduleConflict::LocationOccupied`] if no trainer conflicts but the
///   location has an overlapping booking.
pub fn check_trainer_and_location_availability(
    proposed: &Interval,
    trainers: &[TrainerId],
    location: LocationId,
    existing_group_trainings: &[TrainingSlot],
    existing_individual_trainings: &[TrainingSlot],
) -> Result<()> {
    proposed.validate()?;

    let candidates: Vec<&TrainingSlot> = existing_group_trainings
        .iter()
        .chain(existing_individual_trainings.iter())
        .collect();

    for slot in &candidates {
        slot.interval.validate()?;
    }

    // Set-intersection test for trainer relevance: the requested-trainer set
    // is built once, and one pass over the candidates buckets each booking
    // under every requested trainer it ties up. Bookings touching no
    // requested trainer fall through untouched.
    let requested: HashSet<TrainerId> = trainers.iter().copied().collect();
    let mut per_trainer: HashMap<TrainerId, Vec<Interval>> = HashMap::new();
    for slot in &candidates {
        for trainer in &slot.trainers {
            if requested.contains(trainer) {
                per_trainer.entry(*trainer).or_default().push(slot.interval);
            }
        }
    }

    // Trainer axis first, in the order the trainers were requested.
    let mut checked = HashSet::with_capacity(trainers.len());
    for &trainer in trainers {
        if !checked.insert(trainer) {
            continue;
        }
        let booked = per_trainer.remove(&trainer).unwrap_or_default();
        if let Some(booked) = check_occupancy(proposed, booked)? {
            return Err(ScheduleConflict::TrainerOccupied { trainer, booked });
        }
    }

    // Location axis second.
    let booked = candidates
        .iter()
        .filter(|slot| slot.location == location)
        .map(|slot| slot.interval)
        .collect();
    if let Some(booked) = check_occupancy(proposed, booked)? {
        return Err(ScheduleConflict::LocationOccupied { location, booked });
    }

    Ok(())
}

/// Shared occupancy check behind both resource axes: index the candidate
/// intervals and ask the detector whether the proposal overlaps any of them.
pub fn check_occupancy(proposed: &Interval, booked: Vec<Interval>) -> Result<Option<Interval>> {
    SortedIntervalIndex::from_unsorted(booked).find_collision(proposed)
}
