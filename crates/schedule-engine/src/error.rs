//! Error types for schedule-engine operations.

use thiserror::Error;

use crate::interval::Interval;
use crate::validator::{LocationId, TrainerId};

/// The outcome of a failed availability check.
///
/// Every variant is a deterministic, non-retryable validation verdict: the
/// caller maps it to a user-facing "cannot create/update training" message.
/// There is no fatal/unexpected category — the engine performs no I/O and has
/// no partial-failure modes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleConflict {
    #[error("Invalid interval: start {start} must be before end {end}")]
    InvalidInterval { start: i64, end: i64 },

    #[error("Trainer {trainer} is occupied from {} to {}", .booked.start, .booked.end)]
    TrainerOccupied { trainer: TrainerId, booked: Interval },

    #[error("Location {location} is occupied from {} to {}", .booked.start, .booked.end)]
    LocationOccupied { location: LocationId, booked: Interval },
}

pub type Result<T> = std::result::Result<T, ScheduleConflict>;
