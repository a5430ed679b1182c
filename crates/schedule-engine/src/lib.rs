//! # schedule-engine
//!
//! Collision detection for gym training schedules.
//!
//! Given a proposed training interval and the resources it ties up (trainers,
//! a location), the engine decides whether it conflicts with any already
//! scheduled training using the same resource. The decision gates every
//! training creation, update, and acceptance flow in the surrounding backend.
//!
//! The engine is pure: the caller loads the candidate trainings (typically
//! bounded by a date-range query), hands over a snapshot, and receives a
//! verdict. Persistence, identity resolution, and error localization live in
//! the surrounding CRUD layer.
//!
//! ## Modules
//!
//! - [`interval`] — half-open `[start, end)` ranges and the overlap predicate
//! - [`index`] — sorted interval index with O(log n) nearest-neighbor lookup
//! - [`validator`] — per-resource partitioning and the availability check
//! - [`freebusy`] — free-slot computation for suggesting alternatives
//! - [`error`] — conflict taxonomy

pub mod error;
pub mod freebusy;
pub mod index;
pub mod interval;
pub mod validator;

pub use error::ScheduleConflict;
pub use freebusy::{find_first_free_slot, find_free_slots};
pub use index::SortedIntervalIndex;
pub use interval::Interval;
pub use validator::{
    check_trainer_and_location_availability, LocationId, TrainerId, TrainingSlot,
};
