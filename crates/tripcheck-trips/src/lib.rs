//! Trip domain for TripCheck
//!
//! In-memory trip collection with per-trip checklists and countdown
//! helpers. Trips live for the app session only; nothing is persisted.

pub mod countdown;
pub mod store;
pub mod trip;

pub use countdown::{countdown, TripCountdown};
pub use store::{TripStore, TripStoreError};
pub use trip::{ChecklistItem, Coordinate, Trip, TripCreateRequest, TripId};
