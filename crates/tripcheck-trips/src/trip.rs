//! Trip entity and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable trip identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TripId(Uuid);

impl TripId {
    /// Mint a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TripId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TripId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Geographic coordinate of a trip's destination.
///
/// Supplied already resolved; location search/geocoding happens outside
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True if both components are finite numbers (not NaN or infinite).
    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

/// A single entry on a trip's packing checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: Uuid,
    pub title: String,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
        }
    }
}

/// A planned trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: TripId,
    pub name: String,
    /// Human-readable destination label (e.g. "Yosemite Valley, CA").
    pub location_name: String,
    pub coordinate: Coordinate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub checklist: Vec<ChecklistItem>,
}

/// Request to create a new trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripCreateRequest {
    pub name: String,
    pub location_name: String,
    pub coordinate: Coordinate,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
