//! In-memory trip storage.
//!
//! The store is the single owner of the trip collection. It is
//! session-scoped: trips are not persisted across launches.

use parking_lot::Mutex;
use thiserror::Error;
use uuid::Uuid;

use crate::trip::{ChecklistItem, Trip, TripCreateRequest, TripId};

/// Trip storage errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TripStoreError {
    #[error("Trip not found: {0}")]
    TripNotFound(TripId),

    #[error("Checklist item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("Checklist item title is empty")]
    EmptyItemTitle,
}

impl TripStoreError {
    /// User-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            TripStoreError::TripNotFound(_) => "That trip no longer exists.",
            TripStoreError::ItemNotFound(_) => "That checklist item no longer exists.",
            TripStoreError::EmptyItemTitle => "Checklist items need a name.",
        }
    }
}

/// Thread-safe in-memory collection of trips.
#[derive(Debug, Default)]
pub struct TripStore {
    trips: Mutex<Vec<Trip>>,
}

impl TripStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trip from `request` and add it to the collection.
    pub fn create(&self, request: TripCreateRequest) -> Trip {
        let trip = Trip {
            id: TripId::new(),
            name: request.name,
            location_name: request.location_name,
            coordinate: request.coordinate,
            start_date: request.start_date,
            end_date: request.end_date,
            checklist: Vec::new(),
        };
        tracing::info!(trip_id = %trip.id, name = %trip.name, "created trip");
        self.trips.lock().push(trip.clone());
        trip
    }

    /// All trips in insertion order.
    pub fn list(&self) -> Vec<Trip> {
        self.trips.lock().clone()
    }

    pub fn get(&self, id: TripId) -> Option<Trip> {
        self.trips.lock().iter().find(|t| t.id == id).cloned()
    }

    pub fn delete(&self, id: TripId) -> Result<(), TripStoreError> {
        let mut trips = self.trips.lock();
        let before = trips.len();
        trips.retain(|t| t.id != id);
        if trips.len() == before {
            return Err(TripStoreError::TripNotFound(id));
        }
        tracing::info!(trip_id = %id, "deleted trip");
        Ok(())
    }

    /// Append a checklist item to a trip. Blank titles are rejected.
    pub fn add_checklist_item(
        &self,
        trip_id: TripId,
        title: &str,
    ) -> Result<ChecklistItem, TripStoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TripStoreError::EmptyItemTitle);
        }

        let mut trips = self.trips.lock();
        let trip = trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(TripStoreError::TripNotFound(trip_id))?;

        let item = ChecklistItem::new(title);
        trip.checklist.push(item.clone());
        Ok(item)
    }

    /// Flip an item's completed flag. Returns the new value.
    pub fn toggle_checklist_item(
        &self,
        trip_id: TripId,
        item_id: Uuid,
    ) -> Result<bool, TripStoreError> {
        let mut trips = self.trips.lock();
        let trip = trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(TripStoreError::TripNotFound(trip_id))?;

        let item = trip
            .checklist
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or(TripStoreError::ItemNotFound(item_id))?;

        item.completed = !item.completed;
        Ok(item.completed)
    }

    pub fn remove_checklist_item(
        &self,
        trip_id: TripId,
        item_id: Uuid,
    ) -> Result<(), TripStoreError> {
        let mut trips = self.trips.lock();
        let trip = trips
            .iter_mut()
            .find(|t| t.id == trip_id)
            .ok_or(TripStoreError::TripNotFound(trip_id))?;

        let before = trip.checklist.len();
        trip.checklist.retain(|i| i.id != item_id);
        if trip.checklist.len() == before {
            return Err(TripStoreError::ItemNotFound(item_id));
        }
        Ok(())
    }
}
