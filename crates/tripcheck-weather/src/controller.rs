//! Trip weather selection controller.
//!
//! Owns the displayed weather state for the currently selected trip.
//! Each selection change mints a fetch token; a completion only lands
//! if its token is still the current one, so results that arrive after
//! the user has moved on are discarded instead of overwriting the
//! newer selection. In-flight requests are not aborted; a superseded
//! result is inert by the time it completes.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::watch;
use tripcheck_trips::{Coordinate, Trip, TripId};

use crate::client::WeatherClient;
use crate::forecast;
use crate::types::{FailureReason, ForecastOptions, WeatherError, WeatherSnapshot};

/// Externally observable weather display state.
///
/// The controller is the sole writer; presentation code reads it via
/// [`TripWeatherController::state`] or [`TripWeatherController::subscribe`]
/// and keeps "no selection", "loading", and "failed" visually distinct.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayState {
    /// No trip selected.
    #[default]
    Idle,
    /// A fetch for the selected trip is in flight.
    Loading { trip_id: TripId },
    Loaded {
        trip_id: TripId,
        snapshot: WeatherSnapshot,
    },
    Failed {
        trip_id: TripId,
        reason: FailureReason,
    },
}

impl DisplayState {
    /// Trip the state refers to, if any.
    pub fn trip_id(&self) -> Option<TripId> {
        match self {
            DisplayState::Idle => None,
            DisplayState::Loading { trip_id }
            | DisplayState::Loaded { trip_id, .. }
            | DisplayState::Failed { trip_id, .. } => Some(*trip_id),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DisplayState::Loading { .. })
    }
}

// State and the token it was written under are guarded together; the
// stale check and the state write must be one atomic step.
#[derive(Debug)]
struct Inner {
    state: DisplayState,
    current_token: u64,
    next_token: u64,
}

/// Drives weather fetches from trip selection changes.
#[derive(Debug)]
pub struct TripWeatherController {
    client: Arc<WeatherClient>,
    options: ForecastOptions,
    inner: Arc<Mutex<Inner>>,
    tx: Arc<watch::Sender<DisplayState>>,
}

impl TripWeatherController {
    pub fn new(client: WeatherClient, options: ForecastOptions) -> Self {
        let (tx, _rx) = watch::channel(DisplayState::Idle);
        Self {
            client: Arc::new(client),
            options,
            inner: Arc::new(Mutex::new(Inner {
                state: DisplayState::Idle,
                current_token: 0,
                next_token: 0,
            })),
            tx: Arc::new(tx),
        }
    }

    /// Make `trip` the live selection and start a fetch for it.
    ///
    /// The previous display is cleared synchronously, before any
    /// network I/O, so stale numbers are never shown for the new
    /// selection. Selecting a trip that is already loaded is a no-op;
    /// use [`TripWeatherController::refresh`] to force a refetch.
    ///
    /// Must be called within a tokio runtime.
    pub fn select(&self, trip: &Trip) {
        let mut inner = self.inner.lock();
        if let DisplayState::Loaded { trip_id, .. } = &inner.state {
            if *trip_id == trip.id {
                tracing::debug!(trip_id = %trip.id, "trip already loaded, skipping fetch");
                return;
            }
        }
        self.start_fetch(&mut inner, trip);
    }

    /// Refetch for `trip` even if it is already loaded.
    pub fn refresh(&self, trip: &Trip) {
        let mut inner = self.inner.lock();
        self.start_fetch(&mut inner, trip);
    }

    /// Drop the selection and return to [`DisplayState::Idle`].
    ///
    /// Any in-flight fetch is invalidated and its result will be
    /// discarded on arrival.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.next_token += 1;
        inner.current_token = inner.next_token;
        inner.state = DisplayState::Idle;
        let _ = self.tx.send_replace(inner.state.clone());
    }

    /// Current display state.
    pub fn state(&self) -> DisplayState {
        self.inner.lock().state.clone()
    }

    /// Subscribe to display state changes.
    pub fn subscribe(&self) -> watch::Receiver<DisplayState> {
        self.tx.subscribe()
    }

    fn start_fetch(&self, inner: &mut Inner, trip: &Trip) {
        inner.next_token += 1;
        let token = inner.next_token;
        inner.current_token = token;
        inner.state = DisplayState::Loading { trip_id: trip.id };
        let _ = self.tx.send_replace(inner.state.clone());

        tracing::info!(trip_id = %trip.id, token, location = %trip.location_name, "fetching weather");

        let client = Arc::clone(&self.client);
        let options = self.options.clone();
        let coordinate = trip.coordinate;
        let trip_id = trip.id;
        let inner_handle = Arc::clone(&self.inner);
        let tx = Arc::clone(&self.tx);

        tokio::spawn(async move {
            let result = fetch_snapshot(&client, &coordinate, &options).await;

            let mut inner = inner_handle.lock();
            if inner.current_token != token {
                tracing::debug!(%trip_id, token, "discarding stale weather result");
                return;
            }

            inner.state = match result {
                Ok(snapshot) => DisplayState::Loaded { trip_id, snapshot },
                Err(err) => {
                    tracing::warn!(%trip_id, error = %err, "weather fetch failed");
                    DisplayState::Failed {
                        trip_id,
                        reason: err.failure_reason(),
                    }
                }
            };
            let _ = tx.send_replace(inner.state.clone());
        });
    }
}

/// One fetch-and-parse attempt for a coordinate.
pub async fn fetch_snapshot(
    client: &WeatherClient,
    coordinate: &Coordinate,
    options: &ForecastOptions,
) -> Result<WeatherSnapshot, WeatherError> {
    let raw = client.fetch(coordinate, options).await?;
    let snapshot = forecast::parse(&raw)?;
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::Condition;
    use crate::types::CurrentConditions;

    #[test]
    fn idle_has_no_trip() {
        assert_eq!(DisplayState::Idle.trip_id(), None);
        assert!(!DisplayState::Idle.is_loading());
    }

    #[test]
    fn states_carry_their_trip() {
        let trip_id = TripId::new();
        assert_eq!(DisplayState::Loading { trip_id }.trip_id(), Some(trip_id));
        assert!(DisplayState::Loading { trip_id }.is_loading());

        let loaded = DisplayState::Loaded {
            trip_id,
            snapshot: WeatherSnapshot {
                current: CurrentConditions {
                    temperature: 68,
                    condition: Condition::ClearSky,
                },
                daily: Vec::new(),
            },
        };
        assert_eq!(loaded.trip_id(), Some(trip_id));
        assert!(!loaded.is_loading());

        let failed = DisplayState::Failed {
            trip_id,
            reason: FailureReason::Transport,
        };
        assert_eq!(failed.trip_id(), Some(trip_id));
    }

    #[tokio::test]
    async fn controller_starts_idle() {
        let client = WeatherClient::with_base_url("http://127.0.0.1:1/unused").unwrap();
        let controller = TripWeatherController::new(client, ForecastOptions::default());
        assert_eq!(controller.state(), DisplayState::Idle);
        assert_eq!(*controller.subscribe().borrow(), DisplayState::Idle);
    }
}
