//! Trip countdown derivation.

use chrono::NaiveDate;

use crate::trip::Trip;

/// Where a trip sits relative to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripCountdown {
    /// Trip has not started; days remaining until the start date.
    Upcoming { days: i64 },
    /// Reference date falls within the trip's date range (inclusive).
    InProgress,
    /// Trip ended before the reference date.
    Finished,
}

/// Classify `trip` relative to `today`.
///
/// `today` is passed in rather than read from the system clock so the
/// presentation layer owns the notion of "now".
pub fn countdown(trip: &Trip, today: NaiveDate) -> TripCountdown {
    if today < trip.start_date {
        TripCountdown::Upcoming {
            days: (trip.start_date - today).num_days(),
        }
    } else if today <= trip.end_date {
        TripCountdown::InProgress
    } else {
        TripCountdown::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trip::{Coordinate, TripId};

    fn test_date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_trip() -> Trip {
        Trip {
            id: TripId::new(),
            name: "Yosemite".to_string(),
            location_name: "Yosemite Valley, CA".to_string(),
            coordinate: Coordinate::new(37.8651, -119.5383),
            start_date: test_date(2026, 9, 12),
            end_date: test_date(2026, 9, 19),
            checklist: Vec::new(),
        }
    }

    #[test]
    fn upcoming_counts_days_until_start() {
        let trip = test_trip();
        assert_eq!(
            countdown(&trip, test_date(2026, 9, 1)),
            TripCountdown::Upcoming { days: 11 }
        );
        assert_eq!(
            countdown(&trip, test_date(2026, 9, 11)),
            TripCountdown::Upcoming { days: 1 }
        );
    }

    #[test]
    fn in_progress_on_start_and_end_days() {
        let trip = test_trip();
        assert_eq!(
            countdown(&trip, test_date(2026, 9, 12)),
            TripCountdown::InProgress
        );
        assert_eq!(
            countdown(&trip, test_date(2026, 9, 19)),
            TripCountdown::InProgress
        );
    }

    #[test]
    fn finished_after_end_date() {
        let trip = test_trip();
        assert_eq!(
            countdown(&trip, test_date(2026, 9, 20)),
            TripCountdown::Finished
        );
    }
}
