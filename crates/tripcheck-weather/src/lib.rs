//! Trip weather for TripCheck
//!
//! Fetches current conditions plus a 7-day forecast for a trip's
//! destination from the Open-Meteo forecast endpoint, and keeps the
//! displayed result in step with the user's trip selection.

pub mod client;
pub mod codes;
pub mod controller;
pub mod forecast;
pub mod types;

pub use client::WeatherClient;
pub use codes::Condition;
pub use controller::{fetch_snapshot, DisplayState, TripWeatherController};
pub use types::*;
