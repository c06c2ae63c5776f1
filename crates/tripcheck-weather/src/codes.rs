//! Weather code translation.

use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from the provider's numeric codes
/// See: https://open-meteo.com/en/docs#weathervariables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    ClearSky,
    PartlyCloudy,
    Fog,
    Drizzle,
    Rain,
    FreezingRain,
    Snow,
    RainShowers,
    Thunderstorm,
    /// Any code outside the known vocabulary.
    #[default]
    Unknown,
}

impl Condition {
    /// Translate a numeric weather code. Total over the integer domain;
    /// codes outside the known vocabulary map to [`Condition::Unknown`].
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::ClearSky,
            1..=3 => Self::PartlyCloudy,
            45 | 48 => Self::Fog,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 | 65 => Self::Rain,
            66 | 67 => Self::FreezingRain,
            71 | 73 | 75 => Self::Snow,
            80 | 81 | 82 => Self::RainShowers,
            95 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::ClearSky => "Clear sky",
            Self::PartlyCloudy => "Partly cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::FreezingRain => "Freezing rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Get icon category name (resolved to glyphs by the UI layer)
    pub fn icon_category(&self) -> &'static str {
        match self {
            Self::ClearSky => "sun",
            Self::PartlyCloudy => "cloud_sun",
            Self::Fog => "cloud_fog",
            Self::Drizzle => "cloud_rain",
            Self::Rain => "cloud_rain",
            Self::FreezingRain => "cloud_snow",
            Self::Snow => "cloud_snow",
            Self::RainShowers => "cloud_rain",
            Self::Thunderstorm => "cloud_lightning",
            Self::Unknown => "question",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_clear_sky() {
        assert_eq!(Condition::from_code(0), Condition::ClearSky);
    }

    #[test]
    fn code_partly_cloudy() {
        assert_eq!(Condition::from_code(1), Condition::PartlyCloudy);
        assert_eq!(Condition::from_code(2), Condition::PartlyCloudy);
        assert_eq!(Condition::from_code(3), Condition::PartlyCloudy);
    }

    #[test]
    fn code_fog() {
        assert_eq!(Condition::from_code(45), Condition::Fog);
        assert_eq!(Condition::from_code(48), Condition::Fog);
    }

    #[test]
    fn code_drizzle() {
        assert_eq!(Condition::from_code(51), Condition::Drizzle);
        assert_eq!(Condition::from_code(53), Condition::Drizzle);
        assert_eq!(Condition::from_code(55), Condition::Drizzle);
    }

    #[test]
    fn code_rain() {
        assert_eq!(Condition::from_code(61), Condition::Rain);
        assert_eq!(Condition::from_code(63), Condition::Rain);
        assert_eq!(Condition::from_code(65), Condition::Rain);
    }

    #[test]
    fn code_freezing_rain() {
        assert_eq!(Condition::from_code(66), Condition::FreezingRain);
        assert_eq!(Condition::from_code(67), Condition::FreezingRain);
    }

    #[test]
    fn code_snow() {
        assert_eq!(Condition::from_code(71), Condition::Snow);
        assert_eq!(Condition::from_code(73), Condition::Snow);
        assert_eq!(Condition::from_code(75), Condition::Snow);
    }

    #[test]
    fn code_rain_showers() {
        assert_eq!(Condition::from_code(80), Condition::RainShowers);
        assert_eq!(Condition::from_code(81), Condition::RainShowers);
        assert_eq!(Condition::from_code(82), Condition::RainShowers);
    }

    #[test]
    fn code_thunderstorm() {
        assert_eq!(Condition::from_code(95), Condition::Thunderstorm);
    }

    #[test]
    fn unknown_codes_map_to_unknown() {
        assert_eq!(Condition::from_code(4), Condition::Unknown);
        assert_eq!(Condition::from_code(9999), Condition::Unknown);
        assert_eq!(Condition::from_code(-1), Condition::Unknown);
    }

    #[test]
    fn descriptions() {
        assert_eq!(Condition::from_code(0).description(), "Clear sky");
        assert_eq!(Condition::from_code(61).description(), "Rain");
        assert_eq!(Condition::from_code(9999).description(), "Unknown");
        // repeated lookups are stable
        assert_eq!(Condition::from_code(9999).description(), "Unknown");
    }

    #[test]
    fn icon_categories() {
        assert_eq!(Condition::ClearSky.icon_category(), "sun");
        assert_eq!(Condition::Rain.icon_category(), "cloud_rain");
        assert_eq!(Condition::Unknown.icon_category(), "question");
    }
}
