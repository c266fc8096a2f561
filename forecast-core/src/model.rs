use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wind direction as reported by the provider.
///
/// `Unknown` never compares equal to any bearing, including `0.0` and `360.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WindBearing {
    Degrees(f64),
    Unknown,
}

impl WindBearing {
    pub fn degrees(&self) -> Option<f64> {
        match self {
            WindBearing::Degrees(deg) => Some(*deg),
            WindBearing::Unknown => None,
        }
    }
}

/// Snapshot from the provider's "current weather" endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Seconds since the epoch, UTC.
    pub observed_at: i64,
    /// Empty when the provider omits it.
    pub place_name: String,
    pub temperature_c: f64,
    pub temperature_min_c: f64,
    pub temperature_max_c: f64,
    pub pressure_hpa: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub wind_bearing: WindBearing,
    pub condition_description: String,
    pub condition_icon_code: String,
    pub sunrise_at: i64,
    pub sunset_at: i64,
}

impl CurrentConditions {
    pub fn observation_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.observed_at, 0)
    }
}

/// One provider time slot (typically 3 hours) of the forecast series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Seconds since the epoch, UTC.
    pub timestamp: i64,
    /// Provider text form of `timestamp`, e.g. `2024-05-01 12:00:00`.
    pub timestamp_text: String,
    pub temperature_c: f64,
    pub temperature_min_c: f64,
    pub temperature_max_c: f64,
    pub pressure_hpa: f64,
    pub humidity_pct: u8,
    pub wind_speed: f64,
    pub wind_bearing: WindBearing,
    pub condition_description: String,
    pub condition_icon_code: String,
}

/// Hourly and day-grouped views built from one forecast series.
///
/// A new bundle replaces the previous one wholesale; nothing is merged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastBundle {
    pub hourly: Vec<ForecastPoint>,
    pub daily: Vec<Vec<ForecastPoint>>,
}

impl ForecastBundle {
    /// The representative record of each day, i.e. its earliest point.
    pub fn day_heads(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.daily.iter().filter_map(|day| day.first())
    }

    pub fn is_empty(&self) -> bool {
        self.hourly.is_empty() && self.daily.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub const fn all() -> &'static [UnitSystem] {
        &[UnitSystem::Metric, UnitSystem::Imperial]
    }

    /// Unit shown next to a wind speed.
    pub fn wind_speed_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "km/h",
            UnitSystem::Imperial => "mph",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for UnitSystem {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "metric" => Ok(UnitSystem::Metric),
            "imperial" => Ok(UnitSystem::Imperial),
            _ => Err(anyhow!("Unknown unit system '{value}'. Supported units: metric, imperial.")),
        }
    }
}
