//! Provider codes and raw measurements turned into display values.

use serde::{Deserialize, Serialize};

use crate::{
    labels::Labels,
    model::{UnitSystem, WindBearing},
};

/// Provider-independent weather glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalIcon {
    ClearSky,
    ClearSkyNight,
    FewClouds,
    FewCloudsNight,
    ScatteredClouds,
    ScatteredCloudsNight,
    BrokenClouds,
    BrokenCloudsNight,
    ShowerRain,
    ShowerRainNight,
    Rain,
    RainNight,
    Thunderstorm,
    ThunderstormNight,
    Snow,
    SnowNight,
    Mist,
    MistNight,
}

impl CanonicalIcon {
    /// Substituted for codes the provider documents nowhere.
    pub const DEFAULT: CanonicalIcon = CanonicalIcon::BrokenClouds;

    /// Exact mapping of a provider icon code, `None` when unrecognized.
    pub fn from_provider_code(code: &str) -> Option<Self> {
        let icon = match code {
            "01d" => CanonicalIcon::ClearSky,
            "01n" => CanonicalIcon::ClearSkyNight,
            "02d" => CanonicalIcon::FewClouds,
            "02n" => CanonicalIcon::FewCloudsNight,
            "03d" => CanonicalIcon::ScatteredClouds,
            "03n" => CanonicalIcon::ScatteredCloudsNight,
            "04d" => CanonicalIcon::BrokenClouds,
            "04n" => CanonicalIcon::BrokenCloudsNight,
            "09d" => CanonicalIcon::ShowerRain,
            "09n" => CanonicalIcon::ShowerRainNight,
            "10d" => CanonicalIcon::Rain,
            "10n" => CanonicalIcon::RainNight,
            "11d" => CanonicalIcon::Thunderstorm,
            "11n" => CanonicalIcon::ThunderstormNight,
            "13d" => CanonicalIcon::Snow,
            "13n" => CanonicalIcon::SnowNight,
            "50d" => CanonicalIcon::Mist,
            "50n" => CanonicalIcon::MistNight,
            _ => return None,
        };
        Some(icon)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalIcon::ClearSky => "clear_sky",
            CanonicalIcon::ClearSkyNight => "clear_sky_night",
            CanonicalIcon::FewClouds => "few_clouds",
            CanonicalIcon::FewCloudsNight => "few_clouds_night",
            CanonicalIcon::ScatteredClouds => "scattered_clouds",
            CanonicalIcon::ScatteredCloudsNight => "scattered_clouds_night",
            CanonicalIcon::BrokenClouds => "broken_clouds",
            CanonicalIcon::BrokenCloudsNight => "broken_clouds_night",
            CanonicalIcon::ShowerRain => "shower_rain",
            CanonicalIcon::ShowerRainNight => "shower_rain_night",
            CanonicalIcon::Rain => "rain",
            CanonicalIcon::RainNight => "rain_night",
            CanonicalIcon::Thunderstorm => "thunderstorm",
            CanonicalIcon::ThunderstormNight => "thunderstorm_night",
            CanonicalIcon::Snow => "snow",
            CanonicalIcon::SnowNight => "snow_night",
            CanonicalIcon::Mist => "mist",
            CanonicalIcon::MistNight => "mist_night",
        }
    }
}

impl std::fmt::Display for CanonicalIcon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical icon for a provider code. Unknown codes are logged and fall
/// back to [`CanonicalIcon::DEFAULT`].
pub fn icon_key(provider_code: &str) -> CanonicalIcon {
    CanonicalIcon::from_provider_code(provider_code).unwrap_or_else(|| {
        tracing::warn!(code = provider_code, "unknown weather icon code");
        CanonicalIcon::DEFAULT
    })
}

/// One of the eight principal compass points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    const CLOCKWISE: [CompassPoint; 8] = [
        CompassPoint::North,
        CompassPoint::NorthEast,
        CompassPoint::East,
        CompassPoint::SouthEast,
        CompassPoint::South,
        CompassPoint::SouthWest,
        CompassPoint::West,
        CompassPoint::NorthWest,
    ];

    /// 45° sectors centered on each point; `[337.5, 22.5)` is north.
    /// Bearings outside `0..360` are wrapped first. Non-finite input has no
    /// direction.
    pub fn from_degrees(degrees: f64) -> Option<Self> {
        if !degrees.is_finite() {
            return None;
        }
        let sector = ((degrees.rem_euclid(360.0) + 22.5) / 45.0).floor() as usize % 8;
        Some(Self::CLOCKWISE[sector])
    }

    pub fn label<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            CompassPoint::North => labels.north.as_str(),
            CompassPoint::NorthEast => labels.north_east.as_str(),
            CompassPoint::East => labels.east.as_str(),
            CompassPoint::SouthEast => labels.south_east.as_str(),
            CompassPoint::South => labels.south.as_str(),
            CompassPoint::SouthWest => labels.south_west.as_str(),
            CompassPoint::West => labels.west.as_str(),
            CompassPoint::NorthWest => labels.north_west.as_str(),
        }
    }
}

/// `"<speed> <unit> <direction>"`, e.g. `"5 km/h NE"`.
pub fn wind_label(units: UnitSystem, speed: f64, bearing: WindBearing, labels: &Labels) -> String {
    let direction = bearing
        .degrees()
        .and_then(CompassPoint::from_degrees)
        .map(|point| point.label(labels))
        .unwrap_or(labels.unknown_direction.as_str());

    format!("{speed:.0} {} {direction}", units.wind_speed_unit())
}

pub fn temperature_label(celsius: f64) -> String {
    format!("{celsius:.0}°")
}

pub fn high_low_label(high: f64, low: f64) -> String {
    format!("{} / {}", temperature_label(high), temperature_label(low))
}

pub fn humidity_label(percent: u8) -> String {
    format!("{percent} %")
}

pub fn pressure_label(hpa: f64) -> String {
    format!("{hpa:.0} hPa")
}
