use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Timelike, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    bucket::{BucketConfig, DEFAULT_DAILY_CAP, DEFAULT_HOURLY_CAP},
    daylight::DaylightWindow,
    labels::{Labels, hour_of_day_utc},
    model::{CurrentConditions, UnitSystem},
};

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// location = "London"
/// units = "imperial"
/// sunrise_hour = 5
/// sunset_hour = 19
///
/// [labels]
/// today = "Today"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Location query string handed to whoever fetches payloads.
    pub location: String,
    pub language: String,
    pub units: UnitSystem,
    pub hourly_cap: usize,
    pub daily_cap: usize,

    /// UTC hour of the last observed sunrise.
    pub sunrise_hour: u32,
    /// UTC hour of the last observed sunset.
    pub sunset_hour: u32,

    /// Sent as `appid` when building request URLs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: "London".to_string(),
            language: "en".to_string(),
            units: UnitSystem::Metric,
            hourly_cap: DEFAULT_HOURLY_CAP,
            daily_cap: DEFAULT_DAILY_CAP,
            sunrise_hour: 0,
            sunset_hour: 0,
            api_key: None,
            labels: Labels::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "forecast", "forecast-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn bucket_config(&self) -> BucketConfig {
        BucketConfig { hourly_cap: self.hourly_cap, daily_cap: self.daily_cap }
    }

    /// Remember the sunrise and sunset hours of freshly decoded conditions.
    pub fn record_daylight(&mut self, conditions: &CurrentConditions) {
        self.sunrise_hour = hour_of_day_utc(conditions.sunrise_at);
        self.sunset_hour = hour_of_day_utc(conditions.sunset_at);
    }

    /// Daylight window of `now` against the stored sunrise/sunset hours.
    pub fn daylight_window(&self, now: DateTime<Utc>) -> DaylightWindow {
        DaylightWindow::classify(now.hour(), self.sunrise_hour, self.sunset_hour)
    }

    /// Checks the stored daylight hours, which a hand-edited file may get
    /// wrong. Callers holding fresh current conditions should call
    /// [`Config::record_daylight`] first.
    pub fn validate(&self) -> Result<()> {
        for (name, hour) in [("sunrise_hour", self.sunrise_hour), ("sunset_hour", self.sunset_hour)] {
            if hour > 23 {
                return Err(anyhow!(
                    "Invalid {name} {hour} in configuration; expected an hour between 0 and 23.\n\
                     Hint: run `forecast show --current <file>` to refresh it from provider data."
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WindBearing;
    use chrono::TimeZone;

    fn conditions(sunrise: DateTime<Utc>, sunset: DateTime<Utc>) -> CurrentConditions {
        CurrentConditions {
            observed_at: sunrise.timestamp(),
            place_name: "London".into(),
            temperature_c: 14.0,
            temperature_min_c: 12.0,
            temperature_max_c: 16.0,
            pressure_hpa: 1013.0,
            humidity_pct: 80,
            wind_speed: 4.0,
            wind_bearing: WindBearing::Unknown,
            condition_description: "mist".into(),
            condition_icon_code: "50d".into(),
            sunrise_at: sunrise.timestamp(),
            sunset_at: sunset.timestamp(),
        }
    }

    #[test]
    fn defaults_match_view_caps() {
        let cfg = Config::default();

        assert_eq!(cfg.bucket_config(), BucketConfig::default());
        assert_eq!(cfg.units, UnitSystem::Metric);
        assert_eq!((cfg.sunrise_hour, cfg.sunset_hour), (0, 0));
    }

    #[test]
    fn record_daylight_stores_utc_hours() {
        let mut cfg = Config::default();
        let sunrise = Utc.with_ymd_and_hms(2024, 5, 1, 4, 32, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 5, 1, 19, 10, 0).unwrap();

        cfg.record_daylight(&conditions(sunrise, sunset));

        assert_eq!((cfg.sunrise_hour, cfg.sunset_hour), (4, 19));
    }

    #[test]
    fn daylight_window_uses_stored_hours() {
        let cfg = Config { sunrise_hour: 6, sunset_hour: 18, ..Config::default() };
        let morning = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let night = Utc.with_ymd_and_hms(2024, 5, 1, 22, 0, 0).unwrap();

        assert_eq!(cfg.daylight_window(morning), DaylightWindow::Morning);
        assert_eq!(cfg.daylight_window(night), DaylightWindow::Evening);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let cfg: Config = toml::from_str("units = \"imperial\"\n[labels]\ntoday = \"Hoy\"\n").unwrap();

        assert_eq!(cfg.units, UnitSystem::Imperial);
        assert_eq!(cfg.labels.today, "Hoy");
        assert_eq!(cfg.labels.tomorrow, "Tomorrow");
        assert_eq!(cfg.hourly_cap, DEFAULT_HOURLY_CAP);
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config { location: "Cairo".into(), sunrise_hour: 5, ..Config::default() };
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("absent.toml")).unwrap();

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn validate_rejects_out_of_range_hours() {
        let cfg = Config { sunset_hour: 24, ..Config::default() };
        let err = cfg.validate().unwrap_err();

        assert!(err.to_string().contains("Invalid sunset_hour 24"));
    }

    #[test]
    fn record_daylight_repairs_out_of_range_hours() {
        let mut cfg: Config = toml::from_str("sunset_hour = 24\n").unwrap();
        assert!(cfg.validate().is_err());

        let sunrise = Utc.with_ymd_and_hms(2024, 5, 1, 5, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 5, 1, 20, 15, 0).unwrap();
        cfg.record_daylight(&conditions(sunrise, sunset));

        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.sunset_hour, 20);
    }

    #[test]
    fn blank_location_does_not_fail_validation() {
        let cfg = Config { location: "  ".into(), ..Config::default() };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn api_key_roundtrips_and_is_omitted_when_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::default().save_to(&path).unwrap();
        assert!(!std::fs::read_to_string(&path).unwrap().contains("api_key"));

        let cfg = Config { api_key: Some("KEY".into()), ..Config::default() };
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().api_key.as_deref(), Some("KEY"));
    }
}
