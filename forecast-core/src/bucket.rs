//! Splits a forecast series into the "upcoming hours" and "upcoming days" views.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ForecastBundle, ForecastPoint};

pub const DEFAULT_HOURLY_CAP: usize = 8;
pub const DEFAULT_DAILY_CAP: usize = 4;

/// Size limits for the two views of a [`ForecastBundle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketConfig {
    pub hourly_cap: usize,
    pub daily_cap: usize,
}

impl Default for BucketConfig {
    fn default() -> Self {
        Self { hourly_cap: DEFAULT_HOURLY_CAP, daily_cap: DEFAULT_DAILY_CAP }
    }
}

/// Calendar-date part of a point's timestamp text (`YYYY-MM-DD`).
pub fn day_key(point: &ForecastPoint) -> &str {
    point.timestamp_text.split(' ').next().unwrap_or_default()
}

/// Day key of `now`, comparable with [`day_key`] since the provider's
/// timestamp text is in UTC.
pub fn today_key(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Build the hourly and daily views of an ascending series of points.
///
/// `hourly` is the first `hourly_cap` points whatever day they fall on.
/// `daily` groups every point by day key in first-seen order, skipping the
/// day equal to `now_day_key`, and keeps at most `daily_cap` days.
pub fn bucket(points: &[ForecastPoint], config: BucketConfig, now_day_key: &str) -> ForecastBundle {
    let hourly: Vec<ForecastPoint> = points.iter().take(config.hourly_cap).cloned().collect();

    let days = points
        .iter()
        .map(|point| (day_key(point), point))
        .filter(|(key, _)| *key != now_day_key)
        .fold(Vec::<(&str, Vec<ForecastPoint>)>::new(), |mut days, (key, point)| {
            if let Some(index) = days.iter().position(|(day, _)| *day == key) {
                days[index].1.push(point.clone());
            } else if days.len() < config.daily_cap {
                days.push((key, vec![point.clone()]));
            }
            days
        });

    let daily: Vec<Vec<ForecastPoint>> = days.into_iter().map(|(_, group)| group).collect();

    tracing::debug!(
        input = points.len(),
        hourly = hourly.len(),
        days = daily.len(),
        "bucketed forecast series"
    );

    ForecastBundle { hourly, daily }
}
