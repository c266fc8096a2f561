//! "Now"-relative date labels and UTC clock labels.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Localized words used when building labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    pub today: String,
    pub tomorrow: String,
    pub unknown_direction: String,
    pub north: String,
    pub north_east: String,
    pub east: String,
    pub south_east: String,
    pub south: String,
    pub south_west: String,
    pub west: String,
    pub north_west: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            today: "Today".into(),
            tomorrow: "Tomorrow".into(),
            unknown_direction: "unknown direction".into(),
            north: "N".into(),
            north_east: "NE".into(),
            east: "E".into(),
            south_east: "SE".into(),
            south: "S".into(),
            south_west: "SW".into(),
            west: "W".into(),
            north_west: "NW".into(),
        }
    }
}

/// Whole UTC days elapsed since the epoch.
fn elapsed_days(millis: i64) -> i64 {
    millis.div_euclid(MILLIS_PER_DAY)
}

/// Friendly label for a target instant relative to "now".
///
/// - same day, or `show_full_date`: `"Today, May 1"`, `"Tomorrow, May 2"` or
///   `"Friday, May 3"`
/// - one to six days ahead: `"Tomorrow"` or the bare weekday, `"Saturday"`
/// - anything else: abbreviated date without year, `"Sat, May 11"`
pub fn friendly_label(epoch_seconds: i64, now_millis: i64, show_full_date: bool, labels: &Labels) -> String {
    let target = DateTime::<Utc>::from_timestamp(epoch_seconds, 0).unwrap_or_default();
    let delta = elapsed_days(target.timestamp_millis()) - elapsed_days(now_millis);

    let day_name = || relative_day_name(delta, labels).unwrap_or(weekday_name(target.weekday()));

    if delta == 0 || show_full_date {
        format!("{}, {}", day_name(), target.format("%B %-d"))
    } else if (1..7).contains(&delta) {
        day_name().to_owned()
    } else {
        target.format("%a, %b %-d").to_string()
    }
}

fn relative_day_name(delta: i64, labels: &Labels) -> Option<&str> {
    match delta {
        0 => Some(labels.today.as_str()),
        1 => Some(labels.tomorrow.as_str()),
        _ => None,
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// 12-hour UTC clock time, e.g. `"03:00 PM"`.
pub fn utc_clock_label(epoch_millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(epoch_millis)
        .unwrap_or_default()
        .format("%I:%M %p")
        .to_string()
}

/// Hour of day (0-23, UTC) of an instant given in epoch seconds.
pub fn hour_of_day_utc(epoch_seconds: i64) -> u32 {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0).unwrap_or_default().hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // Wednesday 2024-05-01 10:30 UTC
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap()
    }

    fn label(day: u32, hour: u32, full: bool) -> String {
        let target = Utc.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap();
        friendly_label(target.timestamp(), now().timestamp_millis(), full, &Labels::default())
    }

    #[test]
    fn same_day_is_today_with_date() {
        assert_eq!(label(1, 21, false), "Today, May 1");
        assert_eq!(label(1, 0, false), "Today, May 1");
    }

    #[test]
    fn next_day_is_tomorrow() {
        assert_eq!(label(2, 9, false), "Tomorrow");
        assert_eq!(label(2, 9, true), "Tomorrow, May 2");
    }

    #[test]
    fn within_a_week_is_bare_weekday() {
        assert_eq!(label(4, 12, false), "Saturday");
        assert_eq!(label(7, 12, false), "Tuesday");
    }

    #[test]
    fn full_date_keeps_weekday_past_tomorrow() {
        assert_eq!(label(4, 12, true), "Saturday, May 4");
    }

    #[test]
    fn a_week_or_more_is_abbreviated_date_without_year() {
        assert_eq!(label(8, 12, false), "Wed, May 8");

        let far = label(11, 12, false);
        assert_eq!(far, "Sat, May 11");
        assert!(!far.contains("2024"));
    }

    #[test]
    fn past_days_are_abbreviated() {
        let target = Utc.with_ymd_and_hms(2024, 4, 29, 12, 0, 0).unwrap();
        let got = friendly_label(target.timestamp(), now().timestamp_millis(), false, &Labels::default());
        assert_eq!(got, "Mon, Apr 29");
    }

    #[test]
    fn localized_words_are_used() {
        let labels = Labels { today: "Aujourd'hui".into(), tomorrow: "Demain".into(), ..Labels::default() };
        let target = Utc.with_ymd_and_hms(2024, 5, 2, 6, 0, 0).unwrap();

        assert_eq!(friendly_label(target.timestamp(), now().timestamp_millis(), false, &labels), "Demain");
    }

    #[test]
    fn clock_label_is_twelve_hour_utc() {
        let afternoon = Utc.with_ymd_and_hms(2024, 5, 1, 15, 0, 0).unwrap();
        let midnight = Utc.with_ymd_and_hms(2024, 5, 1, 0, 5, 0).unwrap();

        assert_eq!(utc_clock_label(afternoon.timestamp_millis()), "03:00 PM");
        assert_eq!(utc_clock_label(midnight.timestamp_millis()), "12:05 AM");
    }

    #[test]
    fn hour_of_day_is_utc() {
        assert_eq!(hour_of_day_utc(now().timestamp()), 10);
    }
}
