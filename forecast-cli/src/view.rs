//! Plain-text rendering of the core's view model.

use chrono::{DateTime, Utc};

use forecast_core::{
    CurrentConditions, ForecastBundle, ForecastPoint, Labels, UnitSystem,
    labels::{friendly_label, utc_clock_label},
    presentation::{
        high_low_label, humidity_label, icon_key, pressure_label, temperature_label, wind_label,
    },
};

pub fn render_current(
    conditions: &CurrentConditions,
    units: UnitSystem,
    now: DateTime<Utc>,
    labels: &Labels,
) -> String {
    let mut out = String::new();

    if !conditions.place_name.is_empty() {
        out.push_str(&format!("{}\n", conditions.place_name));
    }
    out.push_str(&format!(
        "{}\n",
        friendly_label(conditions.observed_at, now.timestamp_millis(), false, labels)
    ));
    out.push_str(&format!(
        "{} ({})\n",
        conditions.condition_description,
        icon_key(&conditions.condition_icon_code)
    ));
    out.push_str(&format!(
        "{}  {}\n",
        temperature_label(conditions.temperature_c),
        high_low_label(conditions.temperature_max_c, conditions.temperature_min_c)
    ));
    out.push_str(&format!("Humidity: {}\n", humidity_label(conditions.humidity_pct)));
    out.push_str(&format!("Pressure: {}\n", pressure_label(conditions.pressure_hpa)));
    out.push_str(&format!(
        "Wind: {}\n",
        wind_label(units, conditions.wind_speed, conditions.wind_bearing, labels)
    ));

    out
}

pub fn render_hourly(hourly: &[ForecastPoint]) -> String {
    let mut out = String::from("\nNext hours:\n");

    if hourly.is_empty() {
        out.push_str("  (no data)\n");
    }
    for point in hourly {
        out.push_str(&format!(
            "  {}  {:>5}  {}\n",
            utc_clock_label(point.timestamp * 1000),
            temperature_label(point.temperature_max_c),
            icon_key(&point.condition_icon_code)
        ));
    }

    out
}

/// One row per day, each represented by its earliest point.
pub fn render_daily(
    bundle: &ForecastBundle,
    now: DateTime<Utc>,
    full_date: bool,
    labels: &Labels,
) -> String {
    let mut out = String::from("\nNext days:\n");

    if bundle.daily.is_empty() {
        out.push_str("  (no data)\n");
    }
    for head in bundle.day_heads() {
        out.push_str(&format!(
            "  {:<20} {:<20} {:>11}  {}\n",
            friendly_label(head.timestamp, now.timestamp_millis(), full_date, labels),
            head.condition_description,
            high_low_label(head.temperature_max_c, head.temperature_min_c),
            icon_key(&head.condition_icon_code)
        ));
    }

    out
}
