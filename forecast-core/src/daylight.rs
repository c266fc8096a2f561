//! Morning / afternoon / evening classification from sunrise and sunset hours.

use serde::{Deserialize, Serialize};

/// Part of the day used to pick background styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaylightWindow {
    Morning,
    Afternoon,
    Evening,
}

impl DaylightWindow {
    /// Classify `current_hour` against the sunrise and sunset hours.
    ///
    /// Midday is `sunrise + (sunset - sunrise) / 2`, truncated. Morning is
    /// `[sunrise, midday)`, afternoon is `[midday, sunset]` and everything
    /// else, before sunrise included, is evening.
    pub fn classify(current_hour: u32, sunrise_hour: u32, sunset_hour: u32) -> Self {
        let (current, sunrise, sunset) =
            (i64::from(current_hour), i64::from(sunrise_hour), i64::from(sunset_hour));
        let midday = sunrise + (sunset - sunrise) / 2;

        if (sunrise..midday).contains(&current) {
            DaylightWindow::Morning
        } else if (midday..=sunset).contains(&current) {
            DaylightWindow::Afternoon
        } else {
            DaylightWindow::Evening
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DaylightWindow::Morning => "morning",
            DaylightWindow::Afternoon => "afternoon",
            DaylightWindow::Evening => "evening",
        }
    }
}

impl std::fmt::Display for DaylightWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_a_regular_day() {
        assert_eq!(DaylightWindow::classify(9, 6, 18), DaylightWindow::Morning);
        assert_eq!(DaylightWindow::classify(13, 6, 18), DaylightWindow::Afternoon);
        assert_eq!(DaylightWindow::classify(20, 6, 18), DaylightWindow::Evening);
    }

    #[test]
    fn boundaries() {
        assert_eq!(DaylightWindow::classify(6, 6, 18), DaylightWindow::Morning);
        assert_eq!(DaylightWindow::classify(12, 6, 18), DaylightWindow::Afternoon);
        assert_eq!(DaylightWindow::classify(18, 6, 18), DaylightWindow::Afternoon);
        assert_eq!(DaylightWindow::classify(5, 6, 18), DaylightWindow::Evening);
        assert_eq!(DaylightWindow::classify(19, 6, 18), DaylightWindow::Evening);
    }

    #[test]
    fn odd_span_midday_truncates() {
        // 5 + 13 / 2 = 11
        assert_eq!(DaylightWindow::classify(10, 5, 18), DaylightWindow::Morning);
        assert_eq!(DaylightWindow::classify(11, 5, 18), DaylightWindow::Afternoon);
    }

    #[test]
    fn unset_hours_make_only_midnight_afternoon() {
        assert_eq!(DaylightWindow::classify(0, 0, 0), DaylightWindow::Afternoon);
        assert_eq!(DaylightWindow::classify(9, 0, 0), DaylightWindow::Evening);
    }
}
