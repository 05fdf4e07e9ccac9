use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Months, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeframeError;

/// A named interval class resolved relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// Returns the wire name of this timeframe.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
        }
    }

    /// Resolves this timeframe to a half-open window relative to `now`.
    ///
    /// All three windows start at the beginning of the current UTC
    /// day. `Weekly` is a rolling seven-day window, not an aligned
    /// calendar week; `Monthly` adds one calendar month (clamped at
    /// month end, so Jan 31 resolves to Feb 28/29).
    pub fn window_from(&self, now: DateTime<Utc>) -> TimeWindow {
        let start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let end = match self {
            Timeframe::Daily => start + chrono::Duration::days(1),
            Timeframe::Weekly => start + chrono::Duration::days(7),
            Timeframe::Monthly => start + Months::new(1),
        };
        TimeWindow { start, end }
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Timeframe::Daily),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            other => Err(TimeframeError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A half-open time window `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a window, validating that `start <= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns true if `instant` falls inside the window.
    ///
    /// The start is inclusive and the end exclusive, so adjacent
    /// windows never overlap.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 10, 0, 0).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_daily_window() {
        let window = Timeframe::Daily.window_from(reference());
        assert_eq!(window.start, midnight(2024, 6, 15));
        assert_eq!(window.end, midnight(2024, 6, 16));
    }

    #[test]
    fn test_weekly_window_is_rolling_seven_days() {
        let window = Timeframe::Weekly.window_from(reference());
        assert_eq!(window.start, midnight(2024, 6, 15));
        assert_eq!(window.end, midnight(2024, 6, 22));
    }

    #[test]
    fn test_monthly_window_adds_calendar_month() {
        let window = Timeframe::Monthly.window_from(reference());
        assert_eq!(window.start, midnight(2024, 6, 15));
        assert_eq!(window.end, midnight(2024, 7, 15));
    }

    #[test]
    fn test_monthly_window_clamps_at_month_end() {
        let now = Utc.with_ymd_and_hms(2024, 1, 31, 8, 0, 0).unwrap();
        let window = Timeframe::Monthly.window_from(now);
        assert_eq!(window.end, midnight(2024, 2, 29));
    }

    #[test]
    fn test_window_start_is_beginning_of_day() {
        let late = Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap();
        let window = Timeframe::Daily.window_from(late);
        assert_eq!(window.start, midnight(2024, 6, 15));
    }

    #[test]
    fn test_contains_is_half_open() {
        let window = Timeframe::Daily.window_from(reference());
        assert!(window.contains(window.start));
        assert!(!window.contains(window.end));
        assert!(window.contains(Utc.with_ymd_and_hms(2024, 6, 15, 23, 59, 59).unwrap()));
        assert!(!window.contains(midnight(2024, 6, 14)));
    }

    #[test]
    fn test_from_str_valid_names() {
        assert_eq!("daily".parse::<Timeframe>().unwrap(), Timeframe::Daily);
        assert_eq!("weekly".parse::<Timeframe>().unwrap(), Timeframe::Weekly);
        assert_eq!("monthly".parse::<Timeframe>().unwrap(), Timeframe::Monthly);
    }

    #[test]
    fn test_from_str_unsupported_name_fails() {
        let err = "yearly".parse::<Timeframe>().unwrap_err();
        assert_eq!(err, TimeframeError::Unsupported("yearly".to_string()));
    }

    #[test]
    fn test_from_str_does_not_silently_default() {
        assert!("".parse::<Timeframe>().is_err());
        assert!("Daily".parse::<Timeframe>().is_err());
    }

    #[test]
    fn test_window_new_rejects_inverted_range() {
        assert!(TimeWindow::new(midnight(2024, 6, 16), midnight(2024, 6, 15)).is_none());
    }
}
