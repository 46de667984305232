//! The presentation clock.
//!
//! Shows Los Angeles wall-clock time with a literal `PST` suffix all year,
//! including during daylight saving. Formatting is pure over a UTC instant;
//! the ticker in the run loop calls [`now_string`] once per second.

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::America::Los_Angeles;

/// Refresh cadence of the clock widget.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Format an instant as the clock string, e.g. `03:41:07 PM PST`.
pub fn format_clock(instant: DateTime<Utc>) -> String {
    let local = instant.with_timezone(&Los_Angeles);
    format!("{} PST", local.format("%I:%M:%S %p"))
}

/// The clock string for the current instant.
pub fn now_string() -> String {
    format_clock(Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_formats_afternoon_in_winter() {
        // 23:30:05 UTC in January is 15:30:05 in Los Angeles (UTC-8).
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 23, 30, 5).unwrap();
        assert_eq!(format_clock(instant), "03:30:05 PM PST");
    }

    #[test]
    fn test_label_stays_pst_during_daylight_saving() {
        // 23:30:05 UTC in July is 16:30:05 in Los Angeles (UTC-7).
        let instant = Utc.with_ymd_and_hms(2025, 7, 15, 23, 30, 5).unwrap();
        assert_eq!(format_clock(instant), "04:30:05 PM PST");
    }

    #[test]
    fn test_midnight_reads_twelve_am() {
        let instant = Utc.with_ymd_and_hms(2025, 1, 15, 8, 5, 9).unwrap();
        assert_eq!(format_clock(instant), "12:05:09 AM PST");
    }

    #[test]
    fn test_tick_interval_is_one_second() {
        assert_eq!(TICK_INTERVAL, Duration::from_secs(1));
    }
}
