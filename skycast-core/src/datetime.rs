//! Local wall-clock labels from epoch seconds + timezone offset
//!
//! All functions are pure: the provider reports UTC epoch seconds and a
//! signed offset in seconds, and the label is computed on the shifted
//! instant, never on the host's timezone.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};

use crate::locale::Locale;

fn local(epoch_secs: i64, tz_offset_secs: i32) -> NaiveDateTime {
    let shifted = epoch_secs.saturating_add(i64::from(tz_offset_secs));
    DateTime::from_timestamp(shifted, 0)
        .unwrap_or_default()
        .naive_utc()
}

fn twelve_hour(hour: u32) -> (u32, &'static str) {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour, period)
}

/// `"Sunday 10, Jan"`
pub fn get_date(epoch_secs: i64, tz_offset_secs: i32, locale: Locale) -> String {
    let dt = local(epoch_secs, tz_offset_secs);
    format!(
        "{} {}, {}",
        locale.weekday(dt.weekday().num_days_from_sunday() as usize),
        dt.day(),
        locale.month(dt.month0() as usize)
    )
}

/// `"7:05 PM"`
pub fn get_time(epoch_secs: i64, tz_offset_secs: i32) -> String {
    let dt = local(epoch_secs, tz_offset_secs);
    let (hour, period) = twelve_hour(dt.hour());
    format!("{}:{:02} {}", hour, dt.minute(), period)
}

/// `"7 PM"`
pub fn get_hours(epoch_secs: i64, tz_offset_secs: i32) -> String {
    let dt = local(epoch_secs, tz_offset_secs);
    let (hour, period) = twelve_hour(dt.hour());
    format!("{} {}", hour, period)
}

/// Calendar parts of a forecast day
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayLabel {
    pub day: u32,
    pub month: &'static str,
    pub weekday: &'static str,
}

pub fn day_label(epoch_secs: i64, tz_offset_secs: i32, locale: Locale) -> DayLabel {
    let dt = local(epoch_secs, tz_offset_secs);
    DayLabel {
        day: dt.day(),
        month: locale.month(dt.month0() as usize),
        weekday: locale.weekday(dt.weekday().num_days_from_sunday() as usize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_midnight() {
        assert_eq!(get_time(0, 0), "12:00 AM");
        assert_eq!(get_hours(0, 0), "12 AM");
        assert_eq!(get_date(0, 0, Locale::En), "Thursday 1, Jan");
        assert_eq!(get_date(0, 0, Locale::PtBr), "Quinta 1, Jan");
    }

    #[test]
    fn test_timezone_offset_shifts_day() {
        // 1970-01-01 00:00 UTC is still Wednesday evening at UTC-5.
        assert_eq!(get_date(0, -5 * 3600, Locale::En), "Wednesday 31, Dec");
        assert_eq!(get_time(0, -5 * 3600), "7:00 PM");
    }

    #[test]
    fn test_noon_and_minutes_padding() {
        // 2023-11-14 12:05:00 UTC
        let noon = 1_699_963_500;
        assert_eq!(get_time(noon, 0), "12:05 PM");
        assert_eq!(get_hours(noon, 0), "12 PM");
    }

    #[test]
    fn test_hours_agrees_with_time() {
        let samples = [(0, 0), (1_700_000_000, -18_000), (1_700_040_000, 19_800), (86_399, 3_600)];
        for (epoch, tz) in samples {
            let time = get_time(epoch, tz);
            let hours = get_hours(epoch, tz);
            let (hour, rest) = time.split_once(':').unwrap();
            let period = &rest[rest.len() - 2..];
            assert_eq!(hours, format!("{} {}", hour, period), "epoch {epoch} tz {tz}");
        }
    }

    #[test]
    fn test_day_label() {
        // 2024-02-29 (a Thursday)
        let label = day_label(1_709_208_000, 0, Locale::En);
        assert_eq!(
            label,
            DayLabel {
                day: 29,
                month: "Feb",
                weekday: "Thursday",
            }
        );
    }
}
