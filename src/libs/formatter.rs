//! Date, time and duration formatting for display and argument parsing.
//!
//! Timestamps are stored raw; this module decides how they are shown and how
//! user input is read back, following the 12/24-hour preference.
//!
//! ## Formats
//!
//! | Purpose        | 24-hour            | 12-hour              |
//! |----------------|--------------------|----------------------|
//! | Time of day    | `15:04`            | `03:04PM`            |
//! | Record key     | `2021-05-01-15-04` | `2021-05-01-03-04PM` |
//! | Date           | `2021-05-01`       | `2021-05-01`         |
//!
//! Durations render as `8h 24min`, or `0h 0min 12sec` below one minute.
//!
//! ```rust
//! use timetrace::libs::formatter::format_duration;
//! use chrono::Duration;
//!
//! assert_eq!(format_duration(&Duration::minutes(504)), "8h 24min");
//! assert_eq!(format_duration(&Duration::seconds(12)), "0h 0min 12sec");
//! ```

use super::error::{Error, Result};
use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

pub const DATE_LAYOUT: &str = "%Y-%m-%d";
const TIME_LAYOUT: &str = "%H:%M";
const TIME_LAYOUT_12: &str = "%I:%M%p";
const RECORD_KEY_LAYOUT: &str = "%Y-%m-%d-%H-%M";
const RECORD_KEY_LAYOUT_12: &str = "%Y-%m-%d-%I-%M%p";

/// Placeholder for missing values in tables.
pub const DEFAULT_STRING: &str = "---";

#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    use_12_hours: bool,
}

impl Formatter {
    pub fn new(use_12_hours: bool) -> Self {
        Self { use_12_hours }
    }

    fn time_layout(&self) -> &'static str {
        if self.use_12_hours {
            TIME_LAYOUT_12
        } else {
            TIME_LAYOUT
        }
    }

    fn record_key_format(&self) -> &'static str {
        if self.use_12_hours {
            RECORD_KEY_LAYOUT_12
        } else {
            RECORD_KEY_LAYOUT
        }
    }

    pub fn time_string(&self, input: &DateTime<Local>) -> String {
        input.format(self.time_layout()).to_string()
    }

    pub fn pretty_date_string(&self, input: &DateTime<Local>) -> String {
        input.format(DATE_LAYOUT).to_string()
    }

    /// Human readable layout of record keys for help texts.
    pub fn record_key_layout(&self) -> &'static str {
        if self.use_12_hours {
            "YYYY-MM-DD-HH-MMPM"
        } else {
            "YYYY-MM-DD-HH-MM"
        }
    }

    /// Record key as accepted by `get record`, `edit record` and friends.
    pub fn record_key(&self, start: &DateTime<Local>) -> String {
        start.format(self.record_key_format()).to_string()
    }

    pub fn parse_record_key(&self, key: &str) -> Result<DateTime<Local>> {
        let naive = NaiveDateTime::parse_from_str(&key.to_uppercase(), self.record_key_format())
            .map_err(|_| Error::InvalidRecordKey(key.to_string()))?;
        local(naive).ok_or_else(|| Error::InvalidRecordKey(key.to_string()))
    }

    /// Parses `YYYY-MM-DD`, `today` or `yesterday`.
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate> {
        let today = Local::now().date_naive();
        match input.to_lowercase().as_str() {
            "today" => Ok(today),
            "yesterday" => today.pred_opt().ok_or_else(|| Error::InvalidDate(input.to_string())),
            _ => NaiveDate::parse_from_str(input, DATE_LAYOUT).map_err(|_| Error::InvalidDate(input.to_string())),
        }
    }

    /// Parses a time of day. `HH:MM` is always accepted, `hh:mmAM` as well.
    pub fn parse_time(&self, input: &str) -> Result<NaiveTime> {
        let normalized = input.trim().to_uppercase();
        NaiveTime::parse_from_str(&normalized, TIME_LAYOUT_12)
            .or_else(|_| NaiveTime::parse_from_str(&normalized, TIME_LAYOUT))
            .map_err(|_| Error::InvalidTime(input.to_string()))
    }

    /// Combines a date and a time of day into a local timestamp.
    pub fn combine(&self, date: NaiveDate, time: NaiveTime) -> Result<DateTime<Local>> {
        local(date.and_time(time)).ok_or_else(|| Error::InvalidTime(time.to_string()))
    }

    pub fn format_tags(&self, tags: &[String]) -> String {
        tags.join(", ")
    }

    pub fn format_duration(&self, duration: &Duration) -> String {
        format_duration(duration)
    }
}

/// Resolves a naive local time, picking the earlier instant on DST folds.
pub fn local(naive: NaiveDateTime) -> Option<DateTime<Local>> {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(time) => Some(time),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => None,
    }
}

/// Formats a duration as `8h 24min`, or `0h 0min 12sec` below one minute.
///
/// Negative durations are shown as zero.
pub fn format_duration(duration: &Duration) -> String {
    let duration = if *duration < Duration::zero() { Duration::zero() } else { *duration };

    let hours = duration.num_hours();
    let minutes = duration.num_minutes() % 60;
    let seconds = duration.num_seconds() % 60;

    if hours == 0 && minutes == 0 {
        return format!("0h 0min {}sec", seconds);
    }
    format!("{}h {}min", hours, minutes)
}

/// Parses a duration such as `1h30m`, `15m`, `90s` or `1.5h`.
///
/// Supported units are `h`, `m`, `s`, `ms`, `us` (or `µs`) and `ns`; a leading
/// sign is allowed. Totals beyond `i64::MAX` nanoseconds (about 292 years) are
/// rejected.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let invalid = || Error::InvalidDuration(input.to_string());
    let trimmed = input.trim();

    let (negative, mut rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    if rest.is_empty() {
        return Err(invalid());
    }
    if rest == "0" {
        return Ok(Duration::zero());
    }

    let mut total_ns = 0f64;
    while !rest.is_empty() {
        let number_len = rest.find(|c: char| !(c.is_ascii_digit() || c == '.')).ok_or_else(invalid)?;
        if number_len == 0 {
            return Err(invalid());
        }
        let value: f64 = rest[..number_len].parse().map_err(|_| invalid())?;
        rest = &rest[number_len..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit() || c == '.').unwrap_or(rest.len());
        let factor = match &rest[..unit_len] {
            "h" => 3_600_000_000_000f64,
            "m" => 60_000_000_000f64,
            "s" => 1_000_000_000f64,
            "ms" => 1_000_000f64,
            "us" | "µs" | "μs" => 1_000f64,
            "ns" => 1f64,
            _ => return Err(invalid()),
        };
        rest = &rest[unit_len..];
        total_ns += value * factor;
    }

    if !total_ns.is_finite() || total_ns.round() >= i64::MAX as f64 {
        return Err(invalid());
    }

    let nanos = total_ns.round() as i64;
    Ok(Duration::nanoseconds(if negative { -nanos } else { nanos }))
}
