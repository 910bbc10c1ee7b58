//! Time snapshots
//!
//! A [`TimeSnapshot`] is the set of display strings derived from one read of
//! the wall clock. Every field comes from the same instant, so seconds can
//! never roll over between the hour and the minute being formatted.

use chrono::{DateTime, TimeZone, Timelike};
use serde::Serialize;
use std::fmt;

/// Placeholder shown for hours, minutes and seconds before the first tick
pub const PLACEHOLDER_FIELD: &str = "--";

/// Placeholder shown for the date line before the first tick
pub const PLACEHOLDER_DATE: &str = "Loading…";

/// Long-form en-US date: "Thursday, March 7, 2024"
const DATE_LINE_FORMAT: &str = "%A, %B %-d, %Y";

/// Formatted display fields derived from a single clock read
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSnapshot {
    hours: String,
    minutes: String,
    seconds: String,
    date_line: String,
    time_zone: String,
}

impl TimeSnapshot {
    /// Format an instant.
    ///
    /// `time_zone` is the IANA name reported by the host. `None` becomes an
    /// empty string rather than an error.
    pub fn from_instant<Tz>(instant: &DateTime<Tz>, time_zone: Option<String>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self {
            hours: pad2(instant.hour()),
            minutes: pad2(instant.minute()),
            seconds: pad2(instant.second()),
            date_line: instant.format(DATE_LINE_FORMAT).to_string(),
            time_zone: time_zone.unwrap_or_default(),
        }
    }

    /// The synthetic snapshot displayed before the first real sample
    pub fn placeholder() -> Self {
        Self {
            hours: PLACEHOLDER_FIELD.to_string(),
            minutes: PLACEHOLDER_FIELD.to_string(),
            seconds: PLACEHOLDER_FIELD.to_string(),
            date_line: PLACEHOLDER_DATE.to_string(),
            time_zone: String::new(),
        }
    }

    pub fn hours(&self) -> &str {
        &self.hours
    }

    pub fn minutes(&self) -> &str {
        &self.minutes
    }

    pub fn seconds(&self) -> &str {
        &self.seconds
    }

    pub fn date_line(&self) -> &str {
        &self.date_line
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    /// Numeric hour, `None` for the placeholder
    pub fn hour_value(&self) -> Option<u32> {
        self.hours.parse().ok()
    }

    /// Numeric second, `None` for the placeholder
    pub fn second_value(&self) -> Option<u32> {
        self.seconds.parse().ok()
    }

    /// `HH:MM:SS` joined with the given separator
    pub fn clock_face(&self, separator: char) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.hours,
            self.minutes,
            self.seconds,
            sep = separator
        )
    }
}

impl fmt::Display for TimeSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.clock_face(':'), self.date_line)?;
        if !self.time_zone.is_empty() {
            write!(f, " ({})", self.time_zone)?;
        }
        Ok(())
    }
}

/// Left-pad a clock component with `'0'` to width 2
pub fn pad2(value: u32) -> String {
    format!("{:02}", value)
}
