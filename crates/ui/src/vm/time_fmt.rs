use std::time::Duration;

use chrono::{NaiveDate, NaiveTime};

/// `Jan 15`
#[must_use]
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `1/15/2024`
#[must_use]
pub fn format_numeric_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// `09:00 AM`
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

/// `0:07`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
