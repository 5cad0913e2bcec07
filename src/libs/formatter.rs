//! Time formatting for console output.
//!
//! Durations are shown as "HH:MM", hours additionally in decimal form since
//! that is what the tracker stores:
//!
//! - 1 hour 20 minutes → "1.33 hours (01:20)"
//! - 45 minutes → "0.75 hours (00:45)"

use chrono::Duration;

/// Formats a duration as zero-padded "HH:MM"; negative durations show as "00:00".
pub fn format_duration(duration: &Duration) -> String {
    let hours = duration.num_hours();
    let mins = duration.num_minutes() % 60;

    format!("{:02}:{:02}", hours.max(0), mins.max(0))
}

/// Formats decimal hours with two decimals followed by the "HH:MM" form.
pub fn format_hours(hours: f64) -> String {
    let minutes = (hours * 60.0).round() as i64;
    format!("{:.2} hours ({})", hours, format_duration(&Duration::minutes(minutes)))
}
