use chrono::{DateTime, Datelike, Utc};

/// Format a past timestamp (history selections):
/// - Relative for <7 days: "2h ago", "3d ago"
/// - Absolute for >=7 days: "Jan 15", "Dec 3, 2024"
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    format_timestamp_at(timestamp, &Utc::now())
}

fn format_timestamp_at(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*timestamp);

    if duration.num_days() < 7 {
        format_relative(duration.num_seconds().max(0))
    } else {
        format_absolute(timestamp, now)
    }
}

/// Format an event start time, always absolute with the time of day: "Sat, Nov 2 19:30"
pub fn format_start_time(starts_at: &DateTime<Utc>) -> String {
    format_start_time_at(starts_at, &Utc::now())
}

fn format_start_time_at(starts_at: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if starts_at.year() == now.year() {
        starts_at.format("%a, %b %-d %H:%M").to_string()
    } else {
        starts_at.format("%a, %b %-d, %Y %H:%M").to_string()
    }
}

fn format_relative(seconds: i64) -> String {
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        "just now".to_string()
    }
}

fn format_absolute(timestamp: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    if timestamp.year() == now.year() {
        timestamp.format("%b %-d").to_string()
    } else {
        timestamp.format("%b %-d, %Y").to_string()
    }
}
