// src/date_utils.rs
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::debug;

const INVALID_DATE: &str = "Invalid Date";

/// Formats an ISO-8601 date as `"Updated September 26, 2025"`.
///
/// Full timestamps with an offset are read in UTC. Input that does not parse
/// renders as `"Updated Invalid Date"`.
pub fn format_updated(iso_date: &str) -> String {
    match parse_calendar_date(iso_date) {
        Some(date) => date.format("Updated %B %-d, %Y").to_string(),
        None => {
            debug!("format_updated: could not parse '{}'", iso_date);
            format!("Updated {}", INVALID_DATE)
        }
    }
}

fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.naive_utc().date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}
