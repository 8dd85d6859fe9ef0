//! Currency and date formatting
//!
//! Amounts are rounded to whole units and grouped the Indian way: the last
//! three digits, then pairs (`1,23,45,678`).

use std::fmt::Write;

use chrono::{DateTime, Local, TimeZone};

use crate::models::Timestamp;

/// Format an amount with a currency symbol
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let rounded = amount.round();
    let grouped = group_digits(&format!("{:.0}", rounded.abs()));

    if rounded < 0.0 {
        format!("-{}{}", symbol, grouped)
    } else {
        format!("{}{}", symbol, grouped)
    }
}

fn group_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let lead = head.len() % 2;

    let mut groups: Vec<&str> = Vec::new();
    if lead > 0 {
        groups.push(&head[..lead]);
    }
    for start in (lead..head.len()).step_by(2) {
        groups.push(&head[start..start + 2]);
    }

    format!("{},{}", groups.join(","), tail)
}

/// Format a timestamp in the local time zone
pub fn format_date(timestamp: Timestamp, format: &str) -> String {
    format_date_in(timestamp, format, &Local)
}

/// Format a timestamp in the given time zone
///
/// Out-of-range timestamps and unusable format strings render as `-`.
pub fn format_date_in<Tz>(timestamp: Timestamp, format: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let Some(utc) = DateTime::from_timestamp_millis(timestamp) else {
        return "-".to_string();
    };

    let mut out = String::new();
    match write!(out, "{}", utc.with_timezone(tz).format(format)) {
        Ok(()) => out,
        Err(_) => "-".to_string(),
    }
}
