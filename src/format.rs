use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;

fn duration_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").unwrap())
}

/// Parse an ISO-8601 duration of the `PT[nH][nM][nS]` form to seconds.
///
/// Malformed input falls back to 0 seconds rather than failing; durations
/// are presentation-only.
pub fn parse_iso_duration(text: &str) -> u64 {
    let Some(caps) = duration_regex().captures(text) else {
        return 0;
    };
    let part = |i| {
        caps.get(i)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };
    part(1) * 3600 + part(2) * 60 + part(3)
}

/// Format seconds as `H:MM:SS` for an hour or longer, `M:SS` otherwise.
pub fn format_duration(seconds: u64) -> String {
    if seconds >= 3600 {
        format!(
            "{}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    } else {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    }
}

/// Human-readable recency string relative to the wall clock.
pub fn time_ago(date: DateTime<Utc>) -> String {
    time_ago_from(date, Utc::now())
}

/// `time_ago` with an explicit "now", for deterministic tests.
pub fn time_ago_from(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = (now - date).num_days().max(0);

    if days < 30 {
        format!("{days} days ago")
    } else if days < 365 {
        let months = days / 30;
        format!("{} month{} ago", months, if months > 1 { "s" } else { "" })
    } else {
        let years = days / 365;
        format!("{} year{} ago", years, if years > 1 { "s" } else { "" })
    }
}

/// Format a dollar amount with comma grouping and two decimals: "$1,450.00".
pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}
