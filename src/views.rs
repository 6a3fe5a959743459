use std::sync::OnceLock;

use regex::Regex;

fn count_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([\d.]+)\s*([KkMmBb])?$").unwrap())
}

fn views_word_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)views?").unwrap())
}

/// Parse a free-text view count ("1.2M views", "1,234", "500K") into a number.
///
/// Thousands separators and the word "views" are stripped before matching.
/// Returns `None` for anything that doesn't reduce to `<number>[K|M|B]`;
/// callers decide whether an unparsable line is an error.
pub fn parse_view_count(text: &str) -> Option<u64> {
    let cleaned = text.trim().replace(',', "");
    let cleaned = views_word_regex().replace_all(&cleaned, "");
    let caps = count_regex().captures(cleaned.trim())?;

    let number: f64 = caps[1].parse().ok()?;
    let multiplier = match caps
        .get(2)
        .and_then(|m| m.as_str().chars().next())
        .map(|c| c.to_ascii_uppercase())
    {
        Some('K') => 1_000.0,
        Some('M') => 1_000_000.0,
        Some('B') => 1_000_000_000.0,
        _ => 1.0,
    };

    Some((number * multiplier).round() as u64)
}

/// Parse newline-separated view-count lines into counts plus their rounded
/// arithmetic mean.
///
/// Blank lines are ignored and unparsable lines are silently dropped; returns
/// `None` only when no line parses at all.
pub fn average_from_lines(input: &str) -> Option<(Vec<u64>, u64)> {
    let parsed: Vec<u64> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(parse_view_count)
        .collect();

    if parsed.is_empty() {
        return None;
    }

    let total: u64 = parsed.iter().sum();
    let average = (total as f64 / parsed.len() as f64).round() as u64;
    Some((parsed, average))
}

/// Abbreviate a view count: 1_234_567 -> "1.2M", 4_500 -> "4.5K".
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        format!("{:.1}M", views as f64 / 1_000_000.0)
    } else if views >= 1_000 {
        format!("{:.1}K", views as f64 / 1_000.0)
    } else {
        views.to_string()
    }
}
