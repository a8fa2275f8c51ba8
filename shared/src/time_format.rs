use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Parse the timestamp shapes the points sheet publishes. Values without an
/// offset are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(raw, fmt)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    })
}

/// Ordering key for a raw timestamp: epoch millis, or 0 when unparseable.
pub fn timestamp_sort_key(raw: &str) -> i64 {
    parse_timestamp(raw)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Relative age of `raw` as of `now` ("45s ago", "3h ago", "2mo ago").
/// Unparseable or future timestamps come back unchanged.
pub fn format_relative(raw: &str, now: DateTime<Utc>) -> String {
    let Some(at) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    let elapsed_ms = (now - at).num_milliseconds();
    if elapsed_ms < 0 {
        return raw.to_string();
    }
    let mut out = String::with_capacity(8);
    write_elapsed(&mut out, elapsed_ms / 1000);
    out
}

/// Write the coarsest unit for `secs` into `buf`. Each unit is floored before
/// the next threshold check, so 60s is "1m ago" and 24h is "1d ago".
pub fn write_elapsed(buf: &mut String, secs: i64) {
    buf.clear();
    let secs = secs.max(0);
    if secs < 60 {
        let _ = write!(buf, "{secs}s ago");
        return;
    }
    let minutes = secs / 60;
    if minutes < 60 {
        let _ = write!(buf, "{minutes}m ago");
        return;
    }
    let hours = minutes / 60;
    if hours < 24 {
        let _ = write!(buf, "{hours}h ago");
        return;
    }
    let days = hours / 24;
    if days < 30 {
        let _ = write!(buf, "{days}d ago");
        return;
    }
    let months = days / 30;
    if months < 12 {
        let _ = write!(buf, "{months}mo ago");
        return;
    }
    let years = months / 12;
    let _ = write!(buf, "{years}y ago");
}
