use crate::error::ScanError;
use crate::models::LookbackBounds;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde_json::Value;

pub const DESCRIPTION_MAX_CHARS: usize = 200;
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_TITLE: &str = "N/A";

pub fn validate_lookback(days: u32, bounds: &LookbackBounds) -> Result<u32, ScanError> {
    if days < bounds.min || days > bounds.max {
        return Err(ScanError::InvalidLookback {
            days,
            min: bounds.min,
            max: bounds.max,
        });
    }
    Ok(days)
}

/// `now - days` as an ISO8601 UTC timestamp with a trailing `Z`, for `publishedAfter`.
pub fn published_after(days: u32, now: DateTime<Utc>) -> String {
    (now - Duration::days(i64::from(days))).to_rfc3339_opts(SecondsFormat::Secs, true)
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Cuts `text` to at most `max_chars` characters (not bytes).
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Reads a statistics counter. The Data API sends counts as decimal strings;
/// a missing or null counter is 0 (hidden subscriber counts are simply absent).
pub fn parse_count(value: &Value, field: &'static str) -> Result<u64, ScanError> {
    match value {
        Value::Null => Ok(0),
        Value::String(s) => s.trim().parse::<u64>().map_err(|_| ScanError::InvalidCount {
            field,
            value: s.clone(),
        }),
        Value::Number(n) => n.as_u64().ok_or_else(|| ScanError::InvalidCount {
            field,
            value: n.to_string(),
        }),
        other => Err(ScanError::InvalidCount {
            field,
            value: other.to_string(),
        }),
    }
}

pub fn format_number(number: u64) -> String {
    let num_str = number.to_string();
    let mut result = String::new();
    let len = num_str.len();

    for (i, c) in num_str.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn published_after_subtracts_days_for_whole_range() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap();
        for days in 1..=30u32 {
            let stamp = published_after(days, now);
            assert!(stamp.ends_with('Z'), "{stamp}");
            let parsed = stamp.parse::<DateTime<Utc>>().unwrap();
            assert_eq!(parsed, now - Duration::days(i64::from(days)));
        }
        assert_eq!(published_after(5, now), "2024-03-10T12:30:45Z");
        assert_eq!(published_after(30, now), "2024-02-14T12:30:45Z");
    }

    #[test]
    fn lookback_bounds_are_inclusive() {
        let bounds = LookbackBounds::default();
        assert_eq!(validate_lookback(1, &bounds).unwrap(), 1);
        assert_eq!(validate_lookback(30, &bounds).unwrap(), 30);
        assert!(matches!(
            validate_lookback(0, &bounds),
            Err(ScanError::InvalidLookback { days: 0, min: 1, max: 30 })
        ));
        assert!(validate_lookback(31, &bounds).is_err());
    }

    #[test]
    fn truncate_counts_characters() {
        let long = "é".repeat(250);
        let cut = truncate_chars(&long, DESCRIPTION_MAX_CHARS);
        assert_eq!(cut.chars().count(), 200);
        assert_eq!(truncate_chars("short", 200), "short");
    }

    #[test]
    fn counts_parse_from_strings_and_numbers() {
        assert_eq!(parse_count(&json!("52999"), "subscriberCount").unwrap(), 52_999);
        assert_eq!(parse_count(&json!(17), "viewCount").unwrap(), 17);
        assert_eq!(parse_count(&Value::Null, "viewCount").unwrap(), 0);
        assert!(matches!(
            parse_count(&json!("many"), "viewCount"),
            Err(ScanError::InvalidCount { field: "viewCount", .. })
        ));
        assert!(parse_count(&json!(-3), "viewCount").is_err());
    }

    #[test]
    fn number_formatting_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }
}
