use crate::models::LookbackBounds;

pub fn format_iso8601_date(iso_date: &str) -> String {
    if let Ok(datetime) = iso_date.parse::<chrono::DateTime<chrono::Utc>>() {
        datetime.format("%Y-%m-%d %H:%M UTC").to_string()
    } else {
        iso_date.to_string()
    }
}

// Formats each x1000 step
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

/// Parses the days input and pins it into the allowed lookback window.
/// Returns `None` for anything that is not a number.
pub fn parse_days(input: &str, bounds: &LookbackBounds) -> Option<u32> {
    input
        .trim()
        .parse::<i64>()
        .ok()
        .map(|days| days.clamp(i64::from(bounds.min), i64::from(bounds.max)) as u32)
}
