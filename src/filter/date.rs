//! Date parsing for order dates and filter bounds
//!
//! Both the dataset loader and the request parser go through
//! [`parse_date_string`], so an order date and a filter bound written in the
//! same notation always resolve to the same calendar day.

use chrono::NaiveDate;

/// Configuration for date format handling
#[derive(Debug, Clone)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2003-01-15
                "%m/%d/%Y".to_string(), // US: 1/15/2003
                "%Y/%m/%d".to_string(), // 2003/01/15
                "%d.%m.%Y".to_string(), // 15.01.2003
                "%Y%m%d".to_string(),   // Compact: 20030115
                "%d %b %Y".to_string(), // 15 Jan 2003
                "%d %B %Y".to_string(), // 15 January 2003
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts.
///
/// The whole (trimmed) value is tried first. If that fails, the date portion
/// before a space or `T` separator is tried, so `2/24/2003 0:00` and
/// `2003-02-24T10:00:00` both resolve to 2003-02-24.
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(date) = parse_with_formats(s, config) {
        return Some(date);
    }

    let date_part = s.split([' ', 'T']).next().unwrap_or(s);
    if date_part != s {
        return parse_with_formats(date_part, config);
    }

    None
}

fn parse_with_formats(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Try to detect the date format based on string patterns.
///
/// Numeric `a/b/yyyy` and `a-b-yyyy` are read month first unless the leading
/// component is above 12.
fn detect_date_format(s: &str) -> Option<&'static str> {
    if has_trailing_year(s, '/') {
        return Some(if leading_day(s, '/') { "%d/%m/%Y" } else { "%m/%d/%Y" });
    }

    if has_trailing_year(s, '-') {
        return Some(if leading_day(s, '-') { "%d-%m-%Y" } else { "%m-%d-%Y" });
    }

    None
}

fn has_trailing_year(s: &str, separator: char) -> bool {
    let parts: Vec<&str> = s.split(separator).collect();
    parts.len() == 3 && parts[2].len() == 4
}

// A leading component above 12 can only be a day
fn leading_day(s: &str, separator: char) -> bool {
    s.split(separator)
        .next()
        .and_then(|first| first.parse::<u8>().ok())
        .is_some_and(|first| first > 12)
}
