//! Date and date-time parsing with multiple format attempts.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::convert::types::DateFormatConfig;

/// Parse a date string with multiple format attempts
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    // Try all the configured formats
    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    // If enabled, try to detect the format based on string patterns
    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

/// Parse a date-time string with multiple format attempts
///
/// Falls back to date-only parsing with a midnight time component, so any
/// string the date parser accepts is also accepted here.
#[must_use]
pub fn parse_datetime_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDateTime> {
    for format in &config.datetime_formats {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(s, format) {
            return Some(datetime);
        }
    }

    parse_date_string(s, config).map(|date| date.and_time(NaiveTime::MIN))
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    // ISO-like format with dashes (YYYY-MM-DD)
    if s.len() == 10 && s.as_bytes()[4] == b'-' && s.as_bytes()[7] == b'-' {
        return Some("%Y-%m-%d");
    }

    // Slash-separated dates
    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 {
            if parts[0].len() == 4 {
                return Some("%Y/%m/%d"); // YYYY/MM/DD
            } else if parts[2].len() == 4 {
                if let Ok(first_num) = parts[0].parse::<u8>() {
                    if first_num > 12 {
                        return Some("%d/%m/%Y"); // DD/MM/YYYY
                    }
                    // Ambiguous between MM/DD/YYYY and DD/MM/YYYY;
                    // default to the European reading
                    return Some("%d/%m/%Y");
                }
            }
        }
    }

    // Dot-separated dates (DD.MM.YYYY)
    if s.contains('.') {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%d.%m.%Y");
        }
    }

    // Compact format (YYYYMMDD)
    if s.len() == 8 && s.chars().all(|c| c.is_ascii_digit()) {
        return Some("%Y%m%d");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_configured_and_detected_formats() {
        let config = DateFormatConfig::default();
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();

        assert_eq!(parse_date_string("2023-01-15", &config), Some(expected));
        assert_eq!(parse_date_string("15.01.2023", &config), Some(expected));
        assert_eq!(parse_date_string("20230115", &config), Some(expected));
        assert_eq!(parse_date_string("not a date", &config), None);
    }

    #[test]
    fn detects_common_patterns() {
        assert_eq!(detect_date_format("2023-01-15"), Some("%Y-%m-%d"));
        assert_eq!(detect_date_format("2023/01/15"), Some("%Y/%m/%d"));
        assert_eq!(detect_date_format("15/01/2023"), Some("%d/%m/%Y"));
        assert_eq!(detect_date_format("20230115"), Some("%Y%m%d"));
        assert_eq!(detect_date_format("garbage"), None);
    }

    #[test]
    fn datetime_parsing_accepts_date_only_strings() {
        let config = DateFormatConfig::default();
        let datetime = parse_datetime_string("2024-01-01", &config).unwrap();
        assert_eq!(
            datetime,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_time(NaiveTime::MIN)
        );

        let full = parse_datetime_string("2024-01-01 13:30:00", &config).unwrap();
        assert_eq!(full.format("%H:%M:%S").to_string(), "13:30:00");
    }
}
