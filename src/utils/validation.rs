use crate::utils::error::{BookingError, Result};
use chrono::{NaiveDate, NaiveTime};
use url::Url;

pub const PICKUP_DATE_FORMAT: &str = "%Y-%m-%d";
pub const PICKUP_TIME_FORMAT: &str = "%H:%M";

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BookingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Normalizes a pickup date to `YYYY-MM-DD`.
pub fn parse_pickup_date(value: &str) -> std::result::Result<String, String> {
    NaiveDate::parse_from_str(value.trim(), PICKUP_DATE_FORMAT)
        .map(|date| date.format(PICKUP_DATE_FORMAT).to_string())
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", value, e))
}

/// Normalizes a pickup time to 24h `HH:MM`.
pub fn parse_pickup_time(value: &str) -> std::result::Result<String, String> {
    NaiveTime::parse_from_str(value.trim(), PICKUP_TIME_FORMAT)
        .map(|time| time.format(PICKUP_TIME_FORMAT).to_string())
        .map_err(|e| format!("expected HH:MM, got '{}': {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("api.base_url", "https://example.com/api").is_ok());
        assert!(validate_url("api.base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("api.base_url", "").is_err());
        assert!(validate_url("api.base_url", "invalid-url").is_err());
        assert!(validate_url("api.base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("api.timeout_seconds", 10, 1).is_ok());
        assert!(validate_positive_number("api.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_pickup_date_and_time_are_normalized() {
        assert_eq!(parse_pickup_date(" 2026-03-07 ").unwrap(), "2026-03-07");
        assert_eq!(parse_pickup_time("09:05").unwrap(), "09:05");
        assert!(parse_pickup_date("07/03/2026").is_err());
        assert!(parse_pickup_date("2026-02-30").is_err());
        assert!(parse_pickup_time("25:00").is_err());
    }
}
