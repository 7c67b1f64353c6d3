//! Helper functions for decoding primitive wire strings (timestamps, dates, UUIDs, base64).

use crate::error::DecodeError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime};
use serde_json::Value;
use uuid::Uuid;

/// Name of the JSON kind of `value`, used in error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parse an RFC 3339 timestamp such as `2024-03-01T08:30:00.0000000Z`.
pub fn parse_date_time(s: &str) -> Result<DateTime<FixedOffset>, DecodeError> {
    DateTime::parse_from_rfc3339(s).map_err(|_| invalid("timestamp", s))
}

/// Parse a calendar date such as `2024-03-01`.
pub fn parse_date(s: &str) -> Result<NaiveDate, DecodeError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid("date", s))
}

/// Parse a time of day such as `08:30:00` or `08:30:00.0000000`.
pub fn parse_time(s: &str) -> Result<NaiveTime, DecodeError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S%.f").map_err(|_| invalid("time of day", s))
}

pub fn parse_uuid(s: &str) -> Result<Uuid, DecodeError> {
    Uuid::parse_str(s).map_err(|_| invalid("UUID", s))
}

/// Decode standard (padded) base64.
pub fn parse_base64(s: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(s).map_err(|_| invalid("base64", s))
}

pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

fn invalid(kind: &'static str, value: &str) -> DecodeError {
    DecodeError::InvalidFormat {
        kind,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn seven_digit_fractions_are_accepted() {
        let ts = parse_date_time("2019-07-22T15:36:55.0000000Z").expect("timestamp");
        assert_eq!(ts.year(), 2019);
        assert_eq!(ts.offset().local_minus_utc(), 0);

        let t = parse_time("08:30:00.0000000").expect("time");
        assert_eq!((t.hour(), t.minute()), (8, 30));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert!(matches!(
            parse_uuid("not-a-uuid"),
            Err(DecodeError::InvalidFormat { kind: "UUID", .. })
        ));
        assert!(parse_date("2024-13-01").is_err());
        assert!(parse_base64("%%%").is_err());
    }

    #[test]
    fn base64_round_trips() {
        let encoded = encode_base64(b"graph");
        assert_eq!(encoded, "Z3JhcGg=");
        assert_eq!(parse_base64(&encoded).expect("decode"), b"graph");
    }
}
