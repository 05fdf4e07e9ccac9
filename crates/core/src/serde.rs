//! Serde helper functions for request payload deserialization.
//!
//! Due dates arrive from the view layer either as full RFC 3339
//! timestamps or as bare `YYYY-MM-DD` dates (date pickers). Both are
//! converted to `DateTime<Utc>` here, at the boundary, so the rest of
//! the system deals with exactly one timestamp representation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer};

fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    // Bare dates are taken as midnight UTC.
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Deserialize an optional UTC timestamp from an RFC 3339 string or a
/// bare `YYYY-MM-DD` date. Null and missing both become `None`.
pub fn deserialize_optional_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_datetime(s.trim())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {s}"))),
        _ => Ok(None),
    }
}

/// Deserialize a field that distinguishes "absent" from "explicit
/// null". Combined with `#[serde(default)]`, an absent field yields
/// `None` while `null` yields `Some(None)` (clear the field).
pub fn deserialize_explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::deserialize(deserializer).map(Some)
}

/// Like [`deserialize_explicit_null`] but for timestamps, accepting
/// the same string formats as [`deserialize_optional_datetime`].
pub fn deserialize_explicit_null_datetime<'de, D>(
    deserializer: D,
) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_optional_datetime(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    #[derive(Debug, Deserialize, PartialEq)]
    struct TestStruct {
        #[serde(default, deserialize_with = "deserialize_optional_datetime")]
        due: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "deserialize_explicit_null")]
        category: Option<Option<Uuid>>,
    }

    #[test]
    fn test_datetime_rfc3339() {
        let json = r#"{"due": "2024-06-15T10:30:00Z"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.due,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_datetime_with_offset_normalizes_to_utc() {
        let json = r#"{"due": "2024-06-15T10:30:00-03:00"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.due,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 13, 30, 0).unwrap())
        );
    }

    #[test]
    fn test_datetime_bare_date_is_midnight_utc() {
        let json = r#"{"due": "2024-06-15"}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(
            result.due,
            Some(Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_datetime_empty_string_is_none() {
        let json = r#"{"due": ""}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.due, None);
    }

    #[test]
    fn test_datetime_null_is_none() {
        let json = r#"{"due": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.due, None);
    }

    #[test]
    fn test_datetime_invalid_is_error() {
        let json = r#"{"due": "not-a-date"}"#;
        let result: Result<TestStruct, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_null_absent_field() {
        let json = r#"{}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.category, None);
    }

    #[test]
    fn test_explicit_null_null_field() {
        let json = r#"{"category": null}"#;
        let result: TestStruct = serde_json::from_str(json).unwrap();
        assert_eq!(result.category, Some(None));
    }

    #[test]
    fn test_explicit_null_value_field() {
        let id = Uuid::nil();
        let json = format!(r#"{{"category": "{id}"}}"#);
        let result: TestStruct = serde_json::from_str(&json).unwrap();
        assert_eq!(result.category, Some(Some(id)));
    }
}
