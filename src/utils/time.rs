//! Timestamp helpers for epoch-millisecond fields.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Placeholder shown for absent values.
pub const MISSING: &str = "-";

/// Current time in milliseconds since the Unix epoch (UTC).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render epoch milliseconds as `YYYY-MM-DDTHH:MM:SSZ`.
///
/// Accepts a JSON number or a numeric string. Absent, null or unparseable
/// values render as `-`.
pub fn to_utc_iso8601(value: Option<&Value>) -> String {
    let millis = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    millis
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_else(|| MISSING.to_string())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_epoch_zero() {
        assert_eq!(to_utc_iso8601(Some(&json!(0))), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_known_timestamp() {
        assert_eq!(
            to_utc_iso8601(Some(&json!(1_700_000_000_000_i64))),
            "2023-11-14T22:13:20Z"
        );
    }

    #[test]
    fn test_numeric_string() {
        assert_eq!(
            to_utc_iso8601(Some(&json!("1700000000000"))),
            "2023-11-14T22:13:20Z"
        );
    }

    #[test]
    fn test_missing_values() {
        assert_eq!(to_utc_iso8601(None), "-");
        assert_eq!(to_utc_iso8601(Some(&Value::Null)), "-");
        assert_eq!(to_utc_iso8601(Some(&json!("yesterday"))), "-");
    }

    #[test]
    fn test_now_millis_is_recent() {
        // 2020-01-01T00:00:00Z
        assert!(now_millis() > 1_577_836_800_000);
    }
}
