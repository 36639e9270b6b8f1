//! Views over the JSON envelopes returned by the server.
//!
//! Admin endpoints answer with `{"response": {"status": 0, ...}}`. The raw
//! [`serde_json::Value`] is kept for json/yaml output; these types are only
//! used to read the fields the text renderer and exit codes need.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Single record as returned by the server.
pub type Record = Map<String, Value>;

fn default_status() -> i64 {
    1
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseBody {
    #[serde(default = "default_status")]
    pub status: i64,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub id: Option<Value>,

    #[serde(default)]
    pub setting: Option<Record>,

    #[serde(default)]
    pub settings: Option<Vec<Record>>,

    #[serde(default)]
    pub log: Option<Record>,

    #[serde(default)]
    pub logs: Option<Vec<Record>>,
}

impl Default for ResponseBody {
    fn default() -> Self {
        Self {
            status: default_status(),
            message: None,
            id: None,
            setting: None,
            settings: None,
            log: None,
            logs: None,
        }
    }
}

impl ApiResponse {
    /// Read the envelope out of a response value. Anything that does not
    /// match the expected shape reads as a failed response.
    pub fn from_value(value: &Value) -> Self {
        ApiResponse::deserialize(value).unwrap_or_default()
    }

    pub fn is_success(&self) -> bool {
        self.response.status == 0
    }

    pub fn status(&self) -> i64 {
        self.response.status
    }

    pub fn message(&self) -> &str {
        self.response.message.as_deref().unwrap_or("")
    }

    /// Identifier of a created record, rendered without JSON quoting.
    pub fn id(&self) -> String {
        match &self.response.id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Item payload under the given key (`setting` or `log`).
    pub fn item(&self, key: &str) -> Option<&Record> {
        match key {
            "log" => self.response.log.as_ref(),
            _ => self.response.setting.as_ref(),
        }
    }

    /// List payload under the given key (`settings` or `logs`).
    pub fn items(&self, key: &str) -> &[Record] {
        let items = match key {
            "logs" => self.response.logs.as_deref(),
            _ => self.response.settings.as_deref(),
        };
        items.unwrap_or(&[])
    }

    pub fn into_item(self, key: &str) -> Option<Record> {
        match key {
            "log" => self.response.log,
            _ => self.response.setting,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct HealthData {
    #[serde(default = "default_health_status")]
    pub status: String,

    #[serde(default = "default_timed_out")]
    pub timed_out: bool,
}

fn default_health_status() -> String {
    "unknown".to_string()
}

fn default_timed_out() -> bool {
    true
}

impl Default for HealthData {
    fn default() -> Self {
        Self {
            status: default_health_status(),
            timed_out: default_timed_out(),
        }
    }
}

/// Body of the public health endpoint: `{"data": {"status", "timed_out"}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthResponse {
    #[serde(default)]
    pub data: HealthData,
}

impl HealthResponse {
    pub fn from_value(value: &Value) -> Self {
        HealthResponse::deserialize(value).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_success_envelope() {
        let value = json!({"response": {"status": 0, "id": "abc123", "message": ""}});
        let response = ApiResponse::from_value(&value);
        assert!(response.is_success());
        assert_eq!(response.id(), "abc123");
    }

    #[test]
    fn test_missing_status_is_failure() {
        let response = ApiResponse::from_value(&json!({"response": {}}));
        assert!(!response.is_success());
        assert_eq!(response.status(), 1);

        let response = ApiResponse::from_value(&json!({}));
        assert_eq!(response.status(), 1);
        assert_eq!(response.message(), "");
    }

    #[test]
    fn test_unexpected_shape_reads_as_failure() {
        let response = ApiResponse::from_value(&json!(["not", "an", "object"]));
        assert!(!response.is_success());
    }

    #[test]
    fn test_numeric_id() {
        let response = ApiResponse::from_value(&json!({"response": {"status": 0, "id": 42}}));
        assert_eq!(response.id(), "42");
    }

    #[test]
    fn test_item_and_list_keys() {
        let value = json!({"response": {
            "status": 0,
            "setting": {"id": "s1"},
            "logs": [{"id": "l1"}, {"id": "l2"}]
        }});
        let response = ApiResponse::from_value(&value);
        assert_eq!(response.item("setting").unwrap()["id"], "s1");
        assert!(response.item("log").is_none());
        assert_eq!(response.items("logs").len(), 2);
        assert!(response.items("settings").is_empty());
    }

    #[test]
    fn test_health_defaults() {
        let health = HealthResponse::from_value(&json!({}));
        assert_eq!(health.data.status, "unknown");
        assert!(health.data.timed_out);

        let health =
            HealthResponse::from_value(&json!({"data": {"status": "green", "timed_out": false}}));
        assert_eq!(health.data.status, "green");
        assert!(!health.data.timed_out);
    }
}
