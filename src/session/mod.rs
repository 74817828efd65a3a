use crate::ui::schema::FieldComponent;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod store;

/// One persisted form definition. Field names follow the stored wire format
/// (`formComponents`, `createdAt`, ...) so existing data round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub form_components: Vec<FieldComponent>,
    #[serde(default = "empty_settings")]
    pub settings: Value,
    pub created_at: String,
    pub updated_at: String,
}

impl AppRecord {
    /// Creates an unsaved record with a fresh `app-<millis>` id and both
    /// timestamps set to now.
    pub fn new(name: impl Into<String>, form_components: Vec<FieldComponent>) -> Self {
        let now = Utc::now();
        let stamp = stamp(now);
        Self {
            id: format!("app-{}", now.timestamp_millis()),
            name: name.into(),
            form_components,
            settings: empty_settings(),
            created_at: stamp.clone(),
            updated_at: stamp,
        }
    }
}

/// `settings` is reserved: always an empty object, never read or written.
pub fn empty_settings() -> Value {
    Value::Object(Map::new())
}

pub fn now_stamp() -> String {
    stamp(Utc::now())
}

// matches the stored format exactly: millisecond precision, `Z` suffix
fn stamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::schema::{FieldComponent, FieldKind};

    #[test]
    fn new_record_generates_app_prefixed_id() {
        let record = AppRecord::new("顧客管理", Vec::new());
        assert!(record.id.starts_with("app-"));
        assert_eq!(record.created_at, record.updated_at);
        assert_eq!(record.settings, empty_settings());
    }

    #[test]
    fn record_serializes_with_original_wire_keys() {
        let record = AppRecord::new(
            "顧客管理",
            vec![FieldComponent {
                id: "text-1".to_string(),
                kind: FieldKind::Text,
                label: "会社名".to_string(),
                value: Some(String::new()),
            }],
        );
        let raw = serde_json::to_string(&record).expect("record should serialize");
        assert!(raw.contains("\"formComponents\""));
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"updatedAt\""));
        assert!(raw.contains("\"settings\":{}"));
        assert!(!raw.contains("form_components"));
    }

    #[test]
    fn record_without_components_or_settings_still_parses() {
        let raw = r#"{
          "id": "app-1",
          "name": "顧客管理",
          "createdAt": "2024-08-06T00:00:00.000Z",
          "updatedAt": "2024-08-06T00:00:00.000Z"
        }"#;
        let record: AppRecord = serde_json::from_str(raw).expect("record should parse");
        assert!(record.form_components.is_empty());
        assert_eq!(record.settings, empty_settings());
    }
}
