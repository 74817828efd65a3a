use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Label,
    Text,
    Textarea,
    Number,
    Date,
    DateTime,
    Time,
    Radio,
    Checkbox,
    Select,
    MultiSelect,
    File,
    Link,
    User,
    Organization,
    Group,
    Space,
    Divider,
    GroupField,
    Table,
    Calculation,
    RecordNumber,
    CreatedDate,
    UpdatedDate,
    Creator,
    Updater,
    Unknown(String),
}

impl FieldKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Label => "label",
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Select => "select",
            Self::MultiSelect => "multiselect",
            Self::File => "file",
            Self::Link => "link",
            Self::User => "user",
            Self::Organization => "organization",
            Self::Group => "group",
            Self::Space => "space",
            Self::Divider => "divider",
            Self::GroupField => "group-field",
            Self::Table => "table",
            Self::Calculation => "calculation",
            Self::RecordNumber => "record-number",
            Self::CreatedDate => "created-date",
            Self::UpdatedDate => "updated-date",
            Self::Creator => "creator",
            Self::Updater => "updater",
            Self::Unknown(kind) => kind.as_str(),
        }
    }

    /// System fields are filled by the platform, never by the user.
    pub fn is_system(&self) -> bool {
        matches!(
            self,
            Self::RecordNumber
                | Self::CreatedDate
                | Self::UpdatedDate
                | Self::Creator
                | Self::Updater
        )
    }

    pub fn supports_inline_rename(&self) -> bool {
        matches!(self, Self::Label)
    }
}

impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "label" => Self::Label,
            "text" => Self::Text,
            "textarea" => Self::Textarea,
            "number" => Self::Number,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "time" => Self::Time,
            "radio" => Self::Radio,
            "checkbox" => Self::Checkbox,
            "select" => Self::Select,
            "multiselect" => Self::MultiSelect,
            "file" => Self::File,
            "link" => Self::Link,
            "user" => Self::User,
            "organization" => Self::Organization,
            "group" => Self::Group,
            "space" => Self::Space,
            "divider" => Self::Divider,
            "group-field" => Self::GroupField,
            "table" => Self::Table,
            "calculation" => Self::Calculation,
            "record-number" => Self::RecordNumber,
            "created-date" => Self::CreatedDate,
            "updated-date" => Self::UpdatedDate,
            "creator" => Self::Creator,
            "updater" => Self::Updater,
            _ => Self::Unknown(raw),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldComponent {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Visual control class a field renders as on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlTemplate {
    TextInput,
    MultilineInput,
    NumberInput,
    DatePicker,
    DateTimePicker,
    TimePicker,
    Dropdown,
    Heading,
    Spacer,
    Rule,
    SystemStamp,
    Placeholder,
}

/// Total over the kind catalog; anything unrecognized falls back to a
/// generic placeholder instead of failing.
pub fn control_template(kind: &FieldKind) -> ControlTemplate {
    match kind {
        FieldKind::Label => ControlTemplate::Heading,
        FieldKind::Text => ControlTemplate::TextInput,
        FieldKind::Textarea => ControlTemplate::MultilineInput,
        FieldKind::Number => ControlTemplate::NumberInput,
        FieldKind::Date => ControlTemplate::DatePicker,
        FieldKind::DateTime => ControlTemplate::DateTimePicker,
        FieldKind::Time => ControlTemplate::TimePicker,
        FieldKind::Select => ControlTemplate::Dropdown,
        FieldKind::Space => ControlTemplate::Spacer,
        FieldKind::Divider => ControlTemplate::Rule,
        kind if kind.is_system() => ControlTemplate::SystemStamp,
        _ => ControlTemplate::Placeholder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_wire_tag() {
        let kinds = [
            FieldKind::Text,
            FieldKind::GroupField,
            FieldKind::CreatedDate,
            FieldKind::MultiSelect,
        ];
        for kind in kinds {
            let raw = serde_json::to_string(&kind).expect("kind should serialize");
            let back: FieldKind = serde_json::from_str(&raw).expect("kind should deserialize");
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn unrecognized_kind_survives_round_trip() {
        let back: FieldKind =
            serde_json::from_str("\"hologram\"").expect("unknown kind should deserialize");
        assert_eq!(back, FieldKind::Unknown("hologram".to_string()));
        assert_eq!(
            serde_json::to_string(&back).expect("unknown kind should serialize"),
            "\"hologram\""
        );
    }

    #[test]
    fn component_serializes_with_original_wire_keys() {
        let component = FieldComponent {
            id: "text-1".to_string(),
            kind: FieldKind::Text,
            label: "会社名".to_string(),
            value: Some(String::new()),
        };
        let raw = serde_json::to_value(&component).expect("component should serialize");
        assert_eq!(raw["type"], "text");
        assert_eq!(raw["label"], "会社名");
        assert_eq!(raw["value"], "");
    }

    #[test]
    fn absent_value_is_omitted_and_tolerated() {
        let component: FieldComponent =
            serde_json::from_str(r#"{"id":"x-1","type":"date","label":"日付"}"#)
                .expect("component without value should deserialize");
        assert_eq!(component.value, None);
        let raw = serde_json::to_string(&component).expect("component should serialize");
        assert!(!raw.contains("value"));
    }

    #[test]
    fn control_template_is_total_over_the_catalog() {
        for definition in crate::ui::catalog::FIELD_CATALOG {
            // must not panic, whatever the kind
            let _ = control_template(&definition.kind);
        }
        assert_eq!(
            control_template(&FieldKind::Unknown("hologram".to_string())),
            ControlTemplate::Placeholder
        );
        assert_eq!(
            control_template(&FieldKind::Table),
            ControlTemplate::Placeholder
        );
    }

    #[test]
    fn system_kinds_render_as_stamps() {
        for kind in [
            FieldKind::RecordNumber,
            FieldKind::CreatedDate,
            FieldKind::UpdatedDate,
            FieldKind::Creator,
            FieldKind::Updater,
        ] {
            assert!(kind.is_system());
            assert_eq!(control_template(&kind), ControlTemplate::SystemStamp);
        }
        assert!(!FieldKind::Text.is_system());
    }
}
