use crate::ui::schema::FieldKind;

/// One placeable entry in the field palette. The list is fixed at compile
/// time and never mutated; `name` doubles as the default label of a newly
/// placed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub kind: FieldKind,
}

pub const FIELD_CATALOG: &[FieldDefinition] = &[
    FieldDefinition {
        id: "label",
        name: "ラベル",
        icon: "📝",
        kind: FieldKind::Label,
    },
    FieldDefinition {
        id: "text-single",
        name: "文字列(1行)",
        icon: "📄",
        kind: FieldKind::Text,
    },
    FieldDefinition {
        id: "text-multi",
        name: "文字列(複数行)",
        icon: "📋",
        kind: FieldKind::Textarea,
    },
    FieldDefinition {
        id: "number",
        name: "数値",
        icon: "🔢",
        kind: FieldKind::Number,
    },
    FieldDefinition {
        id: "date",
        name: "日付",
        icon: "📅",
        kind: FieldKind::Date,
    },
    FieldDefinition {
        id: "datetime",
        name: "日時",
        icon: "🕐",
        kind: FieldKind::DateTime,
    },
    FieldDefinition {
        id: "time",
        name: "時刻",
        icon: "⏰",
        kind: FieldKind::Time,
    },
    FieldDefinition {
        id: "radio",
        name: "ラジオボタン",
        icon: "🔘",
        kind: FieldKind::Radio,
    },
    FieldDefinition {
        id: "checkbox",
        name: "チェックボックス",
        icon: "☑️",
        kind: FieldKind::Checkbox,
    },
    FieldDefinition {
        id: "dropdown",
        name: "ドロップダウン",
        icon: "📌",
        kind: FieldKind::Select,
    },
    FieldDefinition {
        id: "multi-select",
        name: "複数選択",
        icon: "✅",
        kind: FieldKind::MultiSelect,
    },
    FieldDefinition {
        id: "file",
        name: "添付ファイル",
        icon: "📎",
        kind: FieldKind::File,
    },
    FieldDefinition {
        id: "link",
        name: "リンク",
        icon: "🔗",
        kind: FieldKind::Link,
    },
    FieldDefinition {
        id: "user",
        name: "ユーザー選択",
        icon: "👤",
        kind: FieldKind::User,
    },
    FieldDefinition {
        id: "org",
        name: "組織選択",
        icon: "🏢",
        kind: FieldKind::Organization,
    },
    FieldDefinition {
        id: "group",
        name: "グループ選択",
        icon: "👥",
        kind: FieldKind::Group,
    },
    FieldDefinition {
        id: "space",
        name: "スペース",
        icon: "⬜",
        kind: FieldKind::Space,
    },
    FieldDefinition {
        id: "divider",
        name: "罫線",
        icon: "➖",
        kind: FieldKind::Divider,
    },
    FieldDefinition {
        id: "group-field",
        name: "グループ",
        icon: "📦",
        kind: FieldKind::GroupField,
    },
    FieldDefinition {
        id: "table",
        name: "テーブル",
        icon: "📊",
        kind: FieldKind::Table,
    },
    FieldDefinition {
        id: "calc",
        name: "計算",
        icon: "🧮",
        kind: FieldKind::Calculation,
    },
    FieldDefinition {
        id: "record-number",
        name: "レコード番号",
        icon: "🔢",
        kind: FieldKind::RecordNumber,
    },
    FieldDefinition {
        id: "created-date",
        name: "作成日時",
        icon: "📆",
        kind: FieldKind::CreatedDate,
    },
    FieldDefinition {
        id: "updated-date",
        name: "更新日時",
        icon: "🔄",
        kind: FieldKind::UpdatedDate,
    },
    FieldDefinition {
        id: "creator",
        name: "作成者",
        icon: "✍️",
        kind: FieldKind::Creator,
    },
    FieldDefinition {
        id: "updater",
        name: "更新者",
        icon: "👤",
        kind: FieldKind::Updater,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: BTreeSet<&str> = FIELD_CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), FIELD_CATALOG.len());
    }

    #[test]
    fn catalog_carries_no_unknown_kind() {
        assert!(FIELD_CATALOG
            .iter()
            .all(|d| !matches!(d.kind, FieldKind::Unknown(_))));
    }

    #[test]
    fn palette_entries_keep_their_original_names() {
        let entry = FIELD_CATALOG
            .iter()
            .find(|d| d.id == "text-single")
            .expect("text entry should exist");
        assert_eq!(entry.kind, FieldKind::Text);
        assert_eq!(entry.name, "文字列(1行)");
    }
}
