use crate::ui::catalog::FieldDefinition;
use crate::ui::schema::FieldComponent;

/// In-memory state of the form canvas: the ordered component list plus the
/// selection and drag pointers. Selection and drag live here, not in the
/// rendering layer, so every operation is observable without a UI attached.
#[derive(Debug, Default)]
pub struct CanvasEditor {
    components: Vec<FieldComponent>,
    selected: Option<String>,
    drag_from: Option<usize>,
    next_seq: u64,
}

impl CanvasEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn components(&self) -> &[FieldComponent] {
        &self.components
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn drag_from(&self) -> Option<usize> {
        self.drag_from
    }

    /// Appends a new component for the given catalog entry and returns its
    /// id. Ids come from a monotonic counter, never the wall clock, so rapid
    /// successive adds cannot collide.
    pub fn add(&mut self, definition: &FieldDefinition) -> String {
        self.next_seq += 1;
        let id = format!("{}-{}", definition.kind.as_str(), self.next_seq);
        self.components.push(FieldComponent {
            id: id.clone(),
            kind: definition.kind.clone(),
            label: definition.name.to_string(),
            value: Some(String::new()),
        });
        id
    }

    /// Removes the component with the given id; clears the selection if it
    /// pointed at the removed component. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) {
        self.components.retain(|component| component.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
    }

    pub fn select(&mut self, id: &str) {
        if self.components.iter().any(|component| component.id == id) {
            self.selected = Some(id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Replaces the label of the component with the given id. No content
    /// validation; the empty string is allowed. Absent ids are a no-op.
    pub fn relabel(&mut self, id: &str, new_label: impl Into<String>) {
        if let Some(component) = self
            .components
            .iter_mut()
            .find(|component| component.id == id)
        {
            component.label = new_label.into();
        }
    }

    pub fn begin_drag(&mut self, index: usize) {
        if index < self.components.len() {
            self.drag_from = Some(index);
        }
    }

    pub fn cancel_drag(&mut self) {
        self.drag_from = None;
    }

    /// Completes an in-progress drag by moving the dragged component to
    /// `to`. A no-op when no drag is in progress; always clears the drag
    /// pointer.
    pub fn drop_on(&mut self, to: usize) {
        if let Some(from) = self.drag_from.take() {
            self.reorder(from, to);
        }
    }

    /// Removes the element at `from` and reinserts it at `to`, shifting the
    /// elements in between. Out-of-range or identical indices are a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.components.len() {
            return;
        }
        let component = self.components.remove(from);
        let to = to.min(self.components.len());
        self.components.insert(to, component);
    }

    /// Replaces the canvas content from a persisted record. Selection and
    /// drag state reset; the id counter resumes strictly above every numeric
    /// suffix already present, so legacy timestamp-style ids cannot collide
    /// with freshly generated ones.
    pub fn load(&mut self, components: Vec<FieldComponent>) {
        let max_seq = components
            .iter()
            .filter_map(|component| id_sequence(&component.id))
            .max()
            .unwrap_or(0);
        self.next_seq = self.next_seq.max(max_seq);
        self.components = components;
        self.selected = None;
        self.drag_from = None;
    }

    pub fn snapshot(&self) -> Vec<FieldComponent> {
        self.components.clone()
    }
}

fn id_sequence(id: &str) -> Option<u64> {
    id.rsplit('-').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::{FieldDefinition, FIELD_CATALOG};
    use crate::ui::schema::{FieldComponent, FieldKind};

    fn palette_entry(id: &str) -> &'static FieldDefinition {
        FIELD_CATALOG
            .iter()
            .find(|definition| definition.id == id)
            .expect("palette entry should exist")
    }

    fn text_definition() -> &'static FieldDefinition {
        palette_entry("text-single")
    }

    fn editor_with(ids: &[&str]) -> CanvasEditor {
        let mut editor = CanvasEditor::new();
        editor.load(
            ids.iter()
                .map(|id| FieldComponent {
                    id: (*id).to_string(),
                    kind: FieldKind::Text,
                    label: (*id).to_string(),
                    value: None,
                })
                .collect(),
        );
        editor
    }

    #[test]
    fn add_then_delete_restores_prior_sequence() {
        let mut editor = CanvasEditor::new();
        editor.add(text_definition());
        let before: Vec<String> = editor.components().iter().map(|c| c.id.clone()).collect();

        let added = editor.add(palette_entry("number"));
        editor.delete(&added);

        let after: Vec<String> = editor.components().iter().map(|c| c.id.clone()).collect();
        assert_eq!(before, after);

        // the removed id never reappears
        let next = editor.add(text_definition());
        assert_ne!(next, added);
    }

    #[test]
    fn rapid_adds_of_the_same_kind_get_distinct_ids() {
        let mut editor = CanvasEditor::new();
        let first = editor.add(text_definition());
        let second = editor.add(text_definition());
        assert_ne!(first, second);
        assert_eq!(first, "text-1");
        assert_eq!(second, "text-2");
    }

    #[test]
    fn added_component_takes_catalog_name_as_label() {
        let mut editor = CanvasEditor::new();
        let id = editor.add(text_definition());
        let component = &editor.components()[0];
        assert_eq!(component.id, id);
        assert_eq!(component.kind, FieldKind::Text);
        assert_eq!(component.label, "文字列(1行)");
        assert_eq!(component.value.as_deref(), Some(""));
    }

    #[test]
    fn delete_clears_selection_of_the_removed_component() {
        let mut editor = CanvasEditor::new();
        let id = editor.add(text_definition());
        editor.select(&id);
        assert_eq!(editor.selected(), Some(id.as_str()));

        editor.delete(&id);
        assert_eq!(editor.selected(), None);
        assert!(editor.is_empty());
    }

    #[test]
    fn delete_of_absent_id_is_a_no_op() {
        let mut editor = editor_with(&["a-1", "b-2"]);
        editor.delete("missing");
        assert_eq!(editor.components().len(), 2);
    }

    #[test]
    fn selecting_an_absent_id_leaves_selection_unchanged() {
        let mut editor = editor_with(&["a-1"]);
        editor.select("a-1");
        editor.select("missing");
        assert_eq!(editor.selected(), Some("a-1"));
    }

    #[test]
    fn relabel_replaces_label_only() {
        let mut editor = CanvasEditor::new();
        let id = editor.add(text_definition());
        editor.relabel(&id, "取引先名");
        let component = &editor.components()[0];
        assert_eq!(component.label, "取引先名");
        assert_eq!(component.kind, FieldKind::Text);

        editor.relabel(&id, "");
        assert_eq!(editor.components()[0].label, "");
    }

    #[test]
    fn reorder_then_inverse_restores_original_order() {
        let cases = [(0, 2), (2, 0), (0, 1), (1, 2)];
        for (i, j) in cases {
            let mut editor = editor_with(&["a-1", "b-2", "c-3"]);
            let original: Vec<String> =
                editor.components().iter().map(|c| c.id.clone()).collect();
            editor.reorder(i, j);
            editor.reorder(j, i);
            let restored: Vec<String> =
                editor.components().iter().map(|c| c.id.clone()).collect();
            assert_eq!(original, restored, "reorder({i},{j}) inverse failed");
        }
    }

    #[test]
    fn reorder_moves_element_and_shifts_the_rest() {
        let mut editor = editor_with(&["a-1", "b-2", "c-3"]);
        editor.reorder(0, 2);
        let order: Vec<&str> = editor.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["b-2", "c-3", "a-1"]);
    }

    #[test]
    fn reorder_with_identical_indices_is_a_no_op() {
        let mut editor = editor_with(&["a-1", "b-2"]);
        editor.reorder(1, 1);
        let order: Vec<&str> = editor.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["a-1", "b-2"]);
    }

    #[test]
    fn drop_without_a_drag_in_progress_is_a_no_op() {
        let mut editor = editor_with(&["a-1", "b-2"]);
        editor.drop_on(0);
        let order: Vec<&str> = editor.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["a-1", "b-2"]);
    }

    #[test]
    fn drag_lifecycle_moves_the_dragged_row() {
        let mut editor = editor_with(&["a-1", "b-2", "c-3"]);
        editor.begin_drag(2);
        assert_eq!(editor.drag_from(), Some(2));
        editor.drop_on(0);
        assert_eq!(editor.drag_from(), None);
        let order: Vec<&str> = editor.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["c-3", "a-1", "b-2"]);
    }

    #[test]
    fn cancelled_drag_changes_nothing() {
        let mut editor = editor_with(&["a-1", "b-2"]);
        editor.begin_drag(0);
        editor.cancel_drag();
        editor.drop_on(1);
        let order: Vec<&str> = editor.components().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["a-1", "b-2"]);
    }

    #[test]
    fn id_counter_resumes_above_persisted_suffixes() {
        let mut editor = CanvasEditor::new();
        editor.load(vec![FieldComponent {
            id: "text-1722929384739".to_string(),
            kind: FieldKind::Text,
            label: "旧データ".to_string(),
            value: Some(String::new()),
        }]);

        let id = editor.add(text_definition());
        assert_eq!(id, "text-1722929384740");
    }

    #[test]
    fn load_resets_selection_and_drag_state() {
        let mut editor = editor_with(&["a-1", "b-2"]);
        editor.select("a-1");
        editor.begin_drag(1);
        editor.load(Vec::new());
        assert_eq!(editor.selected(), None);
        assert_eq!(editor.drag_from(), None);
        assert!(editor.is_empty());
    }
}
