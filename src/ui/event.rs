/// Discrete canvas interactions emitted by the rendering layer. The shell
/// applies them to the editor after the frame is drawn, so rendering never
/// mutates editor state mid-pass.
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasAction {
    Select { component_id: String },
    Delete { component_id: String },
    Rename { component_id: String, label: String },
    DragStart { index: usize },
    Drop { index: usize },
    DragCancel,
}

impl CanvasAction {
    pub fn to_log_line(&self) -> String {
        match self {
            Self::Select { component_id } => format!("field selected id={component_id}"),
            Self::Delete { component_id } => format!("field deleted id={component_id}"),
            Self::Rename {
                component_id,
                label,
            } => format!("field renamed id={component_id} label={label}"),
            Self::DragStart { index } => format!("drag started index={index}"),
            Self::Drop { index } => format!("drag dropped index={index}"),
            Self::DragCancel => "drag cancelled".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CanvasAction;

    #[test]
    fn log_lines_name_the_touched_component() {
        let action = CanvasAction::Rename {
            component_id: "text-3".to_string(),
            label: "取引先名".to_string(),
        };
        assert_eq!(action.to_log_line(), "field renamed id=text-3 label=取引先名");
    }
}
