use crate::theme::Theme;
use crate::ui::event::CanvasAction;
use crate::ui::schema::{control_template, ControlTemplate, FieldComponent};
use eframe::egui::{self, RichText};

/// Renders placed field components into egui widgets. Interactions are
/// reported through the `emit` closure; the registry never touches editor
/// state itself.
pub struct FieldRegistry;

impl FieldRegistry {
    pub fn new() -> Self {
        Self
    }

    pub fn render_field(
        &self,
        component: &FieldComponent,
        selected: bool,
        rename_buffer: &mut String,
        ui: &mut egui::Ui,
        theme: &Theme,
        emit: &mut dyn FnMut(CanvasAction),
    ) {
        ui.horizontal(|ui| {
            self.render_title(component, selected, rename_buffer, ui, theme, emit);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                let delete = egui::Button::new(
                    RichText::new("×").color(theme.danger).size(13.0),
                )
                .fill(theme.surface_3)
                .stroke(theme.subtle_button_stroke())
                .corner_radius(egui::CornerRadius::same(theme.radius_8));
                if ui.add(delete).clicked() {
                    emit(CanvasAction::Delete {
                        component_id: component.id.clone(),
                    });
                }
            });
        });

        ui.add_space(theme.spacing_4);
        match control_template(&component.kind) {
            ControlTemplate::Heading => {}
            ControlTemplate::TextInput => self.inert_input(ui, "入力してください", false),
            ControlTemplate::MultilineInput => self.inert_input(ui, "入力してください", true),
            ControlTemplate::NumberInput => self.inert_input(ui, "0", false),
            ControlTemplate::DatePicker => self.inert_input(ui, "yyyy-MM-dd", false),
            ControlTemplate::DateTimePicker => self.inert_input(ui, "yyyy-MM-dd HH:mm", false),
            ControlTemplate::TimePicker => self.inert_input(ui, "HH:mm", false),
            ControlTemplate::Dropdown => {
                egui::ComboBox::from_id_salt(component.id.as_str())
                    .selected_text("----")
                    .show_ui(ui, |ui| {
                        ui.label(RichText::new("----").color(theme.text_muted).size(13.0));
                    });
            }
            ControlTemplate::Spacer => {
                ui.add_space(theme.spacing_24);
            }
            ControlTemplate::Rule => {
                ui.separator();
            }
            ControlTemplate::SystemStamp => {
                ui.label(
                    RichText::new("自動で設定されます")
                        .color(theme.text_muted)
                        .size(12.0)
                        .italics(),
                );
            }
            ControlTemplate::Placeholder => {
                ui.label(
                    RichText::new(format!("{} フィールド", component.kind.as_str()))
                        .color(theme.text_muted)
                        .size(12.0),
                );
            }
        }
    }

    fn render_title(
        &self,
        component: &FieldComponent,
        selected: bool,
        rename_buffer: &mut String,
        ui: &mut egui::Ui,
        theme: &Theme,
        emit: &mut dyn FnMut(CanvasAction),
    ) {
        if selected && component.kind.supports_inline_rename() {
            let response = ui.add(
                egui::TextEdit::singleline(rename_buffer)
                    .desired_width(220.0)
                    .hint_text("ラベル"),
            );
            if response.changed() {
                emit(CanvasAction::Rename {
                    component_id: component.id.clone(),
                    label: rename_buffer.clone(),
                });
            }
            return;
        }

        let text = match control_template(&component.kind) {
            ControlTemplate::Heading => RichText::new(&component.label)
                .color(theme.text_primary)
                .size(15.0)
                .strong(),
            ControlTemplate::Spacer => {
                RichText::new("スペース").color(theme.text_muted).size(12.0)
            }
            ControlTemplate::Rule => RichText::new("罫線").color(theme.text_muted).size(12.0),
            _ => RichText::new(&component.label)
                .color(theme.text_muted)
                .size(12.0),
        };

        let response = ui.add(egui::Label::new(text).sense(egui::Sense::click()));
        if response.clicked() {
            emit(CanvasAction::Select {
                component_id: component.id.clone(),
            });
        }
    }

    fn inert_input(&self, ui: &mut egui::Ui, hint: &str, multiline: bool) {
        // preview controls stay empty and inert: a fresh buffer each frame
        let mut preview = String::new();
        let edit = if multiline {
            egui::TextEdit::multiline(&mut preview).desired_rows(3)
        } else {
            egui::TextEdit::singleline(&mut preview)
        };
        ui.add_enabled(false, edit.desired_width(f32::INFINITY).hint_text(hint));
    }
}
