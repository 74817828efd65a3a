use crate::session::store::AppStore;
use crate::session::AppRecord;
use crate::theme::Theme;
use crate::ui::canvas::CanvasEditor;
use crate::ui::catalog::FIELD_CATALOG;
use crate::ui::event::CanvasAction;
use crate::ui::registry::FieldRegistry;
use chrono::Utc;
use eframe::egui::{self, RichText, ScrollArea};

const DEFAULT_APP_NAME: &str = "新しいアプリ";

enum Notice {
    Info(String),
    Rejected(String),
}

pub struct FormbenchApp {
    store: AppStore,
    registry: FieldRegistry,
    theme: Theme,
    editor: CanvasEditor,
    saved_apps: Vec<AppRecord>,
    current: Option<AppRecord>,
    name_buffer: String,
    rename_buffer: String,
    notice: Option<Notice>,
    diagnostics_log: Vec<String>,
}

impl FormbenchApp {
    pub fn new(store: AppStore) -> Self {
        let (saved_apps, warnings) = store.list();
        let mut app = Self {
            store,
            registry: FieldRegistry::new(),
            theme: Theme::default(),
            editor: CanvasEditor::new(),
            saved_apps,
            current: None,
            name_buffer: DEFAULT_APP_NAME.to_string(),
            rename_buffer: String::new(),
            notice: None,
            diagnostics_log: Vec::new(),
        };

        for warning in warnings {
            log::warn!("{warning}");
            app.log_diagnostic(format!("store warning: {warning}"));
        }

        app
    }

    fn timestamp() -> String {
        Utc::now().format("%H:%M:%S").to_string()
    }

    fn log_diagnostic(&mut self, message: impl Into<String>) {
        self.diagnostics_log
            .push(format!("[{}] {}", Self::timestamp(), message.into()));
    }

    fn refresh_saved_apps(&mut self) {
        let (saved_apps, warnings) = self.store.list();
        self.saved_apps = saved_apps;
        for warning in warnings {
            log::warn!("{warning}");
            self.log_diagnostic(format!("store warning: {warning}"));
        }
    }

    fn new_form(&mut self) {
        self.editor = CanvasEditor::new();
        self.current = None;
        self.name_buffer = DEFAULT_APP_NAME.to_string();
        self.rename_buffer.clear();
        self.notice = None;
        self.log_diagnostic("started a new form");
    }

    fn open_app(&mut self, app_id: &str) {
        match self.store.get(app_id) {
            Some(record) => {
                self.name_buffer = record.name.clone();
                self.editor.load(record.form_components.clone());
                self.current = Some(record);
                self.rename_buffer.clear();
                self.notice = None;
                self.log_diagnostic(format!("opened app {app_id}"));
            }
            None => {
                self.notice = Some(Notice::Rejected("アプリが見つかりません".to_string()));
                self.log_diagnostic(format!("app {app_id} not found"));
            }
        }
    }

    fn delete_app(&mut self, app_id: &str) {
        match self.store.delete(app_id) {
            Ok(()) => {
                if self.current.as_ref().is_some_and(|record| record.id == app_id) {
                    self.current = None;
                }
                self.log_diagnostic(format!("deleted app {app_id}"));
            }
            Err(err) => {
                log::warn!("failed to delete app {app_id}: {err}");
                self.log_diagnostic(format!("failed to delete app {app_id}: {err}"));
            }
        }
        self.refresh_saved_apps();
    }

    /// Persists the current form. Publishing an empty form is rejected with
    /// a notice and no state change.
    fn persist(&mut self, publish: bool) {
        if publish && self.editor.is_empty() {
            self.notice = Some(Notice::Rejected(
                "フォームにフィールドがありません。フィールドを追加してください".to_string(),
            ));
            return;
        }

        let name = {
            let trimmed = self.name_buffer.trim();
            if trimmed.is_empty() {
                DEFAULT_APP_NAME.to_string()
            } else {
                trimmed.to_string()
            }
        };

        let record = match &self.current {
            Some(existing) => {
                let mut record = existing.clone();
                record.name = name;
                record.form_components = self.editor.snapshot();
                record
            }
            None => AppRecord::new(name, self.editor.snapshot()),
        };

        match self.store.save(&record) {
            Ok(stored) => {
                self.log_diagnostic(format!("saved app {}", stored.id));
                self.current = Some(stored);
                self.refresh_saved_apps();
                self.notice = Some(Notice::Info(if publish {
                    "アプリを公開しました".to_string()
                } else {
                    "保存しました".to_string()
                }));
            }
            Err(err) => {
                log::warn!("failed to persist app: {err}");
                self.log_diagnostic(format!("failed to persist app: {err}"));
                self.notice = Some(Notice::Rejected("保存に失敗しました".to_string()));
            }
        }
    }

    fn apply_canvas_action(&mut self, action: CanvasAction) {
        log::debug!("{}", action.to_log_line());
        match action {
            CanvasAction::Select { component_id } => {
                if let Some(component) = self
                    .editor
                    .components()
                    .iter()
                    .find(|component| component.id == component_id)
                {
                    self.rename_buffer = component.label.clone();
                }
                self.editor.select(&component_id);
            }
            CanvasAction::Delete { component_id } => self.editor.delete(&component_id),
            CanvasAction::Rename {
                component_id,
                label,
            } => self.editor.relabel(&component_id, label),
            CanvasAction::DragStart { index } => self.editor.begin_drag(index),
            CanvasAction::Drop { index } => self.editor.drop_on(index),
            CanvasAction::DragCancel => self.editor.cancel_drag(),
        }
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("Formbench");
                ui.separator();
                ui.label(RichText::new("アプリ名").color(self.theme.text_muted).size(12.0));
                ui.add(
                    egui::TextEdit::singleline(&mut self.name_buffer)
                        .desired_width(220.0)
                        .hint_text(DEFAULT_APP_NAME),
                );
                ui.separator();
                if ui.button("新規作成").clicked() {
                    self.new_form();
                }
                if ui.button("保存").clicked() {
                    self.persist(false);
                }
                let publish = egui::Button::new(
                    RichText::new("アプリを公開")
                        .color(self.theme.text_on_accent)
                        .size(13.0),
                )
                .fill(self.theme.accent_primary)
                .stroke(self.theme.primary_button_stroke())
                .corner_radius(egui::CornerRadius::same(self.theme.radius_8))
                .min_size(egui::vec2(0.0, self.theme.button_height));
                if ui.add(publish).clicked() {
                    self.persist(true);
                }
            });
        });
    }

    fn render_left_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("palette_panel")
            .resizable(true)
            .show(ctx, |ui| {
                ui.heading("コンポーネント");
                ScrollArea::vertical()
                    .id_salt("field_palette")
                    .max_height(ui.available_height() * 0.5)
                    .show(ui, |ui| {
                        for definition in FIELD_CATALOG {
                            let entry = format!("{} {}", definition.icon, definition.name);
                            if ui.button(entry).clicked() {
                                let id = self.editor.add(definition);
                                self.log_diagnostic(format!("added field {id}"));
                            }
                        }
                    });

                ui.separator();
                ui.strong("保存済みアプリ");
                let mut clicked_open: Option<String> = None;
                let mut clicked_delete: Option<String> = None;
                ScrollArea::vertical()
                    .id_salt("saved_apps")
                    .show(ui, |ui| {
                        if self.saved_apps.is_empty() {
                            ui.label(
                                RichText::new("保存済みのアプリはありません")
                                    .color(self.theme.text_muted)
                                    .size(12.0),
                            );
                        }
                        for record in &self.saved_apps {
                            ui.horizontal(|ui| {
                                if ui.button(record.name.as_str()).clicked() {
                                    clicked_open = Some(record.id.clone());
                                }
                                if ui.small_button("削除").clicked() {
                                    clicked_delete = Some(record.id.clone());
                                }
                            });
                            ui.label(
                                RichText::new(record.updated_at.as_str())
                                    .color(self.theme.text_muted)
                                    .size(10.0),
                            );
                        }
                    });

                if let Some(app_id) = clicked_open {
                    self.open_app(&app_id);
                }
                if let Some(app_id) = clicked_delete {
                    self.delete_app(&app_id);
                }
            });
    }

    fn render_canvas_panel(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.editor.clear_selection();
            self.editor.cancel_drag();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("フォーム");
                if let Some(notice) = &self.notice {
                    let (text, color) = match notice {
                        Notice::Info(text) => (text, self.theme.success),
                        Notice::Rejected(text) => (text, self.theme.warning),
                    };
                    ui.label(RichText::new(text).color(color));
                }
            });
            ui.separator();

            let canvas_height = (ui.available_height() - 140.0).max(120.0);
            let mut actions: Vec<CanvasAction> = Vec::new();
            ScrollArea::vertical()
                .id_salt("form_canvas")
                .max_height(canvas_height)
                .show(ui, |ui| {
                    if self.editor.is_empty() {
                        ui.label(
                            RichText::new(
                                "左側のコンポーネントをクリックして、フォームに追加してください",
                            )
                            .color(self.theme.text_muted),
                        );
                        return;
                    }

                    let components = self.editor.snapshot();
                    let selected_id = self.editor.selected().map(str::to_string);
                    let drag_from = self.editor.drag_from();
                    let mut row_rects: Vec<egui::Rect> = Vec::with_capacity(components.len());

                    for (index, component) in components.iter().enumerate() {
                        let is_selected =
                            selected_id.as_deref() == Some(component.id.as_str());
                        let frame = if drag_from == Some(index) {
                            self.theme.dragged_card_frame()
                        } else if is_selected {
                            self.theme.selected_card_frame()
                        } else {
                            self.theme.card_frame()
                        };

                        let inner = frame.show(ui, |ui| {
                            ui.horizontal(|ui| {
                                let handle = ui.add(
                                    egui::Label::new(
                                        RichText::new("⠿")
                                            .color(self.theme.text_muted)
                                            .size(14.0),
                                    )
                                    .sense(egui::Sense::drag()),
                                );
                                if handle.drag_started() {
                                    actions.push(CanvasAction::DragStart { index });
                                }
                                ui.vertical(|ui| {
                                    self.registry.render_field(
                                        component,
                                        is_selected,
                                        &mut self.rename_buffer,
                                        ui,
                                        &self.theme,
                                        &mut |action| actions.push(action),
                                    );
                                });
                            });
                        });
                        row_rects.push(inner.response.rect);
                        ui.add_space(self.theme.spacing_8);
                    }

                    // a drag started in an earlier frame ends on pointer release
                    if drag_from.is_some() && ui.input(|i| i.pointer.any_released()) {
                        match ui.input(|i| i.pointer.interact_pos()) {
                            Some(pos) if !row_rects.is_empty() => {
                                let to = row_rects
                                    .iter()
                                    .position(|rect| pos.y < rect.bottom())
                                    .unwrap_or(row_rects.len() - 1);
                                actions.push(CanvasAction::Drop { index: to });
                            }
                            _ => actions.push(CanvasAction::DragCancel),
                        }
                    }
                });

            for action in actions {
                self.apply_canvas_action(action);
            }

            ui.separator();
            egui::CollapsingHeader::new("Diagnostics")
                .default_open(false)
                .show(ui, |ui| {
                    ScrollArea::vertical()
                        .id_salt("diagnostics_log")
                        .max_height(90.0)
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for entry in &self.diagnostics_log {
                                ui.label(entry);
                            }
                        });
                });
        });
    }
}

impl eframe::App for FormbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_top_bar(ctx);
        self.render_left_panel(ctx);
        self.render_canvas_panel(ctx);
    }
}
