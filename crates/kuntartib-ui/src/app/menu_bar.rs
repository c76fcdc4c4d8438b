//! Menu bar rendering.
//!
//! Contains the File, Edit, View, Settings, and Help menus.

use eframe::egui;

use kuntartib_config::Locale;

use super::{App, ThemeMode, ViewKind};

impl App {
    /// Renders the menu bar.
    pub(crate) fn show_menu_bar(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let strings = self.strings();

        egui::MenuBar::new().ui(ui, |ui| {
            // File menu
            ui.menu_button(strings.menu_file, |ui| {
                if ui
                    .button(format!("{}    Ctrl+N", strings.action_new_task))
                    .clicked()
                {
                    self.active_view = ViewKind::Tasks;
                    self.request_input_focus = true;
                    ui.close();
                }
                ui.separator();
                if ui
                    .button(format!("{}    Ctrl+S", strings.action_save_now))
                    .clicked()
                {
                    self.persist_board();
                    ui.close();
                }
                ui.separator();
                if ui.button(strings.action_exit).clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close();
                }
            });

            // Edit menu
            ui.menu_button(strings.menu_edit, |ui| {
                let can_undo = self.history.can_undo();
                let can_redo = self.history.can_redo();

                if ui
                    .add_enabled(
                        can_undo,
                        egui::Button::new(format!("{}    Ctrl+Z", strings.action_undo)),
                    )
                    .clicked()
                {
                    self.undo();
                    ui.close();
                }
                if ui
                    .add_enabled(
                        can_redo,
                        egui::Button::new(format!("{}    Ctrl+Y", strings.action_redo)),
                    )
                    .clicked()
                {
                    self.redo();
                    ui.close();
                }
                ui.separator();
                if ui.button(strings.action_clear_history).clicked() {
                    self.history.clear();
                    ui.close();
                }
            });

            // View menu
            ui.menu_button(strings.menu_view, |ui| {
                if ui
                    .button(format!("{}    Ctrl+1", strings.view_tasks))
                    .clicked()
                {
                    self.active_view = ViewKind::Tasks;
                    ui.close();
                }
                if ui
                    .button(format!("{}    Ctrl+2", strings.view_board))
                    .clicked()
                {
                    self.active_view = ViewKind::Board;
                    ui.close();
                }
                if ui
                    .button(format!("{}    Ctrl+3", strings.view_pomodoro))
                    .clicked()
                {
                    self.active_view = ViewKind::Pomodoro;
                    ui.close();
                }
                ui.separator();
                if ui
                    .checkbox(&mut self.show_completed_tasks, strings.show_completed)
                    .clicked()
                {
                    ui.close();
                }
                ui.separator();

                // Theme submenu
                ui.menu_button(strings.settings_theme, |ui| {
                    let ctx_clone = ctx.clone();
                    if ui
                        .radio(self.theme_mode.is_system(), strings.theme_system)
                        .clicked()
                    {
                        self.set_theme_mode(ThemeMode::system(), &ctx_clone);
                        ui.close();
                    }
                    if ui
                        .radio(self.theme_mode.0 == "Dark", strings.theme_dark)
                        .clicked()
                    {
                        self.set_theme_mode(ThemeMode::dark(), &ctx_clone);
                        ui.close();
                    }
                    if ui
                        .radio(self.theme_mode.0 == "Light", strings.theme_light)
                        .clicked()
                    {
                        self.set_theme_mode(ThemeMode::light(), &ctx_clone);
                        ui.close();
                    }
                });

                // Language submenu
                ui.menu_button(strings.settings_language, |ui| {
                    for locale in Locale::all() {
                        if ui
                            .radio(self.locale == locale, locale.display_name())
                            .clicked()
                        {
                            self.set_locale(locale);
                            ui.close();
                        }
                    }
                });
            });

            // Settings menu
            ui.menu_button(strings.menu_settings, |ui| {
                if ui.button(strings.action_preferences).clicked() {
                    self.settings_open = true;
                    ui.close();
                }
            });

            // Help menu
            ui.menu_button(strings.menu_help, |ui| {
                if ui.button(strings.action_about).clicked() {
                    self.about_open = true;
                    ui.close();
                }
            });
        });
    }
}
