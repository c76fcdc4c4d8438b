//! In-app settings dialog.
//!
//! Provides a tabbed interface for General, Pomodoro, Sound, and History
//! settings.

use eframe::egui;

use kuntartib_config::Locale;

use super::{App, ThemeMode};

/// Which section of the settings dialog is currently visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum SettingsTab {
    #[default]
    General,
    Pomodoro,
    Sound,
    History,
}

impl App {
    /// Renders the settings dialog window.
    ///
    /// Returns `true` if the dialog is open (for dialog gating).
    pub(crate) fn show_settings_dialog(&mut self, ctx: &egui::Context) -> bool {
        if !self.settings_open {
            return false;
        }
        let strings = self.strings();

        let mut open = true;
        egui::Window::new(strings.settings_title)
            .collapsible(false)
            .resizable(true)
            .default_width(460.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                // Tab strip
                ui.horizontal(|ui| {
                    ui.selectable_value(
                        &mut self.settings_tab,
                        SettingsTab::General,
                        strings.settings_general,
                    );
                    ui.selectable_value(
                        &mut self.settings_tab,
                        SettingsTab::Pomodoro,
                        strings.settings_pomodoro,
                    );
                    ui.selectable_value(
                        &mut self.settings_tab,
                        SettingsTab::Sound,
                        strings.settings_sound,
                    );
                    ui.selectable_value(
                        &mut self.settings_tab,
                        SettingsTab::History,
                        strings.settings_history,
                    );
                });

                ui.separator();

                match self.settings_tab {
                    SettingsTab::General => self.settings_general(ui, ctx),
                    SettingsTab::Pomodoro => self.settings_pomodoro(ui),
                    SettingsTab::Sound => self.settings_sound(ui),
                    SettingsTab::History => self.settings_history(ui),
                }
            });

        if !open {
            self.settings_open = false;
        }

        self.settings_open
    }

    fn settings_general(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let strings = self.strings();

        ui.heading(strings.settings_general);
        ui.add_space(4.0);

        ui.checkbox(&mut self.show_completed_tasks, strings.show_completed);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        let theme_label = match self.theme_mode.0.as_str() {
            "Dark" => strings.theme_dark,
            "Light" => strings.theme_light,
            _ => strings.theme_system,
        };
        egui::ComboBox::from_label(strings.settings_theme)
            .selected_text(theme_label)
            .show_ui(ui, |ui| {
                let ctx_clone = ctx.clone();
                for (mode, label) in [
                    (ThemeMode::system(), strings.theme_system),
                    (ThemeMode::dark(), strings.theme_dark),
                    (ThemeMode::light(), strings.theme_light),
                ] {
                    if ui
                        .selectable_label(self.theme_mode == mode, label)
                        .clicked()
                    {
                        self.set_theme_mode(mode, &ctx_clone);
                    }
                }
            });

        ui.add_space(4.0);

        egui::ComboBox::from_label(strings.settings_language)
            .selected_text(self.locale.display_name())
            .show_ui(ui, |ui| {
                for locale in Locale::all() {
                    if ui
                        .selectable_label(self.locale == locale, locale.display_name())
                        .clicked()
                    {
                        self.set_locale(locale);
                    }
                }
            });

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(strings.settings_reminder_lead);
            let mut lead = self.reminder_lead_minutes;
            if ui
                .add(egui::DragValue::new(&mut lead).range(0..=24 * 60))
                .changed()
            {
                self.reminder_lead_minutes = lead;
            }
        });
    }

    fn settings_pomodoro(&mut self, ui: &mut egui::Ui) {
        let strings = self.strings();
        let mut settings = self.pomodoro.settings();
        let mut changed = false;

        ui.heading(strings.settings_pomodoro);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(strings.settings_focus_minutes);
            changed |= ui
                .add(egui::DragValue::new(&mut settings.focus_minutes).range(1..=180))
                .changed();
        });
        ui.horizontal(|ui| {
            ui.label(strings.settings_short_break_minutes);
            changed |= ui
                .add(egui::DragValue::new(&mut settings.short_break_minutes).range(1..=60))
                .changed();
        });
        ui.horizontal(|ui| {
            ui.label(strings.settings_long_break_minutes);
            changed |= ui
                .add(egui::DragValue::new(&mut settings.long_break_minutes).range(1..=120))
                .changed();
        });
        ui.horizontal(|ui| {
            ui.label(strings.settings_long_break_every);
            changed |= ui
                .add(egui::DragValue::new(&mut settings.long_break_every).range(1..=12))
                .changed();
        });
        changed |= ui
            .checkbox(&mut settings.auto_advance, strings.settings_auto_advance)
            .changed();

        if changed {
            // New durations apply from the next phase
            self.pomodoro.set_settings(settings);
        }
    }

    fn settings_sound(&mut self, ui: &mut egui::Ui) {
        let strings = self.strings();
        let mut settings = self.sound.settings();

        ui.heading(strings.settings_sound);
        ui.add_space(4.0);

        let enabled_changed = ui
            .checkbox(&mut settings.enabled, strings.settings_sound_enabled)
            .changed();

        let volume_changed = ui
            .add(
                egui::Slider::new(&mut settings.volume, 0.0..=1.0)
                    .text(strings.settings_sound_volume),
            )
            .changed();

        if enabled_changed || volume_changed {
            self.sound.update(|s| *s = settings);
        }
    }

    fn settings_history(&mut self, ui: &mut egui::Ui) {
        let strings = self.strings();

        ui.heading(strings.settings_history);
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label(strings.settings_history_depth);
            let mut depth = self.history_depth;
            if ui
                .add(egui::DragValue::new(&mut depth).range(1..=500))
                .changed()
            {
                // Capacity is fixed at construction; the new depth takes
                // effect at the next launch.
                self.history_depth = depth;
            }
        });

        ui.add_space(8.0);
        if ui.button(self.strings().action_clear_history).clicked() {
            self.history.clear();
        }
    }
}
