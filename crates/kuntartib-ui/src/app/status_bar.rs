//! Status bar rendering.
//!
//! Shows task counts, the pomodoro phase and remaining time, the undo
//! depth, the chime indicator, and the save state.

use eframe::egui;

use kuntartib_core::Phase;

use super::App;

impl App {
    /// Renders the status bar at the bottom of the application window.
    pub(crate) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        let strings = self.strings();

        ui.horizontal(|ui| {
            ui.label(format!(
                "{} {} · {} {}",
                self.board.open_count(),
                strings.status_open_tasks,
                self.board.done_count(),
                strings.status_done_tasks,
            ));

            ui.separator();

            // Pomodoro readout while a phase is active
            if self.pomodoro.phase() != Phase::Idle {
                let phase_label = match self.pomodoro.phase() {
                    Phase::Idle => strings.pomodoro_idle,
                    Phase::Focus => strings.pomodoro_focus,
                    Phase::ShortBreak => strings.pomodoro_short_break,
                    Phase::LongBreak => strings.pomodoro_long_break,
                };
                let secs = self.pomodoro.remaining().as_secs();
                ui.label(format!("{phase_label} {:02}:{:02}", secs / 60, secs % 60));
                ui.separator();
            }

            if self.chime_visible() {
                ui.label("♪");
                ui.separator();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match self.last_save_ok {
                    Some(true) => {
                        ui.weak(strings.status_saved);
                    }
                    Some(false) => {
                        ui.colored_label(ui.visuals().error_fg_color, strings.status_save_failed);
                    }
                    None => {}
                }

                if self.history.can_undo() || self.history.can_redo() {
                    ui.weak(format!("{} ⟲", self.history.depth()));
                }
            });
        });
    }
}
