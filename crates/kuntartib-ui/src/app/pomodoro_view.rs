//! Pomodoro timer view.

use eframe::egui;

use kuntartib_core::Phase;

use super::App;

/// Formats a remaining duration as `mm:ss`.
fn format_remaining(remaining: std::time::Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

impl App {
    /// Renders the pomodoro timer.
    pub(crate) fn show_pomodoro_view(&mut self, ui: &mut egui::Ui) {
        let strings = self.strings();

        let phase_label = match self.pomodoro.phase() {
            Phase::Idle => strings.pomodoro_idle,
            Phase::Focus => strings.pomodoro_focus,
            Phase::ShortBreak => strings.pomodoro_short_break,
            Phase::LongBreak => strings.pomodoro_long_break,
        };

        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(phase_label);
            ui.add_space(8.0);

            ui.label(
                egui::RichText::new(format_remaining(self.pomodoro.remaining()))
                    .size(48.0)
                    .monospace(),
            );
            ui.add_space(8.0);

            ui.add(
                egui::ProgressBar::new(self.pomodoro.progress())
                    .desired_width(320.0),
            );
            ui.add_space(16.0);

            ui.horizontal(|ui| {
                // Center the button row roughly under the progress bar
                ui.add_space((ui.available_width() / 2.0 - 160.0).max(0.0));

                match (self.pomodoro.phase(), self.pomodoro.is_running()) {
                    (Phase::Idle, _) => {
                        if ui.button(strings.pomodoro_start).clicked() {
                            self.pomodoro.start();
                        }
                    }
                    (_, true) => {
                        if ui.button(strings.pomodoro_pause).clicked() {
                            self.pomodoro.pause();
                        }
                    }
                    (_, false) => {
                        if ui.button(strings.pomodoro_resume).clicked() {
                            self.pomodoro.resume();
                        }
                    }
                }

                if self.pomodoro.phase() != Phase::Idle {
                    if ui.button(strings.pomodoro_skip).clicked() {
                        if let Some(event) = self.pomodoro.skip() {
                            self.on_phase_event(event);
                        }
                    }
                    if ui.button(strings.pomodoro_reset).clicked() {
                        self.pomodoro.reset();
                    }
                }
            });

            ui.add_space(24.0);
            ui.separator();
            ui.add_space(8.0);

            // Which task this focus session counts toward
            let open_tasks: Vec<(String, String)> = self
                .board
                .columns
                .iter()
                .flat_map(|c| c.tasks.iter())
                .filter(|t| !t.done)
                .map(|t| (t.id.clone(), t.title.clone()))
                .collect();

            if !open_tasks.is_empty() {
                let selected_label = self
                    .focus_task_id
                    .as_ref()
                    .and_then(|id| {
                        open_tasks
                            .iter()
                            .find(|(tid, _)| tid == id)
                            .map(|(_, title)| title.clone())
                    })
                    .unwrap_or_else(|| "-".to_string());

                egui::ComboBox::from_label(strings.view_tasks)
                    .selected_text(selected_label)
                    .show_ui(ui, |ui| {
                        for (id, title) in &open_tasks {
                            let checked = self.focus_task_id.as_deref() == Some(id.as_str());
                            if ui.selectable_label(checked, title).clicked() {
                                self.focus_task_id = Some(id.clone());
                            }
                        }
                    });
            }

            ui.add_space(8.0);
            let today = chrono::Local::now().date_naive();
            ui.label(format!(
                "{}: {}",
                strings.pomodoro_sessions_today,
                self.tally.on(today)
            ));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_remaining() {
        assert_eq!(format_remaining(Duration::from_secs(0)), "00:00");
        assert_eq!(format_remaining(Duration::from_secs(65)), "01:05");
        assert_eq!(format_remaining(Duration::from_secs(25 * 60)), "25:00");
    }
}
