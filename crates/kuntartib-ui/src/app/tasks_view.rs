//! Flat task-list view: quick entry box plus every task grouped by column.

use eframe::egui;

use super::task_ops::TaskAction;
use super::App;

impl App {
    /// Renders the task list.
    pub(crate) fn show_tasks_view(&mut self, ui: &mut egui::Ui) {
        let strings = self.strings();
        let first_column_id = self.board.columns[0].id.clone();

        // Quick entry
        ui.horizontal(|ui| {
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.new_task_text)
                    .hint_text(strings.add_task_hint)
                    .desired_width(320.0),
            );
            if self.request_input_focus {
                response.request_focus();
                self.request_input_focus = false;
            }
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if ui.button(strings.add_button).clicked() || submitted {
                self.add_task_from_input(&first_column_id);
            }
        });

        ui.separator();

        let show_completed = self.show_completed_tasks;
        let mut actions: Vec<TaskAction> = Vec::new();
        let mut edit_finished = false;

        egui::ScrollArea::vertical().show(ui, |ui| {
            for column in &mut self.board.columns {
                let visible = column
                    .tasks
                    .iter()
                    .filter(|t| show_completed || !t.done)
                    .count();
                if visible == 0 {
                    continue;
                }

                ui.add_space(4.0);
                ui.heading(&column.title);
                ui.add_space(2.0);

                for task in &mut column.tasks {
                    if task.done && !show_completed {
                        continue;
                    }

                    ui.horizontal(|ui| {
                        let mut done = task.done;
                        if ui.checkbox(&mut done, "").clicked() {
                            actions.push(TaskAction::ToggleDone(task.id.clone()));
                        }

                        let title_edit = ui.add(
                            egui::TextEdit::singleline(&mut task.title).desired_width(280.0),
                        );
                        if title_edit.changed() {
                            edit_finished = false;
                            self.title_edit_dirty = true;
                        }
                        if title_edit.lost_focus() && self.title_edit_dirty {
                            edit_finished = true;
                        }

                        if let Some(due_at) = task.due_at {
                            let due_local = due_at.with_timezone(&chrono::Local);
                            let label = format!(
                                "{} {}",
                                strings.task_due,
                                due_local.format("%Y-%m-%d %H:%M")
                            );
                            if task.is_overdue(chrono::Utc::now()) {
                                ui.colored_label(ui.visuals().error_fg_color, label);
                            } else {
                                ui.weak(label);
                            }
                        }

                        if task.completed_pomodoros > 0 {
                            ui.weak(format!("x{}", task.completed_pomodoros));
                        }

                        if ui.small_button("^").clicked() {
                            actions.push(TaskAction::MoveUp(task.id.clone()));
                        }
                        if ui.small_button("v").clicked() {
                            actions.push(TaskAction::MoveDown(task.id.clone()));
                        }
                        if ui.small_button("x").clicked() {
                            actions.push(TaskAction::RequestDelete(task.id.clone()));
                        }
                    });
                }
            }
        });

        if edit_finished {
            self.title_edit_dirty = false;
            actions.push(TaskAction::CommitEdit);
        }
        self.apply_actions(actions);
    }
}
