//! Kanban board view: one column of cards per board column.

use eframe::egui;

use kuntartib_core::Task;

use super::task_ops::TaskAction;
use super::App;

impl App {
    /// Renders the kanban board.
    pub(crate) fn show_board_view(&mut self, ui: &mut egui::Ui) {
        let strings = self.strings();
        let show_completed = self.show_completed_tasks;

        // Snapshot of column identities for the send-to menus
        let column_choices: Vec<(String, String)> = self
            .board
            .columns
            .iter()
            .map(|c| (c.id.clone(), c.title.clone()))
            .collect();

        let mut actions: Vec<TaskAction> = Vec::new();
        let column_count = self.board.columns.len();

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.columns(column_count, |columns| {
                for (idx, column) in self.board.columns.iter().enumerate() {
                    let ui = &mut columns[idx];

                    ui.heading(&column.title);
                    ui.weak(format!("{}", column.tasks.len()));
                    ui.separator();

                    for task in &column.tasks {
                        if task.done && !show_completed {
                            continue;
                        }
                        // Scope widget ids to the task so identical button
                        // labels across cards don't collide
                        ui.push_id(&task.id, |ui| {
                            show_task_card(
                                ui,
                                task,
                                &column.id,
                                &column_choices,
                                strings,
                                &mut actions,
                            );
                        });
                        ui.add_space(4.0);
                    }
                }
            });
        });

        self.apply_actions(actions);
    }
}

/// Renders one task card with its reorder, move, and delete controls.
fn show_task_card(
    ui: &mut egui::Ui,
    task: &Task,
    column_id: &str,
    column_choices: &[(String, String)],
    strings: &'static kuntartib_config::Strings,
    actions: &mut Vec<TaskAction>,
) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical(|ui| {
            let title = if task.done {
                egui::RichText::new(&task.title).strikethrough()
            } else {
                egui::RichText::new(&task.title).strong()
            };
            ui.label(title);

            if !task.notes.is_empty() {
                ui.weak(&task.notes);
            }
            if let Some(due_at) = task.due_at {
                let due_local = due_at.with_timezone(&chrono::Local);
                let label = format!("{} {}", strings.task_due, due_local.format("%m-%d %H:%M"));
                if task.is_overdue(chrono::Utc::now()) {
                    ui.colored_label(ui.visuals().error_fg_color, label);
                } else {
                    ui.weak(label);
                }
            }

            ui.horizontal(|ui| {
                if ui.small_button("^").clicked() {
                    actions.push(TaskAction::MoveUp(task.id.clone()));
                }
                if ui.small_button("v").clicked() {
                    actions.push(TaskAction::MoveDown(task.id.clone()));
                }
                ui.menu_button(strings.column_send_to, |ui| {
                    for (target_id, target_title) in column_choices {
                        if target_id == column_id {
                            continue;
                        }
                        if ui.button(target_title).clicked() {
                            actions.push(TaskAction::SendTo {
                                task_id: task.id.clone(),
                                column_id: target_id.clone(),
                            });
                            ui.close();
                        }
                    }
                });
                if ui.small_button("x").clicked() {
                    actions.push(TaskAction::RequestDelete(task.id.clone()));
                }
            });
        });
    });
}
