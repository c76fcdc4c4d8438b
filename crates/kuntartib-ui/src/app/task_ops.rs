//! Task mutations: the single choke point between the views and the
//! board, responsible for history commits and synchronous persistence.

use kuntartib_core::{Board, Task};

use super::{App, DialogState};

/// Deferred mutation collected while a view renders.
///
/// Views iterate the board immutably (or with per-task mutable borrows)
/// and queue actions; the app applies them after the frame's widgets are
/// done with the board.
#[derive(Debug, Clone)]
pub(crate) enum TaskAction {
    ToggleDone(String),
    RequestDelete(String),
    MoveUp(String),
    MoveDown(String),
    SendTo { task_id: String, column_id: String },
    /// A title/notes edit session ended (focus left the text field).
    CommitEdit,
}

impl App {
    /// Records the current board as an undo step and persists it.
    ///
    /// Every undo-worthy mutation funnels through here, so one user action
    /// maps to exactly one history entry.
    pub(crate) fn commit_and_persist(&mut self) {
        if let Err(e) = self.history.commit(&self.board) {
            tracing::warn!("Board snapshot rejected: {e}");
        }
        self.persist_board();
    }

    /// Adopts a snapshot returned by undo/redo.
    ///
    /// Runs inside the replay-guard window so anything reacting to the
    /// adoption cannot re-enter the history.
    fn adopt_snapshot(&mut self, snapshot: Board) {
        self.history.begin_replay();
        self.board = snapshot;
        self.persist_board();
        self.history.end_replay();
    }

    /// Steps the board back one history entry, if possible.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.undo() {
            self.adopt_snapshot(snapshot);
        }
    }

    /// Steps the board forward one history entry, if possible.
    pub fn redo(&mut self) {
        if let Some(snapshot) = self.history.redo() {
            self.adopt_snapshot(snapshot);
        }
    }

    /// Creates a task from the input field, into the given column.
    ///
    /// Whitespace-only input is ignored.
    pub fn add_task_from_input(&mut self, column_id: &str) {
        let title = self.new_task_text.trim().to_string();
        if title.is_empty() {
            return;
        }
        self.new_task_text.clear();

        if let Err(e) = self.board.add_task(column_id, Task::new(title)) {
            tracing::warn!("Failed to add task: {e}");
            return;
        }
        self.commit_and_persist();
    }

    /// Flips a task's done flag.
    pub fn toggle_done(&mut self, task_id: &str) {
        let Some(task) = self.board.task_mut(task_id) else {
            return;
        };
        task.done = !task.done;
        self.commit_and_persist();
    }

    /// Opens the delete confirmation dialog for a task.
    pub(crate) fn request_delete(&mut self, task_id: &str) {
        self.dialog_state = DialogState::ConfirmDelete(task_id.to_string());
    }

    /// Deletes a task outright (the confirmation already happened).
    pub fn delete_task(&mut self, task_id: &str) {
        if self.board.remove_task(task_id).is_none() {
            return;
        }
        self.commit_and_persist();
    }

    /// Moves a task one position up or down within its column.
    fn nudge_task(&mut self, task_id: &str, down: bool) {
        let Some((column_id, index)) = self.board.locate(task_id) else {
            return;
        };
        let column_id = column_id.to_string();
        let len = self
            .board
            .column(&column_id)
            .map(|c| c.tasks.len())
            .unwrap_or(0);
        if (!down && index == 0) || (down && index + 1 >= len) {
            return;
        }
        let target = if down { index + 1 } else { index - 1 };
        if let Err(e) = self.board.move_task(task_id, &column_id, target) {
            tracing::warn!("Failed to reorder task: {e}");
            return;
        }
        self.commit_and_persist();
    }

    /// Moves a task to the end of another column.
    pub fn send_task_to(&mut self, task_id: &str, column_id: &str) {
        let target_len = match self.board.column(column_id) {
            Some(column) => column.tasks.len(),
            None => return,
        };
        if let Err(e) = self.board.move_task(task_id, column_id, target_len) {
            tracing::warn!("Failed to move task: {e}");
            return;
        }
        self.commit_and_persist();
    }

    /// Applies the actions a view queued during rendering.
    pub(crate) fn apply_actions(&mut self, actions: Vec<TaskAction>) {
        for action in actions {
            match action {
                TaskAction::ToggleDone(id) => self.toggle_done(&id),
                TaskAction::RequestDelete(id) => self.request_delete(&id),
                TaskAction::MoveUp(id) => self.nudge_task(&id, false),
                TaskAction::MoveDown(id) => self.nudge_task(&id, true),
                TaskAction::SendTo { task_id, column_id } => {
                    self.send_task_to(&task_id, &column_id)
                }
                TaskAction::CommitEdit => self.commit_and_persist(),
            }
        }
    }
}
