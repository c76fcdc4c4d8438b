/// Snapshot-based undo controller for the board.
///
/// Wraps a `BoundedHistory<Board>`: the app commits a snapshot after every
/// undo-worthy mutation, and adopts the returned snapshot wholesale on
/// undo/redo. The controller validates boards before recording them and
/// exposes the replay-guard window used while a snapshot is applied back
/// to the live state.
use anyhow::{Context, Result};

use kuntartib_mod_history::{BoundedHistory, HistoryConfig};

use crate::board::Board;

/// Per-session undo/redo history over full board snapshots.
///
/// Never persisted; a fresh session starts with an empty history that the
/// app seeds with the loaded board.
pub struct SnapshotHistory {
    stack: BoundedHistory<Board>,
}

impl std::fmt::Debug for SnapshotHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotHistory")
            .field("stack", &self.stack)
            .finish()
    }
}

impl SnapshotHistory {
    /// Creates an empty history with the given depth.
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            stack: BoundedHistory::new(config),
        }
    }

    /// Records a board snapshot as the new current state.
    ///
    /// Rejects structurally invalid boards (duplicate ids) without
    /// touching the stack. Suppressed while a replay is in progress.
    ///
    /// # Errors
    ///
    /// Returns an error describing the integrity violation.
    pub fn commit(&mut self, board: &Board) -> Result<()> {
        board
            .validate()
            .context("Refusing to record invalid board snapshot")?;
        self.stack.push(board.clone());
        Ok(())
    }

    /// Steps back and returns the snapshot to adopt, if any.
    pub fn undo(&mut self) -> Option<Board> {
        self.stack.undo().cloned()
    }

    /// Steps forward and returns the snapshot to adopt, if any.
    pub fn redo(&mut self) -> Option<Board> {
        self.stack.redo().cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    /// Opens the replay-guard window: commits fired by observers while an
    /// undone/redone snapshot is applied are swallowed.
    pub fn begin_replay(&mut self) {
        self.stack.pause_recording();
    }

    /// Closes the replay-guard window.
    pub fn end_replay(&mut self) {
        self.stack.resume_recording();
    }

    /// Drops all history except the current snapshot.
    pub fn clear(&mut self) {
        self.stack.clear();
    }

    /// Number of retained snapshots.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn history() -> SnapshotHistory {
        SnapshotHistory::new(HistoryConfig::with_capacity(10))
    }

    fn board_with(titles: &[&str]) -> Board {
        let mut board = Board::default();
        let todo = board.columns[0].id.clone();
        for title in titles {
            board.add_task(&todo, Task::new(*title)).expect("add");
        }
        board
    }

    #[test]
    fn test_commit_undo_redo() {
        let mut history = history();
        let empty = Board::default();
        let one = board_with(&["a"]);

        history.commit(&empty).expect("seed");
        history.commit(&one).expect("commit");

        assert!(history.can_undo());
        let restored = history.undo().expect("undo");
        assert_eq!(restored.task_count(), 0);

        let redone = history.redo().expect("redo");
        assert_eq!(redone.task_count(), 1);
    }

    #[test]
    fn test_commit_rejects_invalid_board() {
        let mut history = history();
        let mut board = board_with(&["a"]);
        let dup = board.columns[0].tasks[0].clone();
        board.columns[0].tasks.push(dup);

        assert!(history.commit(&board).is_err());
        assert_eq!(history.depth(), 0);
    }

    #[test]
    fn test_commit_during_replay_is_swallowed() {
        let mut history = history();
        history.commit(&Board::default()).expect("seed");
        history.commit(&board_with(&["a"])).expect("commit");

        let restored = history.undo().expect("undo");
        history.begin_replay();
        // An observer reacting to the restored board tries to commit it
        history.commit(&restored).expect("echo commit");
        history.end_replay();

        assert_eq!(history.depth(), 2);
        assert!(history.can_redo());
    }

    #[test]
    fn test_boundary_undo_is_noop() {
        let mut history = history();
        history.commit(&Board::default()).expect("seed");
        assert!(!history.can_undo());
        assert!(history.undo().is_none());
        assert!(history.undo().is_none());
    }

    #[test]
    fn test_clear_keeps_current() {
        let mut history = history();
        history.commit(&Board::default()).expect("seed");
        history.commit(&board_with(&["a"])).expect("commit");
        history.commit(&board_with(&["a", "b"])).expect("commit");

        history.clear();
        assert_eq!(history.depth(), 1);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }
}
