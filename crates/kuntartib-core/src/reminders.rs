/// Due-task reminders.
///
/// Session-scoped: the ledger remembers which tasks already fired so a
/// reminder surfaces once, and re-arms when the task's due date changes.
/// Nothing here is persisted; a restart starts with a clean ledger.
use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::board::Board;

/// A reminder to surface to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task_id: String,
    pub title: String,
    pub due_at: DateTime<Utc>,
    /// True when the due time has already passed.
    pub overdue: bool,
}

/// Tracks which (task, due time) pairs have already fired this session.
#[derive(Debug, Clone, Default)]
pub struct ReminderLedger {
    fired: HashMap<String, DateTime<Utc>>,
}

impl ReminderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects reminders for open tasks due within `lead` of `now`.
    ///
    /// Each task fires at most once per due date; rescheduling a task
    /// re-arms its reminder. Completed tasks never fire.
    pub fn due_now(&mut self, board: &Board, now: DateTime<Utc>, lead: Duration) -> Vec<Reminder> {
        let horizon = now + lead;
        let mut fired = Vec::new();

        for task in board.columns.iter().flat_map(|c| c.tasks.iter()) {
            if task.done {
                continue;
            }
            let Some(due_at) = task.due_at else {
                continue;
            };
            if due_at > horizon {
                continue;
            }
            if self.fired.get(&task.id) == Some(&due_at) {
                continue;
            }
            self.fired.insert(task.id.clone(), due_at);
            fired.push(Reminder {
                task_id: task.id.clone(),
                title: task.title.clone(),
                due_at,
                overdue: due_at < now,
            });
        }

        fired
    }

    /// Forgets a task (so a re-added task with the same id can fire again).
    pub fn forget(&mut self, task_id: &str) {
        self.fired.remove(task_id);
    }

    /// Drops the whole ledger.
    pub fn clear(&mut self) {
        self.fired.clear();
    }
}
