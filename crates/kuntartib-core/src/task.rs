/// Task model.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single task on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identity (uuid v4 string).
    pub id: String,
    pub title: String,
    /// Free-form notes, possibly empty.
    pub notes: String,
    pub created_at: DateTime<Utc>,
    /// When the task is due; `None` for tasks without a deadline.
    pub due_at: Option<DateTime<Utc>>,
    pub done: bool,
    /// Focus sessions completed while this task was selected.
    pub completed_pomodoros: u32,
}

impl Task {
    /// Creates a new open task with a fresh id, stamped now.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            notes: String::new(),
            created_at: Utc::now(),
            due_at: None,
            done: false,
            completed_pomodoros: 0,
        }
    }

    /// Builder-style due date, used by tests and the CLI seed task.
    pub fn with_due(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Whether the task is overdue at `now` (never true once done).
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.done && self.due_at.is_some_and(|due| due < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new("write report");
        assert_eq!(task.title, "write report");
        assert!(task.notes.is_empty());
        assert!(task.due_at.is_none());
        assert!(!task.done);
        assert_eq!(task.completed_pomodoros, 0);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = Task::new("a");
        let b = Task::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_overdue() {
        let now = Utc::now();
        let mut task = Task::new("t").with_due(now - Duration::hours(1));
        assert!(task.is_overdue(now));

        task.done = true;
        assert!(!task.is_overdue(now));
    }

    #[test]
    fn test_not_overdue_without_due_date() {
        let task = Task::new("t");
        assert!(!task.is_overdue(Utc::now()));
    }

    #[test]
    fn test_not_overdue_before_deadline() {
        let now = Utc::now();
        let task = Task::new("t").with_due(now + Duration::hours(2));
        assert!(!task.is_overdue(now));
    }
}
